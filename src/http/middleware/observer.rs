//! Request observer middleware.
//!
//! Wraps every request: resolves the client identity, times the call, and
//! logs the outcome. Errors go through `error!` so they land in the error
//! sink. Payloads pass through untouched.
//!
//! ```text
//! Received → Dispatched → Completed
//!                       ↘ Failed (panic logged, then resumed)
//! ```

use std::any::Any;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::panic::AssertUnwindSafe;
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, FromRequestParts, Request},
    http::{request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use futures_util::FutureExt;
use tracing::{error, info};

use crate::http::request::RequestIdExt;
use crate::observability::metrics;

pub const X_FORWARDED_FOR: &str = "x-forwarded-for";
pub const X_REAL_IP: &str = "x-real-ip";

/// Identity used when no source yields one.
pub const UNKNOWN_CLIENT: &str = "Unknown";

/// Best-effort origin of a request, attached to request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentity(pub String);

impl ClientIdentity {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClientIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<S> FromRequestParts<S> for ClientIdentity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<ClientIdentity>() {
            return Ok(identity.clone());
        }
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);
        Ok(ClientIdentity(client_identity(&parts.headers, peer)))
    }
}

/// Resolve the client identity.
///
/// Priority: first `X-Forwarded-For` entry, then `X-Real-IP`, then the peer
/// IP, then `"Unknown"`. Empty or non-UTF-8 header values are skipped.
pub fn client_identity(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    first_header_entry(headers, X_FORWARDED_FOR)
        .or_else(|| first_header_entry(headers, X_REAL_IP))
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

fn first_header_entry(headers: &HeaderMap, name: &str) -> Option<String> {
    let value = headers.get(name)?.to_str().ok()?;
    let first = value.split(',').next()?.trim();
    (!first.is_empty()).then(|| first.to_string())
}

/// Observe one request/response cycle.
///
/// Use with `axum::middleware::from_fn`. A panic from the inner handler is
/// logged and then resumed unchanged; converting it to a response is left
/// to an outer layer.
pub async fn observe_request(mut request: Request, next: Next) -> Response {
    let start = Instant::now();
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let client_ip = client_identity(request.headers(), peer);
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = request.request_id().to_string();

    request
        .extensions_mut()
        .insert(ClientIdentity(client_ip.clone()));

    info!(
        client_ip = %client_ip,
        request_id = %request_id,
        method = %method,
        path = %path,
        "Incoming request"
    );

    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => {
            let status = response.status();
            let duration_ms = start.elapsed().as_millis() as u64;
            if status.is_server_error() {
                error!(
                    client_ip = %client_ip,
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    status = status.as_u16(),
                    duration_ms,
                    "Request failed"
                );
            } else {
                info!(
                    client_ip = %client_ip,
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    status = status.as_u16(),
                    duration_ms,
                    "Request completed"
                );
            }
            metrics::record_request(method.as_str(), status.as_u16(), start);
            response
        }
        Err(payload) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            error!(
                client_ip = %client_ip,
                request_id = %request_id,
                method = %method,
                path = %path,
                duration_ms,
                panic = panic_message(payload.as_ref()),
                "Request failed"
            );
            metrics::record_request(method.as_str(), 500, start);
            std::panic::resume_unwind(payload)
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}

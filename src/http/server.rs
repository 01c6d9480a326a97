//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the calculator routes
//! - Wire up middleware (panic guard, request ID, tracing, observer, limits)
//! - Bind server to listener with peer address info
//! - Graceful shutdown on OS signal or the shutdown broadcast

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{catch_panic::CatchPanicLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::calculator::{Evaluator, OperationCatalog};
use crate::config::ServiceConfig;
use crate::http::handlers;
use crate::http::middleware::observer::observe_request;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::lifecycle::signals::shutdown_signal;

pub const CALCULATE_PATH: &str = "/api/calculator/calculate";
pub const OPERATIONS_PATH: &str = "/api/calculator/operations";
pub const HEALTH_PATH: &str = "/health";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub evaluator: Evaluator,
    pub catalog: Arc<OperationCatalog>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            evaluator: Evaluator::new(),
            catalog: Arc::new(OperationCatalog::new()),
        }
    }
}

/// HTTP server for the calculator API.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let router = Self::build_router(&config, AppState::default());
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Outermost first: panic guard, request ID, trace, observer, timeout.
    /// The body limit is enforced by the extractors, so oversized payloads
    /// are answered with the uniform error body.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route(CALCULATE_PATH, post(handlers::calculate))
            .route(OPERATIONS_PATH, get(handlers::operations))
            .route(HEALTH_PATH, get(handlers::health))
            .with_state(state)
            .layer(DefaultBodyLimit::max(config.security.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(middleware::from_fn(observe_request))
            .layer(TraceLayer::new_for_http())
            .layer(propagate_request_id_layer())
            .layer(set_request_id_layer())
            .layer(CatchPanicLayer::new())
    }

    /// A clone of the fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until a shutdown signal arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown_signal() => {}
                    _ = shutdown.recv() => {
                        tracing::info!("Shutdown requested");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

//! Calculator API handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::calculator::{CalculationRequest, CalculationResponse, OperationCatalog};
use crate::http::error::ApiError;
use crate::http::middleware::observer::ClientIdentity;
use crate::http::server::AppState;

/// `POST /api/calculator/calculate`
///
/// 200 on success, 400 on a domain error; the body shape is the same.
pub async fn calculate(
    State(state): State<AppState>,
    client: ClientIdentity,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CalculationResponse>), ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(client_ip = %client, error = %rejection, "Rejected calculation payload");
        ApiError::from(rejection)
    })?;

    info!(
        client_ip = %client,
        operand1 = request.operand1,
        operation = %request.operation,
        operand2 = request.operand2,
        "Calculation request received"
    );

    let response = state.evaluator.calculate(&request);

    if response.is_success() {
        info!(
            client_ip = %client,
            operand1 = request.operand1,
            operation = %request.operation,
            operand2 = request.operand2,
            result = response.result,
            "Calculation successful"
        );
        Ok((StatusCode::OK, Json(response)))
    } else {
        warn!(
            client_ip = %client,
            operand1 = request.operand1,
            operation = %request.operation,
            operand2 = request.operand2,
            message = %response.message,
            "Calculation failed"
        );
        Ok((StatusCode::BAD_REQUEST, Json(response)))
    }
}

/// `GET /api/calculator/operations`
pub async fn operations(
    State(state): State<AppState>,
    client: ClientIdentity,
) -> Json<OperationCatalog> {
    info!(client_ip = %client, "Operations list requested");
    Json(state.catalog.as_ref().clone())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

/// `GET /health`
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::server::{HttpServer, CALCULATE_PATH};
    use crate::config::ServiceConfig;
    use axum::{body::Body, http::{header, Request}};
    use tower::ServiceExt;
    use tracing_test::traced_test;

    #[tokio::test]
    #[traced_test]
    async fn test_success_logged_with_client_identity() {
        let req = Request::builder()
            .method("POST")
            .uri(CALCULATE_PATH)
            .header(header::CONTENT_TYPE, "application/json")
            .header("x-real-ip", "198.51.100.2")
            .body(Body::from(r#"{"operand1": 2, "operand2": 3, "operation": "add"}"#))
            .unwrap();
        let res = HttpServer::new(ServiceConfig::default())
            .router()
            .oneshot(req)
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        assert!(logs_contain("Calculation request received"));
        logs_assert(|lines: &[&str]| {
            let served = lines
                .iter()
                .filter(|line| line.contains("Calculation successful"))
                .filter(|line| line.contains("198.51.100.2"))
                .count();
            match served {
                1 => Ok(()),
                n => Err(format!("expected one client-tagged success event, got {n}")),
            }
        });
    }

    #[tokio::test]
    #[traced_test]
    async fn test_domain_error_logged_as_warning() {
        let req = Request::builder()
            .method("POST")
            .uri(CALCULATE_PATH)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"operand1": 1, "operand2": 0, "operation": "/"}"#))
            .unwrap();
        let res = HttpServer::new(ServiceConfig::default())
            .router()
            .oneshot(req)
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(logs_contain("Calculation failed"));
        assert!(!logs_contain("Calculation successful"));
    }
}

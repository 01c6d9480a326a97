//! API error responses.
//!
//! Transport-level failures that happen before the evaluator runs still
//! answer with the uniform `{result, status, message}` body.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::calculator::CalculationResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The body could not be decoded into a calculation request.
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(
                JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_),
            ) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::InvalidBody(rejection) => rejection.body_text(),
        };
        (status, Json(CalculationResponse::error(message))).into_response()
    }
}

//! Request, response, and error types for the calculation core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input to a single calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    /// Left-hand operand.
    #[serde(alias = "Operand1")]
    pub operand1: f64,
    /// Right-hand operand.
    #[serde(alias = "Operand2")]
    pub operand2: f64,
    /// Operation token, word or symbol form (case-insensitive).
    #[serde(alias = "Operation")]
    pub operation: String,
}

impl CalculationRequest {
    pub fn new(operand1: f64, operand2: f64, operation: impl Into<String>) -> Self {
        Self {
            operand1,
            operand2,
            operation: operation.into(),
        }
    }
}

/// Outcome discriminator. Callers branch on this, never on `message`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalculationStatus {
    Success,
    Error,
}

/// Uniform response body for both outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    /// Rounded result on success; `0` on error.
    pub result: f64,
    pub status: CalculationStatus,
    /// Empty on success; human-readable detail on error.
    pub message: String,
}

impl CalculationResponse {
    pub fn success(result: f64) -> Self {
        Self {
            result,
            status: CalculationStatus::Success,
            message: String::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            result: 0.0,
            status: CalculationStatus::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == CalculationStatus::Success
    }
}

/// Domain errors. These never escape the evaluator as faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    /// The token matches none of the supported operations.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Divide with a zero divisor.
    #[error("Division by zero is not allowed")]
    DivisionByZero,

    /// An operand is NaN or infinite.
    #[error("Operands must be finite numbers")]
    NonFiniteOperand,

    /// The arithmetic overflowed to infinity.
    #[error("Result is not a finite number")]
    NonFiniteResult,
}

impl From<CalculationError> for CalculationResponse {
    fn from(err: CalculationError) -> Self {
        CalculationResponse::error(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_wire_shape() {
        let json = serde_json::to_value(CalculationResponse::success(5.0)).unwrap();
        assert_eq!(json, serde_json::json!({"result": 5.0, "status": "Success", "message": ""}));

        let json = serde_json::to_value(CalculationResponse::from(CalculationError::DivisionByZero)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"result": 0.0, "status": "Error", "message": "Division by zero is not allowed"})
        );
    }

    #[test]
    fn test_request_accepts_pascal_case_fields() {
        let req: CalculationRequest =
            serde_json::from_str(r#"{"Operand1": 2, "Operand2": 3.5, "Operation": "+"}"#).unwrap();
        assert_eq!(req, CalculationRequest::new(2.0, 3.5, "+"));
    }

    #[test]
    fn test_request_requires_operation() {
        let res = serde_json::from_str::<CalculationRequest>(r#"{"operand1": 2, "operand2": 3}"#);
        assert!(res.is_err());
    }
}

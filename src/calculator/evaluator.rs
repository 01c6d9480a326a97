//! Request evaluation: validate, dispatch, round.

use tracing::{error, info};

use crate::calculator::operation::Operation;
use crate::calculator::types::{CalculationError, CalculationRequest, CalculationResponse};
use crate::observability::metrics;

/// Fractional digits kept in a successful result.
pub const RESULT_DECIMAL_PLACES: u32 = 6;

/// Round half away from zero at `places` fractional digits.
///
/// Values too large to scale are already integral at this precision and are
/// returned unchanged. Negative zero is normalized to `0.0`.
pub fn round_to_places(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Stateless calculation service.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate a request. Total over its input: every domain error is
    /// returned as an error-status response.
    pub fn calculate(&self, request: &CalculationRequest) -> CalculationResponse {
        info!(
            operand1 = request.operand1,
            operation = %request.operation,
            operand2 = request.operand2,
            "Starting calculation"
        );

        let (label, outcome) = match Operation::parse(&request.operation) {
            Ok(op) => (op.name(), Self::evaluate(op, request.operand1, request.operand2)),
            Err(err) => ("unsupported", Err(err)),
        };
        metrics::record_calculation(label, outcome.is_ok());

        match outcome {
            Ok(result) => {
                info!(
                    operand1 = request.operand1,
                    operation = %request.operation,
                    operand2 = request.operand2,
                    result,
                    "Calculation successful"
                );
                CalculationResponse::success(result)
            }
            Err(err) => {
                error!(
                    operand1 = request.operand1,
                    operation = %request.operation,
                    operand2 = request.operand2,
                    error = %err,
                    "Calculation error"
                );
                CalculationResponse::from(err)
            }
        }
    }

    fn evaluate(op: Operation, lhs: f64, rhs: f64) -> Result<f64, CalculationError> {
        if !lhs.is_finite() || !rhs.is_finite() {
            return Err(CalculationError::NonFiniteOperand);
        }
        let raw = op.apply(lhs, rhs)?;
        if !raw.is_finite() {
            return Err(CalculationError::NonFiniteResult);
        }
        Ok(round_to_places(raw, RESULT_DECIMAL_PLACES))
    }
}

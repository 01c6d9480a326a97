//! Calculation core.
//!
//! # Data Flow
//! ```text
//! CalculationRequest (wire payload)
//!     → operation.rs (token → Operation, alias table)
//!     → evaluator.rs (validate, dispatch, round)
//!     → CalculationResponse (Success | Error)
//! ```
//!
//! # Design Decisions
//! - The operation token is resolved once into an enum, then matched
//! - Domain errors are plain `Result` values, converted to an error response
//!   at the evaluator boundary; nothing in here panics on user input
//! - The evaluator is stateless and cheap to clone into handler state

pub mod evaluator;
pub mod operation;
pub mod types;

pub use evaluator::{round_to_places, Evaluator, RESULT_DECIMAL_PLACES};
pub use operation::{Operation, OperationCatalog, OperationInfo};
pub use types::{CalculationError, CalculationRequest, CalculationResponse, CalculationStatus};

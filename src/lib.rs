//! Calculator service library.
//!
//! Exposes the evaluation core (`calculator`) and the HTTP surface that
//! wraps it (`http`), plus the configuration, observability, and lifecycle
//! plumbing used by the binary.

pub mod calculator;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use calculator::{CalculationRequest, CalculationResponse, CalculationStatus, Evaluator};
pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;

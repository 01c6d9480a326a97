//! Rust client for the calculator service.

pub mod client;

pub use client::{
    CalculationRequest, CalculationResponse, CalculatorClient, OperationCatalog, OperationInfo,
    SdkError,
};

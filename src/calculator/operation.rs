//! Supported operations and their symbol aliases.

use serde::{Deserialize, Serialize};

use crate::calculator::types::CalculationError;

/// One of the four binary operations the service evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations, in catalog order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Resolve a caller-supplied token, ignoring case.
    ///
    /// The token is not trimmed: `" add"` is not a recognized operation.
    pub fn parse(token: &str) -> Result<Self, CalculationError> {
        let normalized = token.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|op| op.symbols().contains(&normalized.as_str()))
            .ok_or_else(|| CalculationError::UnsupportedOperation(token.to_string()))
    }

    /// Canonical name used in the catalog and in metrics labels.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "Add",
            Operation::Subtract => "Subtract",
            Operation::Multiply => "Multiply",
            Operation::Divide => "Divide",
        }
    }

    /// Accepted (lower-case) tokens for this operation.
    pub fn symbols(self) -> &'static [&'static str] {
        match self {
            Operation::Add => &["add", "+"],
            Operation::Subtract => &["subtract", "-"],
            Operation::Multiply => &["multiply", "*"],
            Operation::Divide => &["divide", "/"],
        }
    }

    /// Apply the arithmetic rule. Division by zero is a domain error.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalculationError> {
        match self {
            Operation::Add => Ok(lhs + rhs),
            Operation::Subtract => Ok(lhs - rhs),
            Operation::Multiply => Ok(lhs * rhs),
            Operation::Divide if rhs == 0.0 => Err(CalculationError::DivisionByZero),
            Operation::Divide => Ok(lhs / rhs),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Catalog entry for a single operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationInfo {
    pub name: String,
    pub symbols: Vec<String>,
}

impl From<Operation> for OperationInfo {
    fn from(op: Operation) -> Self {
        Self {
            name: op.name().to_string(),
            symbols: op.symbols().iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Static listing served by `GET /api/calculator/operations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationCatalog {
    pub supported_operations: Vec<OperationInfo>,
}

impl OperationCatalog {
    /// Build the catalog from the operation table.
    pub fn new() -> Self {
        Self {
            supported_operations: Operation::ALL.into_iter().map(OperationInfo::from).collect(),
        }
    }
}

impl Default for OperationCatalog {
    fn default() -> Self {
        Self::new()
    }
}

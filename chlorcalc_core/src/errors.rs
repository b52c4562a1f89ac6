//! # Error Types
//!
//! Structured error types for chlorcalc_core. The engine itself never
//! fails (see [`crate::calculations`]); these errors belong to the
//! input-collection boundary, where the caller checks non-negativity
//! before handing a record to the engine.
//!
//! ## Example
//!
//! ```rust
//! use chlorcalc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_tons(tons: f64) -> CalcResult<()> {
//!     if tons < 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "caustic_soda_prod_tons",
//!             tons.to_string(),
//!             "Production cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for chlorcalc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for the input boundary.
///
/// Each variant carries enough context to report the offending field
/// back to the operator without string parsing.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (negative, non-finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error =
            CalcError::invalid_input("power_rate_rs", "-5.0", "Rate cannot be negative");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        let error = CalcError::invalid_input("f", "v", "r");
        assert_eq!(error.error_code(), "INVALID_INPUT");
    }
}

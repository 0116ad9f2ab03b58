//! # Error Types
//!
//! Structured error types for duct_core. The formula functions fail with
//! [`CalcError::InvalidInput`], naming the offending parameter and the
//! constraint it violated. The remaining variants cover engine configuration.
//!
//! ## Example
//!
//! ```rust
//! use duct_core::errors::{CalcError, CalcResult};
//!
//! fn validate_width(width_in: f64) -> CalcResult<()> {
//!     if width_in <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "width_in",
//!             width_in.to_string(),
//!             "must be greater than zero",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_width(-2.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for duct_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation and configuration operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A formula input is out of range (negative, zero, or non-finite)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// An engine configuration value is unusable
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },

    /// File I/O error while reading configuration
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// TOML/JSON deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfig error
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Name of the offending field, when the error carries one
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::InvalidInput { field, .. } | CalcError::InvalidConfig { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::InvalidConfig { .. } => "INVALID_CONFIG",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

/// Reject NaN and infinities before range checks run.
pub(crate) fn require_finite(field: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), "must be a finite number"))
    }
}

/// `value >= 0`, finite.
pub(crate) fn require_non_negative(field: &str, value: f64) -> CalcResult<f64> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "must be non-negative"));
    }
    Ok(value)
}

/// `value > 0`, finite.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<f64> {
    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "must be greater than zero"));
    }
    Ok(value)
}

/// Fail when finite inputs overflow to a non-finite result.
pub(crate) fn require_finite_result(field: &str, input: f64, result: f64) -> CalcResult<f64> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::invalid_input(field, input.to_string(), "is too large to produce a finite result"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("cfm", "-1", "must be non-negative");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_input("a", "b", "c").error_code(), "INVALID_INPUT");
        assert_eq!(CalcError::invalid_config("widths", "empty").error_code(), "INVALID_CONFIG");
        assert_eq!(CalcError::serialization("bad toml").error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_display_names_field_and_constraint() {
        let msg = CalcError::invalid_input("width_in", "0", "must be greater than zero").to_string();
        assert!(msg.contains("width_in"));
        assert!(msg.contains("must be greater than zero"));
    }

    #[test]
    fn test_guards() {
        assert!(require_non_negative("cfm", 0.0).is_ok());
        assert!(require_non_negative("cfm", -0.1).is_err());
        assert!(require_positive("width_in", 0.0).is_err());
        assert!(require_positive("width_in", f64::NAN).is_err());
        assert_eq!(require_finite("v", f64::INFINITY).unwrap_err().field(), Some("v"));
        assert_eq!(require_finite_result("v", 1.0e200, 3.0).unwrap(), 3.0);
        assert!(require_finite_result("v", 1.0e200, f64::INFINITY).is_err());
    }
}

//! # Error Types
//!
//! Structured error types for calc_core. Recoverable widget failures
//! (empty or unparseable converter input, division by zero) never show up
//! here; they are rendered as sentinels or handled as state resets. What is
//! left are the failures a caller has to react to: unknown category or unit
//! names coming from an adapter, malformed command tokens, settings files
//! that can't be read, and conversions that blow up.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//! use calc_core::units;
//!
//! fn lookup(name: &str) -> CalcResult<&'static units::Category> {
//!     units::category(name).ok_or_else(|| CalcError::category_not_found(name))
//! }
//!
//! assert!(lookup("distance").is_ok());
//! assert_eq!(lookup("volume").unwrap_err().error_code(), "CATEGORY_NOT_FOUND");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for widget operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (bad command token, bad digit, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Unit category not present in the conversion table
    #[error("Category not found: {category}")]
    CategoryNotFound { category: String },

    /// Unit symbol not present in the active category
    #[error("Unit '{unit}' not found in category '{category}'")]
    UnitNotFound { category: String, unit: String },

    /// Calculation produced no usable value
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
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

    /// Create a CategoryNotFound error
    pub fn category_not_found(category: impl Into<String>) -> Self {
        CalcError::CategoryNotFound {
            category: category.into(),
        }
    }

    /// Create a UnitNotFound error
    pub fn unit_not_found(category: impl Into<String>, unit: impl Into<String>) -> Self {
        CalcError::UnitNotFound {
            category: category.into(),
            unit: unit.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculation_type: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
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

    /// Whether the error was caused by a name the caller supplied
    /// (as opposed to I/O or an internal failure).
    pub fn is_lookup_error(&self) -> bool {
        matches!(
            self,
            CalcError::CategoryNotFound { .. } | CalcError::UnitNotFound { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::CategoryNotFound { .. } => "CATEGORY_NOT_FOUND",
            CalcError::UnitNotFound { .. } => "UNIT_NOT_FOUND",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::unit_not_found("distance", "ft");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"UnitNotFound\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::category_not_found("volume").error_code(), "CATEGORY_NOT_FOUND");
        assert_eq!(
            CalcError::invalid_input("digit", "x", "not a digit").error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_error_messages() {
        let error = CalcError::unit_not_found("weight", "oz");
        assert_eq!(error.to_string(), "Unit 'oz' not found in category 'weight'");
        assert!(error.is_lookup_error());
        assert!(!CalcError::calculation_failed("conversion", "overflow").is_lookup_error());
    }
}

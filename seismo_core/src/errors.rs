//! # Error Types
//!
//! Structured error types for seismo_core. Every failure signals a problem
//! with caller-supplied data, not a transient condition, so none of these
//! are retried or recovered locally; callers propagate them with `?`.
//!
//! ## Example
//!
//! ```rust
//! use seismo_core::errors::{CalcError, CalcResult};
//!
//! fn validate_ductility(mu_t: f64) -> CalcResult<()> {
//!     if mu_t < 1.0 {
//!         return Err(CalcError::out_of_range("mu_t", mu_t, 1.0, 8.0));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for seismo_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic handling by consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A (value, unit) pair arrived with the wrong number of items
    #[error("Input pair must have exactly 2 items (got {len})")]
    InvalidInputShape { len: usize },

    /// A bare number reached the parser with no default units set
    #[error("No default units set; cannot parse unitless value {value}")]
    MissingUnits { value: String },

    /// Units are dimensionally incompatible
    #[error("Cannot convert '{from}' ({from_dims}) to '{to}' ({to_dims})")]
    Dimensionality {
        from: String,
        to: String,
        from_dims: String,
        to_dims: String,
    },

    /// A unit name is not in the registry
    #[error("Unknown unit: '{name}'")]
    UnknownUnit { name: String },

    /// A lookup position falls outside a table's domain
    #[error("'{name}' is out of range: {value} (table spans {min} to {max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A categorical table selector is not recognized
    #[error("Unknown seismic design category: '{category}'")]
    UnknownCategory { category: String },

    /// A shape or shape property is not in the shapes table
    #[error("Property '{property}' not found for shape '{shape}'")]
    PropertyNotFound { shape: String, property: String },

    /// Material not found in the material table
    #[error("Material not found: {name}")]
    MaterialNotFound { name: String },

    /// An input value is invalid (wrong sign, unsupported combination, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },
}

impl CalcError {
    /// Create an InvalidInputShape error
    pub fn invalid_input_shape(len: usize) -> Self {
        CalcError::InvalidInputShape { len }
    }

    /// Create a MissingUnits error
    pub fn missing_units(value: impl ToString) -> Self {
        CalcError::MissingUnits {
            value: value.to_string(),
        }
    }

    /// Create a Dimensionality error from display strings
    pub fn dimensionality(
        from: impl Into<String>,
        to: impl Into<String>,
        from_dims: impl Into<String>,
        to_dims: impl Into<String>,
    ) -> Self {
        CalcError::Dimensionality {
            from: from.into(),
            to: to.into(),
            from_dims: from_dims.into(),
            to_dims: to_dims.into(),
        }
    }

    /// Create an UnknownUnit error
    pub fn unknown_unit(name: impl Into<String>) -> Self {
        CalcError::UnknownUnit { name: name.into() }
    }

    /// Create an OutOfRange error
    pub fn out_of_range(name: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        CalcError::OutOfRange {
            name: name.into(),
            value,
            min,
            max,
        }
    }

    /// Create an UnknownCategory error
    pub fn unknown_category(category: impl Into<String>) -> Self {
        CalcError::UnknownCategory {
            category: category.into(),
        }
    }

    /// Create a PropertyNotFound error
    pub fn property_not_found(shape: impl Into<String>, property: impl Into<String>) -> Self {
        CalcError::PropertyNotFound {
            shape: shape.into(),
            property: property.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound { name: name.into() }
    }

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
            CalcError::InvalidInputShape { .. } => "INVALID_INPUT_SHAPE",
            CalcError::MissingUnits { .. } => "MISSING_UNITS",
            CalcError::Dimensionality { .. } => "DIMENSIONALITY",
            CalcError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            CalcError::OutOfRange { .. } => "OUT_OF_RANGE",
            CalcError::UnknownCategory { .. } => "UNKNOWN_CATEGORY",
            CalcError::PropertyNotFound { .. } => "PROPERTY_NOT_FOUND",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::out_of_range("T", 5.5, 0.25, 5.0);
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::missing_units(30.0).error_code(),
            "MISSING_UNITS"
        );
        assert_eq!(
            CalcError::unknown_category("Emax").error_code(),
            "UNKNOWN_CATEGORY"
        );
        assert_eq!(
            CalcError::property_not_found("W14X90", "Qz").error_code(),
            "PROPERTY_NOT_FOUND"
        );
    }

    #[test]
    fn test_error_display() {
        let error = CalcError::invalid_input_shape(3);
        assert_eq!(
            error.to_string(),
            "Input pair must have exactly 2 items (got 3)"
        );
    }
}

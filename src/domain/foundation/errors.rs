//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur when caller-supplied input violates a contract.
///
/// Well-formed inputs never produce errors: missing questions, empty answer
/// sets, empty journals, and absent axis estimates all degrade to documented
/// default outputs. `ValidationError` exists only for the input boundary:
/// values outside their fixed ranges or axis codes outside the four-axis
/// universe are rejected before any scoring logic runs.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Unknown axis code '{token}' (expected one of EI, SN, TF, JP)")]
    UnknownAxis { token: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an unknown axis code error.
    pub fn unknown_axis(token: impl Into<String>) -> Self {
        ValidationError::UnknownAxis { token: token.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_displays_correctly() {
        let err = ValidationError::empty_field("content");
        assert_eq!(format!("{}", err), "Field 'content' cannot be empty");
    }

    #[test]
    fn out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("answer score", 1.0, 5.0, 7.0);
        assert_eq!(
            format!("{}", err),
            "Field 'answer score' must be between 1 and 5, got 7"
        );
    }

    #[test]
    fn unknown_axis_displays_correctly() {
        let err = ValidationError::unknown_axis("XY");
        assert_eq!(
            format!("{}", err),
            "Unknown axis code 'XY' (expected one of EI, SN, TF, JP)"
        );
    }
}

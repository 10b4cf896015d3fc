//! # Error Types
//!
//! Domain-specific error types for bookcase-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bookcase-core errors (this file)                                      │
//! │  └── ValidationError  - Caller data violates a Book rule               │
//! │                                                                         │
//! │  bookcase-db errors (separate crate)                                   │
//! │  └── DbError          - Validation | NotFound | store failures         │
//! │                                                                         │
//! │  Flow: ValidationError → DbError → API boundary → status code          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant names the offending field and maps to one stable reason
//! code (`empty`, `too_long`, `out_of_range`) through [`ValidationError::reason`].

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Always recoverable by correcting the input; never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field is empty after trimming.
    #[error("{field} cannot be empty")]
    Empty { field: String },

    /// A text field is longer than allowed after trimming.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Numeric value is below a lower bound; there is no upper bound.
    #[error("{field} must be at least {min}")]
    BelowMinimum { field: String, min: i64 },
}

impl ValidationError {
    /// Creates an Empty error for the given field.
    pub fn empty(field: impl Into<String>) -> Self {
        ValidationError::Empty {
            field: field.into(),
        }
    }

    /// Creates a TooLong error for the given field.
    pub fn too_long(field: impl Into<String>, max: usize) -> Self {
        ValidationError::TooLong {
            field: field.into(),
            max,
        }
    }

    /// Creates an OutOfRange error for the given field.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
        }
    }

    /// Creates a BelowMinimum error for the given field.
    pub fn below_minimum(field: impl Into<String>, min: i64) -> Self {
        ValidationError::BelowMinimum {
            field: field.into(),
            min,
        }
    }

    /// The field that failed validation (`title`, `author`, `year`, ...).
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Empty { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::BelowMinimum { field, .. } => field,
        }
    }

    /// Stable machine-readable reason code.
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::Empty { .. } => "empty",
            ValidationError::TooLong { .. } => "too_long",
            ValidationError::OutOfRange { .. } | ValidationError::BelowMinimum { .. } => {
                "out_of_range"
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::empty("title");
        assert_eq!(err.to_string(), "title cannot be empty");

        let err = ValidationError::too_long("author", 255);
        assert_eq!(err.to_string(), "author must be at most 255 characters");

        let err = ValidationError::out_of_range("year", 1000, 2028);
        assert_eq!(err.to_string(), "year must be between 1000 and 2028");

        let err = ValidationError::below_minimum("year_from", 1000);
        assert_eq!(err.to_string(), "year_from must be at least 1000");
    }

    #[test]
    fn test_field_and_reason() {
        let err = ValidationError::empty("title");
        assert_eq!(err.field(), "title");
        assert_eq!(err.reason(), "empty");

        let err = ValidationError::too_long("author", 255);
        assert_eq!(err.field(), "author");
        assert_eq!(err.reason(), "too_long");

        let err = ValidationError::out_of_range("year", 1000, 2028);
        assert_eq!(err.field(), "year");
        assert_eq!(err.reason(), "out_of_range");

        // lower-bound-only checks share the range reason code
        let err = ValidationError::below_minimum("year_from", 1000);
        assert_eq!(err.field(), "year_from");
        assert_eq!(err.reason(), "out_of_range");
    }
}

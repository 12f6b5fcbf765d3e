//! Custom error types for the marina inventory manager
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// The main error type for marina operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarinaError {
    /// Malformed record: wrong field count or an unparseable numeric field
    #[error("Invalid record format: {0}")]
    Format(String),

    /// Category token that matches none of slip/land/trailer/storage
    #[error("Unknown storage category: '{0}'")]
    UnknownCategory(String),

    /// The fleet already holds its maximum number of records
    #[error("Marina is full ({0} boats), no more boats allowed")]
    CapacityExceeded(usize),

    /// Name lookup miss
    #[error("No boat named '{0}'")]
    NotFound(String),

    /// Payment larger than the outstanding balance
    #[error("Payment of {payment} exceeds amount owed ({owed})")]
    Overpayment { owed: Money, payment: Money },

    /// Payment that is zero or negative
    #[error("Payment must be a positive amount, got {0}")]
    InvalidAmount(Money),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl MarinaError {
    /// Create a format error for a specific field
    pub fn bad_field(field: &str, value: &str) -> Self {
        Self::Format(format!("field '{}' is not valid: '{}'", field, value))
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this is a format error
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}

impl From<std::io::Error> for MarinaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for MarinaError {
    fn from(err: csv::Error) -> Self {
        Self::Format(err.to_string())
    }
}

/// Result type alias for marina operations
pub type MarinaResult<T> = Result<T, MarinaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MarinaError::NotFound("Neptune".into());
        assert_eq!(err.to_string(), "No boat named 'Neptune'");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_overpayment_display() {
        let err = MarinaError::Overpayment {
            owed: Money::from_cents(30000),
            payment: Money::from_cents(999900),
        };
        assert_eq!(
            err.to_string(),
            "Payment of 9999.00 exceeds amount owed (300.00)"
        );
    }

    #[test]
    fn test_capacity_display() {
        let err = MarinaError::CapacityExceeded(120);
        assert_eq!(
            err.to_string(),
            "Marina is full (120 boats), no more boats allowed"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: MarinaError = io_err.into();
        assert!(matches!(err, MarinaError::Io(_)));
    }

    #[test]
    fn test_bad_field() {
        let err = MarinaError::bad_field("Length", "abc");
        assert!(err.is_format());
        assert_eq!(
            err.to_string(),
            "Invalid record format: field 'Length' is not valid: 'abc'"
        );
    }
}

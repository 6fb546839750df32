//! Custom error types for the vending machine
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The interactive session errors render as
//! the exact message shown to the customer before re-prompting.

use thiserror::Error;

use crate::models::Money;

/// The main error type for vending machine operations
#[derive(Error, Debug)]
pub enum VendingError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File and console I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Menu input that is not an integer
    #[error("Invalid Input")]
    InvalidInput(String),

    /// Menu input that is an integer outside the menu range
    #[error("Invalid choice. Please try again.")]
    InvalidChoice(i32),

    /// Purchase attempted with a code the inventory does not know
    #[error("Invalid item code!")]
    InvalidItemCode(String),

    /// Purchase price exceeds the current balance
    #[error("Insufficient funds!")]
    InsufficientFunds { needed: Money, available: Money },
}

impl VendingError {
    /// Create a "duplicate" error for inventory slots
    pub fn duplicate_slot(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Item",
            identifier: identifier.into(),
        }
    }

    /// Check if the session can report this error and keep going
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_)
                | Self::InvalidChoice(_)
                | Self::InvalidItemCode(_)
                | Self::InsufficientFunds { .. }
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for VendingError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for VendingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for vending machine operations
pub type VendingResult<T> = Result<T, VendingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VendingError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_session_messages() {
        assert_eq!(
            VendingError::InvalidInput("abc".into()).to_string(),
            "Invalid Input"
        );
        assert_eq!(
            VendingError::InvalidChoice(9).to_string(),
            "Invalid choice. Please try again."
        );
        assert_eq!(
            VendingError::InvalidItemCode("Z9".into()).to_string(),
            "Invalid item code!"
        );
        let err = VendingError::InsufficientFunds {
            needed: Money::from_cents(2000),
            available: Money::from_cents(500),
        };
        assert_eq!(err.to_string(), "Insufficient funds!");
    }

    #[test]
    fn test_duplicate_slot() {
        let err = VendingError::duplicate_slot("1");
        assert_eq!(err.to_string(), "Item already exists: 1");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_recoverable() {
        assert!(VendingError::InvalidChoice(0).is_recoverable());
        assert!(!VendingError::Io("closed".into()).is_recoverable());
        assert!(VendingError::Validation("bad".into()).is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: VendingError = io_err.into();
        assert!(matches!(err, VendingError::Io(_)));
    }
}

//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Storage errors (reading or rewriting the persisted stores)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Validation errors, tied to the parameter that was rejected
    #[error("Invalid value for '{param}': {message}")]
    Validation {
        param: &'static str,
        message: String,
    },

    /// Entity not found errors
    #[error("{entity} not found: {identifier}")]
    NotFound {
        entity: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ExpenseError {
    /// Create a validation error for a named parameter
    pub fn validation(param: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            param,
            message: message.into(),
        }
    }

    /// Create a not-found error for an expense id
    pub fn expense_not_found(id: u32) -> Self {
        Self::NotFound {
            entity: "Expense",
            identifier: id.to_string(),
        }
    }

    /// Create a not-found error for a budget month
    pub fn budget_not_found(key: impl Into<String>) -> Self {
        Self::NotFound {
            entity: "Budget",
            identifier: key.into(),
        }
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_names_parameter() {
        let err = ExpenseError::validation("amount", "must be positive");
        assert_eq!(err.to_string(), "Invalid value for 'amount': must be positive");
    }

    #[test]
    fn test_not_found_display() {
        let err = ExpenseError::expense_not_found(999);
        assert_eq!(err.to_string(), "Expense not found: 999");
    }
}

//! Custom error types for LedgerLite
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for LedgerLite operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Ledger file storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Transaction not found
    #[error("Transaction with ID {id} not found")]
    NotFound { id: u32 },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Create a "not found" error for a transaction id
    pub fn transaction_not_found(id: u32) -> Self {
        Self::NotFound { id }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for LedgerLite operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = LedgerError::transaction_not_found(42);
        assert_eq!(err.to_string(), "Transaction with ID 42 not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ledger_err: LedgerError = io_err.into();
        assert!(matches!(ledger_err, LedgerError::Io(_)));
    }
}

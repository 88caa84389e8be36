//! # Error Types
//!
//! Structured error types for math_core. Only the table generator can fail;
//! `sqrt` itself never returns an error (domain errors are whatever the
//! compiled-in delegate produces, e.g. NaN for negative input).
//!
//! ## Example
//!
//! ```rust
//! use math_core::errors::{MathError, MathResult};
//!
//! fn output_path(args: &[String]) -> MathResult<&str> {
//!     args.get(1)
//!         .map(String::as_str)
//!         .ok_or_else(|| MathError::missing_argument("output file"))
//! }
//!
//! assert!(output_path(&["make-table".to_string()]).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for math_core operations
pub type MathResult<T> = Result<T, MathError>;

/// Structured error type for table generation.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum MathError {
    /// A required command line argument was not supplied
    #[error("Required {argument}\nUsage: make-table <output-file>")]
    MissingArgument { argument: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },
}

impl MathError {
    /// Create a MissingArgument error
    pub fn missing_argument(argument: impl Into<String>) -> Self {
        MathError::MissingArgument {
            argument: argument.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        MathError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            MathError::MissingArgument { .. } => "MISSING_ARGUMENT",
            MathError::FileError { .. } => "FILE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = MathError::file_error("create temp file", "/no/such/dir/table.rs.tmp", "No such file or directory");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"FileError\""));
        let roundtrip: MathError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(MathError::missing_argument("output file").error_code(), "MISSING_ARGUMENT");
        assert_eq!(MathError::file_error("open", "table.rs", "denied").error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_usage_message() {
        let message = MathError::missing_argument("output file").to_string();
        assert!(message.starts_with("Required output file"));
        assert!(message.contains("Usage: make-table <output-file>"));
    }
}

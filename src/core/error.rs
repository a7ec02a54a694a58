//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`FileNavigatorError`] which covers every failure mode of
//! file-navigator: directory access, index parsing, navigation bounds, batch
//! filesystem operations and configuration handling. It uses `thiserror` for
//! ergonomic error definitions and includes constructors for the common cases.
//!
//! # Public API
//! - [`FileNavigatorError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, FileNavigatorError>`
//!
//! # Error Categories
//! - **Access**: a directory could not be listed
//! - **Index**: navigation index outside the fresh listing, or negative
//! - **Parse**: a token of an index list is not an integer
//! - **Filesystem operations**: copy, move or delete failed on one entry
//! - **Configuration**: config file could not be located, read, parsed or written

use crate::core::state::BatchOperation;
use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for file-navigator
#[derive(Error, Debug)]
pub enum FileNavigatorError {
    // Directory access errors
    #[error("Cannot read directory '{path}': {source}")]
    Access {
        path: PathBuf,
        source: std::io::Error,
    },

    // Index errors
    #[error("Index {index} is out of range ({len} entries available)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Index must not be negative (got {index})")]
    NegativeIndex { index: i64 },

    #[error("Invalid number: '{number}'. Enter indices like: 0 or 0,2,5")]
    InvalidNumber { number: String },

    // Batch operation errors
    #[error("Failed to {operation} '{path}': {source}")]
    FilesystemOp {
        operation: BatchOperation,
        path: PathBuf,
        source: std::io::Error,
    },

    // Startup and configuration errors
    #[error("Could not determine the home directory")]
    HomeDirectoryNotFound,

    #[error("Could not find config directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write config file '{path}': {source}")]
    ConfigWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using FileNavigatorError
pub type Result<T> = std::result::Result<T, FileNavigatorError>;

impl FileNavigatorError {
    /// Create a directory access error
    pub fn access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Access {
            path: path.into(),
            source,
        }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create a negative index error
    pub fn negative_index(index: i64) -> Self {
        Self::NegativeIndex { index }
    }

    /// Create an invalid number error
    pub fn invalid_number(number: impl Into<String>) -> Self {
        Self::InvalidNumber {
            number: number.into(),
        }
    }

    /// Create a failed filesystem operation error
    pub fn filesystem_op(
        operation: BatchOperation,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FilesystemOp {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config write failed error
    pub fn config_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// True for errors caused by malformed index input
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::InvalidNumber { .. })
    }

    /// True for navigation index errors
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfRange { .. } | Self::NegativeIndex { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_access_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no such directory");
        let err = FileNavigatorError::access("/missing", io_err);
        assert_eq!(
            err.to_string(),
            "Cannot read directory '/missing': no such directory"
        );
    }

    #[test]
    fn test_index_out_of_range_error() {
        let err = FileNavigatorError::index_out_of_range(5, 3);
        assert_eq!(
            err.to_string(),
            "Index 5 is out of range (3 entries available)"
        );
        assert!(err.is_index_error());
        assert!(!err.is_parse_error());
    }

    #[test]
    fn test_negative_index_error() {
        let err = FileNavigatorError::negative_index(-2);
        assert!(err.to_string().contains("-2"));
        assert!(err.is_index_error());
    }

    #[test]
    fn test_invalid_number_error() {
        let err = FileNavigatorError::invalid_number("abc");
        assert!(err.to_string().starts_with("Invalid number: 'abc'"));
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_filesystem_op_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        let err = FileNavigatorError::filesystem_op(BatchOperation::Move, "/tmp/a.txt", io_err);
        assert_eq!(
            err.to_string(),
            "Failed to move '/tmp/a.txt': permission denied"
        );
    }

    #[test]
    fn test_config_parse_failed() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ invalid json").unwrap_err();
        let err = FileNavigatorError::config_parse_failed("/test/config.json", json_err);
        assert!(err.to_string().contains("/test/config.json"));
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_config_write_failed() {
        let io_err = io::Error::new(io::ErrorKind::OutOfMemory, "no space left");
        let err = FileNavigatorError::config_write_failed("/test/config.json", io_err);
        assert!(err.to_string().contains("/test/config.json"));
        assert!(err.to_string().contains("no space left"));
    }
}

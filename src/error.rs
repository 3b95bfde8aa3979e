//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by address book and session operations.
///
/// Every variant is turned into a user-facing message by the command
/// dispatcher; none of them ends the process.
#[derive(Error, Debug)]
pub enum BookError {
    /// A name, phone or birthday failed validation
    #[error(transparent)]
    InvalidValue(#[from] ValidationError),

    /// A contact or phone number was not present
    #[error("{0}")]
    NotFound(String),

    /// Command arguments were malformed
    #[error("{0}")]
    Usage(String),

    /// Saving or loading the data file failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Errors that can occur while reading or writing the data file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem access failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File contents were not a valid address book document
    #[error("Failed to decode address book: {0}")]
    Decode(#[from] serde_json::Error),

    /// Records could not be encoded
    #[error("Failed to encode address book: {0}")]
    Encode(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

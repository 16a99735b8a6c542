//! Error types for Gauss-Jordan elimination
//!
//! Provides a unified error type for all gauss-jordan crates.

use thiserror::Error;

/// Core error type for matrix construction, persistence and elimination
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Threading or worker pool error
    #[error("Execution error: {0}")]
    Execution(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a matrix with no equations
    pub fn zero_size() -> Self {
        Self::InvalidParameter("Size must be > 0".to_string())
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for a binary matrix header that cannot describe an augmented matrix
    pub fn malformed_header(size: i32, columns: i32) -> Self {
        Self::InvalidInput(format!(
            "Malformed matrix header: size {size}, columns {columns}"
        ))
    }
}

//! Error types for the jones-monitor crates
//!
//! Provides a unified error type shared by all jones-* crates. The numeric
//! pipeline itself is total and never returns errors; this type surfaces at
//! the caller-facing seams (file ingestion, parameter validation,
//! visualization hooks).

use thiserror::Error;

/// Core error type for Jones-matrix analysis operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

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
    /// Create an error for a parameter outside its documented range
    pub fn parameter_out_of_range(name: &str, detail: &str) -> Self {
        Self::InvalidParameter(format!("{name} {detail}"))
    }
}

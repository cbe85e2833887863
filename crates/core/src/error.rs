use thiserror::Error;

/// Result type for atom evaluation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for atom evaluation operations
#[derive(Error, Debug)]
pub enum Error {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration related errors, including a comparator built without a baseline
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed atoms, arity mismatches and out-of-range truth values
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Operation the called comparator variant does not support
    #[error("Not implemented: {0}")]
    NotImplemented(String),
}

impl Error {
    /// Creates a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Creates a not-implemented error
    pub fn not_implemented(msg: impl Into<String>) -> Self {
        Self::NotImplemented(msg.into())
    }
}

//! Error types for the inferd library

use thiserror::Error;

/// Result type alias for inferd operations
pub type Result<T> = std::result::Result<T, InferdError>;

/// Main error type for the inferd library
#[derive(Error, Debug)]
pub enum InferdError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid shape: expected {expected}, got {actual}")]
    Shape { expected: String, actual: String },

    #[error("Invalid artifact: {0}")]
    InvalidArtifact(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for InferdError {
    fn from(err: serde_json::Error) -> Self {
        InferdError::Serialization(err.to_string())
    }
}

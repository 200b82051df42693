//! Error types for model generation and serialization

use thiserror::Error;

/// Main error type for model operations
#[derive(Error, Debug)]
pub enum ModelError {
    /// A builder input violates a documented constraint.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A model was assembled from inconsistent or missing sub-aggregates.
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    /// A serialized document has a dangling reference or missing field.
    #[error("Corrupt model document: {0}")]
    CorruptModel(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for model operations
pub type ModelResult<T> = Result<T, ModelError>;

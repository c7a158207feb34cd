//! Error types for the generation domain

use thiserror::Error;

/// Errors that can occur while applying the house style
#[derive(Error, Debug)]
pub enum GenerationError {
    /// Every emitted operation must name its client-facing action
    #[error("Missing x-client-action value for operation {operation_id}")]
    MissingClientAction { operation_id: String },

    #[error("Invalid data type: {0}")]
    InvalidDataType(String),

    #[error("Invalid language: {0}")]
    InvalidLanguage(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

//! Error handling for the house-style post-processor.
//!
//! This module defines the main error type `Error` used at the crate boundary,
//! along with a convenient `Result` type alias. Transformation failures are
//! reported as [`GenerationError`] and wrapped here.
//!
//! # Examples
//!
//! ```
//! use housestyle::core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::config("missing package_name"))
//! }
//!
//! assert!(might_fail().is_err());
//! ```

use thiserror::Error;

use crate::generation::GenerationError;

/// Result type for house-style operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for house-style operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Template engine error
    #[error("Template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// Transformation error
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// The changelog could not be read or has no usable version
    #[error("Changelog error: {0}")]
    Changelog(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new changelog error
    pub fn changelog<S: Into<String>>(msg: S) -> Self {
        Self::Changelog(msg.into())
    }
}

//! Crate-wide error type and generator configuration.

pub mod config;
pub mod error;

pub use config::GeneratorConfig;
pub use error::{Error, Result};

//! File-based API description loader
//!
//! This loader handles only file I/O and syntax; the framework owns extraction.

use serde_json::Value as JsonValue;
use std::path::Path;

use crate::core::{Error, Result};
use crate::infrastructure::openapi::ApiDocument;

/// Load an OpenAPI document from a JSON or YAML file
pub fn load_document(path: &Path) -> Result<ApiDocument> {
    let content = std::fs::read_to_string(path)?;

    let json: JsonValue = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content)?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
        _ => serde_json::from_str(&content)
            .or_else(|_| serde_yaml::from_str(&content))
            .map_err(|e| {
                Error::config(format!(
                    "Failed to parse API description {}: {e}",
                    path.display()
                ))
            })?,
    };

    let document = ApiDocument::new(json);
    tracing::debug!(
        path = %path.display(),
        version = document.version().unwrap_or("unknown"),
        "Loaded API description"
    );
    Ok(document)
}

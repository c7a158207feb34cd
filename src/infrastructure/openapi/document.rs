//! The raw API description as parsed JSON

use serde_json::Value as JsonValue;

/// Parsed OpenAPI document, before the framework extracts operations and models
#[derive(Debug, Clone, PartialEq)]
pub struct ApiDocument {
    json: JsonValue,
}

impl ApiDocument {
    pub fn new(json: JsonValue) -> Self {
        Self { json }
    }

    pub fn as_json(&self) -> &JsonValue {
        &self.json
    }

    pub fn as_json_mut(&mut self) -> &mut JsonValue {
        &mut self.json
    }

    /// Resolve a local reference such as `#/components/schemas/Video`
    pub fn resolve_ref(&self, reference: &str) -> Option<&JsonValue> {
        self.json.pointer(reference.strip_prefix('#')?)
    }

    /// OpenAPI version string, if declared
    pub fn version(&self) -> Option<&str> {
        self.json
            .get("openapi")
            .or_else(|| self.json.get("swagger"))
            .and_then(JsonValue::as_str)
    }
}

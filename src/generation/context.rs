//! Generation context - package-level values handed to templates

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::generation::TargetLanguage;

pub const ARTIFACT_VERSION: &str = "artifactVersion";
pub const PACKAGE_GUID: &str = "packageGuid";

/// Values shared by every template of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationContext {
    pub target: TargetLanguage,
    pub package_name: String,
    /// Free-form properties exposed to templates
    pub additional_properties: BTreeMap<String, JsonValue>,
}

impl GenerationContext {
    pub fn new(target: TargetLanguage, package_name: impl Into<String>) -> Self {
        Self {
            target,
            package_name: package_name.into(),
            additional_properties: BTreeMap::new(),
        }
    }

    /// Add a property to the context
    pub fn add_property(&mut self, key: &str, value: JsonValue) {
        self.additional_properties.insert(key.to_string(), value);
    }

    pub fn property(&self, key: &str) -> Option<&JsonValue> {
        self.additional_properties.get(key)
    }

    /// Record the package version and the GUID derived from it
    pub fn set_artifact_version(&mut self, version: &str) {
        self.add_property(ARTIFACT_VERSION, JsonValue::String(version.to_string()));
        self.add_property(PACKAGE_GUID, JsonValue::String(package_guid(version)));
    }

    pub fn artifact_version(&self) -> Option<&str> {
        self.property(ARTIFACT_VERSION).and_then(JsonValue::as_str)
    }
}

/// Project GUID derived from the package version, e.g. `{6F1C...}`
pub fn package_guid(version: &str) -> String {
    let uuid = Uuid::new_v5(&Uuid::NAMESPACE_OID, version.as_bytes());
    format!("{{{}}}", uuid.to_string().to_uppercase())
}

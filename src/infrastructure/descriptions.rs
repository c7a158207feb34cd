//! Shared description and sample table
//!
//! ```yaml
//! default:
//!   GET_videos: List all videos.
//! csharp:
//!   GET_videos.sample: |
//!     var videos = client.Videos().List();
//! ```
//!
//! Lookups try the target language first, then `default`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::core::Result;
use crate::generation::TargetLanguage;

const DEFAULT_LANGUAGE: &str = "default";

/// Canonical texts keyed by language, then by description key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DescriptionTable {
    entries: BTreeMap<String, BTreeMap<String, String>>,
}

impl DescriptionTable {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let table = Self::parse(&std::fs::read_to_string(path)?)?;
        tracing::debug!(
            path = %path.display(),
            languages = table.entries.len(),
            "Loaded description table"
        );
        Ok(table)
    }

    /// Add or replace one entry
    pub fn insert(&mut self, language: &str, key: impl Into<String>, text: impl Into<String>) {
        self.entries
            .entry(language.to_string())
            .or_default()
            .insert(key.into(), text.into());
    }

    /// Text for `key` in `target`, falling back to the default language
    pub fn lookup(&self, target: TargetLanguage, key: &str) -> Option<&str> {
        [target.as_str(), DEFAULT_LANGUAGE]
            .iter()
            .find_map(|language| self.entries.get(*language)?.get(key))
            .map(String::as_str)
    }

    pub fn operation_key(operation_id: &str) -> String {
        operation_id.to_string()
    }

    pub fn summary_key(operation_id: &str) -> String {
        format!("{operation_id}.summary")
    }

    pub fn sample_key(operation_id: &str) -> String {
        format!("{operation_id}.sample")
    }

    pub fn parameter_key(operation_id: &str, base_name: &str) -> String {
        format!("{operation_id}.{base_name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"
default:
  GET_videos: List all videos.
  GET_videos.title: Filter by title.
csharp:
  GET_videos: Lists videos from the C# client.
  GET_videos.sample: var videos = client.Videos().List();
"#;

    #[test]
    fn test_lookup_prefers_target_language() {
        let table = DescriptionTable::parse(TABLE).unwrap();
        assert_eq!(
            table.lookup(TargetLanguage::CSharp, "GET_videos"),
            Some("Lists videos from the C# client.")
        );
        assert_eq!(
            table.lookup(TargetLanguage::Java, "GET_videos"),
            Some("List all videos.")
        );
    }

    #[test]
    fn test_lookup_falls_back_to_default() {
        let table = DescriptionTable::parse(TABLE).unwrap();
        assert_eq!(
            table.lookup(TargetLanguage::CSharp, "GET_videos.title"),
            Some("Filter by title.")
        );
        assert_eq!(table.lookup(TargetLanguage::Java, "GET_videos.sample"), None);
    }

    #[test]
    fn test_keys() {
        assert_eq!(DescriptionTable::summary_key("GET_videos"), "GET_videos.summary");
        assert_eq!(
            DescriptionTable::parameter_key("GET_videos", "title"),
            "GET_videos.title"
        );
    }

    #[test]
    fn test_insert() {
        let mut table = DescriptionTable::default();
        table.insert("java", "op", "Java text");
        assert_eq!(table.lookup(TargetLanguage::Java, "op"), Some("Java text"));
    }
}

//! House-wide normalization of the raw API description
//!
//! Runs before the framework extracts operations and models, and is the same
//! for every target language:
//! - `description`/`summary` text gets LF line endings and no trailing blanks
//! - a schema `examples` list without `example` promotes its first entry
//! - `x-client-hidden` on a path item is copied onto its operations
//! - `allOf` wrappers around a single schema are replaced by that schema
//!
//! Example payloads (`example`/`examples` values) are data and left untouched.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::infrastructure::openapi::ApiDocument;

const HTTP_METHODS: &[&str] = &["get", "put", "post", "delete", "options", "head", "patch", "trace"];
const HIDDEN_EXTENSION: &str = "x-client-hidden";
const EXAMPLE_KEYS: &[&str] = &["example", "examples"];

static TRAILING_BLANKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+(\n|$)").expect("valid regex"));

/// Counts of the rewrites applied by [`normalize`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeReport {
    pub texts: usize,
    pub examples: usize,
    pub hidden: usize,
    pub collapsed: usize,
}

/// Apply the house normalization rules in place
pub fn normalize(document: &mut ApiDocument) -> NormalizeReport {
    let mut report = NormalizeReport::default();

    propagate_hidden(document.as_json_mut(), &mut report);
    normalize_value(document.as_json_mut(), None, &mut report);

    tracing::debug!(
        texts = report.texts,
        examples = report.examples,
        hidden = report.hidden,
        collapsed = report.collapsed,
        "Normalized API description"
    );
    report
}

fn propagate_hidden(json: &mut JsonValue, report: &mut NormalizeReport) {
    let Some(paths) = json.get_mut("paths").and_then(JsonValue::as_object_mut) else {
        return;
    };

    for (path, item) in paths.iter_mut() {
        let Some(item) = item.as_object_mut() else {
            continue;
        };
        if item.get(HIDDEN_EXTENSION) != Some(&JsonValue::Bool(true)) {
            continue;
        }
        for method in HTTP_METHODS {
            if let Some(operation) = item.get_mut(*method).and_then(JsonValue::as_object_mut) {
                if !operation.contains_key(HIDDEN_EXTENSION) {
                    operation.insert(HIDDEN_EXTENSION.to_string(), JsonValue::Bool(true));
                    report.hidden += 1;
                    tracing::trace!(path = %path, method = %method, "Hidden by path item");
                }
            }
        }
    }
}

/// `key` is the member name `value` sits under, if any
fn normalize_value(value: &mut JsonValue, key: Option<&str>, report: &mut NormalizeReport) {
    match value {
        JsonValue::Object(map) => {
            if let Some(member) = single_all_of(map) {
                *value = member;
                report.collapsed += 1;
                normalize_value(value, key, report);
                return;
            }
            normalize_object(map, report);

            // Under `properties` the keys are field names, not example payloads
            let in_properties = key == Some("properties");
            for (child_key, child) in map.iter_mut() {
                if !in_properties && EXAMPLE_KEYS.contains(&child_key.as_str()) {
                    continue;
                }
                normalize_value(child, Some(child_key.as_str()), report);
            }
        }
        JsonValue::Array(items) => {
            for item in items {
                normalize_value(item, None, report);
            }
        }
        _ => {}
    }
}

fn single_all_of(map: &JsonMap<String, JsonValue>) -> Option<JsonValue> {
    if map.len() != 1 {
        return None;
    }
    match map.get("allOf")?.as_array()?.as_slice() {
        [member] => Some(member.clone()),
        _ => None,
    }
}

fn normalize_object(map: &mut JsonMap<String, JsonValue>, report: &mut NormalizeReport) {
    for key in ["description", "summary"] {
        if let Some(JsonValue::String(text)) = map.get_mut(key) {
            let normalized = normalize_text(text);
            if normalized != *text {
                *text = normalized;
                report.texts += 1;
            }
        }
    }

    if !map.contains_key("example") {
        let first = map
            .get("examples")
            .and_then(JsonValue::as_array)
            .and_then(|examples| examples.first())
            .cloned();
        if let Some(first) = first {
            map.insert("example".to_string(), first);
            report.examples += 1;
        }
    }
}

fn normalize_text(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    TRAILING_BLANKS
        .replace_all(&unified, "$1")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  Line one  \r\nLine two\t\n"), "Line one\nLine two");
        assert_eq!(normalize_text("clean"), "clean");
    }

    #[test]
    fn test_promotes_first_schema_example() {
        let mut document = ApiDocument::new(json!({
            "components": { "schemas": { "Tag": { "type": "string", "examples": ["maths", "science"] } } }
        }));
        let report = normalize(&mut document);

        assert_eq!(report.examples, 1);
        assert_eq!(
            document.as_json()["components"]["schemas"]["Tag"]["example"],
            json!("maths")
        );
    }

    #[test]
    fn test_keeps_media_type_example_maps() {
        let mut document = ApiDocument::new(json!({
            "content": { "application/json": { "examples": { "response": { "value": {} } } } }
        }));
        normalize(&mut document);
        assert!(document.as_json()["content"]["application/json"].get("example").is_none());
    }

    #[test]
    fn test_propagates_path_level_hidden_flag() {
        let mut document = ApiDocument::new(json!({
            "paths": {
                "/videos/{id}/source": {
                    "x-client-hidden": true,
                    "post": { "operationId": "upload" },
                    "get": { "operationId": "getSource", "x-client-hidden": false }
                },
                "/videos": { "get": { "operationId": "list" } }
            }
        }));
        let report = normalize(&mut document);

        let paths = &document.as_json()["paths"];
        assert_eq!(report.hidden, 1);
        assert_eq!(paths["/videos/{id}/source"]["post"]["x-client-hidden"], json!(true));
        assert_eq!(paths["/videos/{id}/source"]["get"]["x-client-hidden"], json!(false));
        assert!(paths["/videos"]["get"].get("x-client-hidden").is_none());
    }

    #[test]
    fn test_collapses_single_all_of() {
        let mut document = ApiDocument::new(json!({
            "schema": { "allOf": [ { "$ref": "#/components/schemas/Video" } ] },
            "nullable": { "allOf": [ { "$ref": "#/components/schemas/Video" } ], "nullable": true },
            "many": { "allOf": [ { "type": "object" }, { "type": "object" } ] }
        }));
        let report = normalize(&mut document);

        let json = document.as_json();
        assert_eq!(report.collapsed, 1);
        assert_eq!(json["schema"], json!({ "$ref": "#/components/schemas/Video" }));
        assert!(json["nullable"].get("allOf").is_some());
        assert!(json["many"].get("allOf").is_some());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut document = ApiDocument::new(json!({
            "info": { "description": "Video API \r\n" },
            "paths": { "/a": { "x-client-hidden": true, "get": {} } }
        }));
        normalize(&mut document);
        let once = document.clone();
        let report = normalize(&mut document);

        assert_eq!(document, once);
        assert_eq!(report, NormalizeReport::default());
    }

    #[test]
    fn test_example_payloads_are_left_verbatim() {
        let payload = json!({
            "description": "  Keep me  \r\n",
            "summary": "As is\r\n",
            "examples": ["first", "second"],
            "nested": { "allOf": [ { "title": "x" } ] }
        });
        let mut document = ApiDocument::new(json!({
            "components": { "schemas": { "Video": {
                "type": "object",
                "example": payload.clone(),
                "examples": [payload.clone()]
            } } },
            "content": { "application/json": { "examples": { "response": {
                "summary": "Raw \r\n",
                "value": payload.clone()
            } } } }
        }));
        normalize(&mut document);

        let json = document.as_json();
        let video = &json["components"]["schemas"]["Video"];
        assert_eq!(video["example"], payload);
        assert_eq!(video["examples"][0], payload);
        assert!(video["example"].get("example").is_none());
        assert_eq!(
            json["content"]["application/json"]["examples"]["response"]["value"],
            payload
        );
    }

    #[test]
    fn test_property_named_example_is_still_a_schema() {
        let mut document = ApiDocument::new(json!({
            "components": { "schemas": { "Snippet": {
                "type": "object",
                "properties": {
                    "example": { "type": "string", "description": "Sample text \r\n", "examples": ["a"] }
                }
            } } }
        }));
        normalize(&mut document);

        let property = &document.as_json()["components"]["schemas"]["Snippet"]["properties"]["example"];
        assert_eq!(property["description"], json!("Sample text"));
        assert_eq!(property["example"], json!("a"));
    }
}

//! Response fixtures used by the generated client's own test suite
//!
//! Each operation gets a folder
//! `tests/resources/payloads/<group>/<action>/responses/` holding one
//! `<status>.json` file per response that has an example or a schema.

use serde_json::{Map as JsonMap, Value as JsonValue, json};
use std::path::PathBuf;

use crate::generation::{Artifact, GenerationError, Operation, Response, rules};
use crate::infrastructure::openapi::ApiDocument;

/// `$ref` chains deeper than this synthesize `null`
const MAX_SCHEMA_DEPTH: usize = 8;

/// Fixture folder of an operation, relative to the output root
pub fn fixture_folder(operation: &Operation, action: &str) -> String {
    format!(
        "{}/{}/{}/responses",
        rules::FIXTURES_ROOT,
        operation.base_name.to_lowercase(),
        action
    )
}

/// Representative payload for a response, if one can be produced
pub fn response_payload(response: &Response, document: &ApiDocument) -> Option<JsonValue> {
    if let Some(example) = &response.example {
        return Some(example.clone());
    }
    response
        .schema
        .as_ref()
        .map(|schema| sample_from_schema(schema, document, 0))
}

/// Build the fixture artifacts of an operation and record their paths on its responses
pub fn populate(
    operation: &mut Operation,
    folder: &str,
    document: &ApiDocument,
) -> Result<Vec<Artifact>, GenerationError> {
    let mut artifacts = Vec::new();

    for response in &mut operation.responses {
        let Some(payload) = response_payload(response, document) else {
            tracing::debug!(
                operation = %operation.operation_id,
                code = %response.code,
                "Response has no example or schema, skipping fixture"
            );
            continue;
        };

        let file = format!("{folder}/{}.json", response.code);
        let mut content = serde_json::to_string_pretty(&payload)?;
        content.push('\n');

        response.vendor_extensions.fixture_file = Some(file.clone());
        artifacts.push(Artifact {
            path: PathBuf::from(file),
            content,
        });
    }

    Ok(artifacts)
}

fn sample_from_schema(schema: &JsonValue, document: &ApiDocument, depth: usize) -> JsonValue {
    if depth > MAX_SCHEMA_DEPTH {
        return JsonValue::Null;
    }
    if let Some(example) = schema.get("example") {
        return example.clone();
    }
    if let Some(reference) = schema.get("$ref").and_then(JsonValue::as_str) {
        return match document.resolve_ref(reference) {
            Some(target) => sample_from_schema(target, document, depth + 1),
            None => {
                tracing::warn!(reference = %reference, "Unresolvable schema reference in response");
                JsonValue::Null
            }
        };
    }
    if let Some(parts) = schema.get("allOf").and_then(JsonValue::as_array) {
        let mut merged = JsonMap::new();
        for part in parts {
            if let JsonValue::Object(fields) = sample_from_schema(part, document, depth + 1) {
                merged.extend(fields);
            }
        }
        return JsonValue::Object(merged);
    }
    for key in ["oneOf", "anyOf"] {
        if let Some(first) = schema
            .get(key)
            .and_then(JsonValue::as_array)
            .and_then(|variants| variants.first())
        {
            return sample_from_schema(first, document, depth + 1);
        }
    }
    if let Some(first) = schema
        .get("enum")
        .and_then(JsonValue::as_array)
        .and_then(|values| values.first())
    {
        return first.clone();
    }

    let schema_type = schema.get("type").and_then(JsonValue::as_str);
    match schema_type {
        Some("array") => {
            let item = schema
                .get("items")
                .map(|items| sample_from_schema(items, document, depth + 1))
                .unwrap_or(JsonValue::Null);
            json!([item])
        }
        Some("string") => match schema.get("format").and_then(JsonValue::as_str) {
            Some("date-time") => json!("2024-01-01T00:00:00Z"),
            Some("date") => json!("2024-01-01"),
            Some("uri") | Some("url") => json!("https://example.com"),
            _ => json!("string"),
        },
        Some("integer") => json!(0),
        Some("number") => json!(0.0),
        Some("boolean") => json!(true),
        _ => match schema.get("properties").and_then(JsonValue::as_object) {
            Some(properties) => JsonValue::Object(
                properties
                    .iter()
                    .map(|(name, property)| {
                        (name.clone(), sample_from_schema(property, document, depth + 1))
                    })
                    .collect(),
            ),
            None if schema_type == Some("object") => json!({}),
            None => JsonValue::Null,
        },
    }
}

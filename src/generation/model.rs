//! Typed view of the operations and models handed over by the host framework
//!
//! Field names follow the framework's camelCase record layout so the same
//! records can be deserialized from, and serialized back to, the template
//! context. Vendor extensions are explicit structs serialized under their
//! `x-` names.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::generation::GenerationError;

/// Kind of a parameter or field type, as far as the house style cares
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum DataType {
    #[default]
    String,
    Integer,
    Boolean,
    File,
    Uri,
    /// `List<String>`
    StringList,
    /// Any other list; carries the element kind
    Array(Box<DataType>),
    DateTime,
    /// Named model, map, or any other type the house style leaves alone
    Object(String),
}

const LIST_CONTAINERS: &[&str] = &["List<", "IList<", "ICollection<", "Array<", "Set<"];

/// Element signature of a list signature, e.g. `Video` for `List<Video>`
fn list_item(signature: &str) -> Option<&str> {
    let signature = signature.trim();
    let signature = signature.strip_suffix('?').unwrap_or(signature);
    LIST_CONTAINERS.iter().find_map(|container| {
        signature
            .strip_prefix(container)
            .and_then(|rest| rest.strip_suffix('>'))
            .map(str::trim)
            .filter(|inner| is_well_formed(inner))
    })
}

/// Identifier characters plus balanced generic brackets
fn is_well_formed(signature: &str) -> bool {
    let mut chars = signature.chars();
    if !matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_') {
        return false;
    }

    let mut depth = 0usize;
    for c in signature.chars() {
        match c {
            '<' => depth += 1,
            '>' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            c if c.is_alphanumeric() || matches!(c, '_' | '.' | ',' | ' ' | '?' | '[' | ']') => {}
            _ => return false,
        }
    }
    depth == 0
}

impl DataType {
    /// Classify a framework type signature such as `List<Video>` or `int?`
    ///
    /// Only empty or malformed signatures are rejected; anything unknown is
    /// a [`DataType::Object`].
    pub fn parse(signature: &str) -> Result<Self, GenerationError> {
        let signature = signature.trim();
        if !is_well_formed(signature) {
            return Err(GenerationError::InvalidDataType(signature.to_string()));
        }

        if let Some(inner) = list_item(signature) {
            return Ok(match DataType::parse(inner)? {
                DataType::String => DataType::StringList,
                items => DataType::Array(Box::new(items)),
            });
        }

        let data_type = match signature.strip_suffix('?').unwrap_or(signature) {
            "String" | "string" => DataType::String,
            "Integer" | "integer" | "int" | "Long" | "long" => DataType::Integer,
            "Boolean" | "boolean" | "bool" => DataType::Boolean,
            "File" | "Stream" | "System.IO.Stream" => DataType::File,
            "URI" | "Uri" => DataType::Uri,
            "OffsetDateTime" | "DateTime" | "date-time" => DataType::DateTime,
            _ => DataType::Object(signature.to_string()),
        };
        Ok(data_type)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::String => f.write_str("String"),
            DataType::Integer => f.write_str("Integer"),
            DataType::Boolean => f.write_str("Boolean"),
            DataType::File => f.write_str("File"),
            DataType::Uri => f.write_str("URI"),
            DataType::StringList => f.write_str("List<String>"),
            DataType::Array(items) => write!(f, "List<{items}>"),
            DataType::DateTime => f.write_str("OffsetDateTime"),
            DataType::Object(name) => f.write_str(name),
        }
    }
}

/// Type signature as the framework spelled it, with its parsed kind
///
/// Serializes back to the framework's text unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeSignature {
    raw: String,
    kind: DataType,
}

impl TypeSignature {
    pub fn parse(signature: &str) -> Result<Self, GenerationError> {
        Ok(Self {
            kind: DataType::parse(signature)?,
            raw: signature.trim().to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> &DataType {
        &self.kind
    }

    /// Element signature of a list, as spelled by the framework
    pub fn item_signature(&self) -> Option<&str> {
        list_item(&self.raw)
    }
}

impl From<DataType> for TypeSignature {
    fn from(kind: DataType) -> Self {
        Self {
            raw: kind.to_string(),
            kind,
        }
    }
}

impl fmt::Display for TypeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl TryFrom<String> for TypeSignature {
    type Error = GenerationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TypeSignature::parse(&value)
    }
}

impl From<TypeSignature> for String {
    fn from(value: TypeSignature) -> Self {
        value.raw
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Directives and derived values attached to a parameter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterExtensions {
    #[serde(rename = "x-client-ignore", skip_serializing_if = "is_false")]
    pub client_ignore: bool,
    #[serde(rename = "x-client-copy-from-response", skip_serializing_if = "is_false")]
    pub copy_from_response: bool,
    /// Accessor reading the value back from a response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub getter: Option<String>,
    /// Expression constructing a value in generated tests
    #[serde(rename = "testConstructor", skip_serializing_if = "Option::is_none")]
    pub test_constructor: Option<String>,
}

/// Directives and derived values attached to a nested field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyExtensions {
    #[serde(rename = "x-client-doc-hidden", skip_serializing_if = "is_false")]
    pub doc_hidden: bool,
    /// Target-language literal built from the field's example
    #[serde(rename = "x-example-literal", skip_serializing_if = "Option::is_none")]
    pub example_literal: Option<String>,
}

/// Field of a model, or nested field of an object-shaped parameter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub name: String,
    pub base_name: String,
    pub data_type: TypeSignature,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub getter: Option<String>,
    #[serde(default)]
    pub vendor_extensions: PropertyExtensions,
}

/// Operation parameter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub param_name: String,
    pub base_name: String,
    pub data_type: TypeSignature,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub example: Option<String>,
    /// Fields of an object-shaped parameter
    #[serde(default)]
    pub vars: Vec<Property>,
    #[serde(default)]
    pub vendor_extensions: ParameterExtensions,
}

/// Where the items of a paginated response live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationDescriptor {
    /// Element type of the page's data list
    #[serde(rename = "type")]
    pub item_type: String,
    /// Accessor of the data list on the page model
    pub getter: String,
}

/// Directives and derived values attached to an operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationExtensions {
    #[serde(rename = "x-client-action", skip_serializing_if = "Option::is_none")]
    pub client_action: Option<String>,
    #[serde(rename = "x-client-hidden", skip_serializing_if = "is_false")]
    pub client_hidden: bool,
    #[serde(rename = "x-client-paginated", skip_serializing_if = "is_false")]
    pub client_paginated: bool,
    #[serde(rename = "x-client-copy-from-response", skip_serializing_if = "Vec::is_empty")]
    pub copy_from_response: Vec<Parameter>,
    #[serde(rename = "x-pagination", skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationDescriptor>,
    #[serde(rename = "x-client-sample", skip_serializing_if = "Option::is_none")]
    pub client_sample: Option<String>,
    /// Fixture folder relative to the output root
    #[serde(rename = "x-fixture-folder", skip_serializing_if = "Option::is_none")]
    pub fixture_folder: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseExtensions {
    #[serde(rename = "x-fixture-file", skip_serializing_if = "Option::is_none")]
    pub fixture_file: Option<String>,
}

/// Declared response of an operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// Status code, e.g. `200` or `default`
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data_type: Option<String>,
    #[serde(default)]
    pub example: Option<serde_json::Value>,
    /// Raw response schema, possibly a `$ref`
    #[serde(default)]
    pub schema: Option<serde_json::Value>,
    #[serde(default)]
    pub vendor_extensions: ResponseExtensions,
}

/// One callable endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub operation_id: String,
    /// Display name used by templates
    #[serde(default)]
    pub nickname: String,
    /// Grouping name (the API class the operation belongs to)
    pub base_name: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub http_method: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub header_params: Vec<Parameter>,
    #[serde(default)]
    pub body_params: Vec<Parameter>,
    #[serde(default)]
    pub path_params: Vec<Parameter>,
    #[serde(default)]
    pub query_params: Vec<Parameter>,
    #[serde(default)]
    pub form_params: Vec<Parameter>,
    #[serde(default)]
    pub cookie_params: Vec<Parameter>,
    #[serde(default)]
    pub all_params: Vec<Parameter>,
    #[serde(default)]
    pub return_type: Option<String>,
    #[serde(default)]
    pub responses: Vec<Response>,
    #[serde(default)]
    pub vendor_extensions: OperationExtensions,
}

impl Operation {
    /// Every parameter group, the aggregate list last
    pub fn param_groups(&self) -> [&Vec<Parameter>; 7] {
        [
            &self.header_params,
            &self.body_params,
            &self.path_params,
            &self.query_params,
            &self.form_params,
            &self.cookie_params,
            &self.all_params,
        ]
    }

    pub fn param_groups_mut(&mut self) -> [&mut Vec<Parameter>; 7] {
        [
            &mut self.header_params,
            &mut self.body_params,
            &mut self.path_params,
            &mut self.query_params,
            &mut self.form_params,
            &mut self.cookie_params,
            &mut self.all_params,
        ]
    }

    /// Action name if present and not blank
    pub fn client_action(&self) -> Option<&str> {
        self.vendor_extensions
            .client_action
            .as_deref()
            .map(str::trim)
            .filter(|action| !action.is_empty())
    }
}

/// Operations of one API class
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationGroup {
    pub class_name: String,
    pub operations: Vec<Operation>,
    /// Set when every operation of the group is hidden
    #[serde(rename = "x-client-hidden", default)]
    pub all_hidden: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelExtensions {
    #[serde(rename = "x-has-defaults", skip_serializing_if = "is_false")]
    pub has_defaults: bool,
}

/// Generated data structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[serde(rename = "classname")]
    pub class_name: String,
    #[serde(default)]
    pub vars: Vec<Property>,
    /// Own and inherited fields
    #[serde(default)]
    pub all_vars: Vec<Property>,
    #[serde(default)]
    pub vendor_extensions: ModelExtensions,
}

/// Everything the framework extracted from one API description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedApi {
    pub groups: Vec<OperationGroup>,
    pub models: Vec<Model>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_data_types() {
        assert_eq!(DataType::parse("String").unwrap(), DataType::String);
        assert_eq!(DataType::parse("URI").unwrap(), DataType::Uri);
        assert_eq!(DataType::parse("List<String>").unwrap(), DataType::StringList);
        assert_eq!(DataType::parse("OffsetDateTime").unwrap(), DataType::DateTime);
        assert_eq!(
            DataType::parse("List<Video>").unwrap(),
            DataType::Array(Box::new(DataType::Object("Video".to_string())))
        );
        assert_eq!(
            DataType::parse("List<List<Integer>>").unwrap(),
            DataType::Array(Box::new(DataType::Array(Box::new(DataType::Integer))))
        );
    }

    #[test]
    fn test_parse_rejects_malformed_signature() {
        assert!(DataType::parse("List<Video").is_err());
        assert!(DataType::parse("Video>").is_err());
        assert!(DataType::parse("1Video").is_err());
        assert!(DataType::parse("Video;").is_err());
        assert!(DataType::parse("").is_err());
    }

    #[test]
    fn test_parse_accepts_other_framework_types() {
        assert_eq!(
            DataType::parse("Dictionary<string, string>").unwrap(),
            DataType::Object("Dictionary<string, string>".to_string())
        );
        assert_eq!(
            DataType::parse("Map<String, Video>").unwrap(),
            DataType::Object("Map<String, Video>".to_string())
        );
        assert_eq!(DataType::parse("int?").unwrap(), DataType::Integer);
        assert_eq!(DataType::parse("long").unwrap(), DataType::Integer);
        assert_eq!(DataType::parse("bool").unwrap(), DataType::Boolean);
        assert_eq!(DataType::parse("System.IO.Stream").unwrap(), DataType::File);
        assert_eq!(DataType::parse("List<string>").unwrap(), DataType::StringList);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for signature in ["String", "Integer", "URI", "File", "List<String>", "List<Tag>", "Video"] {
            let parsed = DataType::parse(signature).unwrap();
            assert_eq!(parsed.to_string(), signature);
        }
    }

    #[test]
    fn test_signature_serializes_framework_text_unchanged() {
        for signature in ["string", "int", "System.IO.Stream", "List<string>", "DateTime", "long", "int?"] {
            let parameter: Parameter = serde_json::from_value(json!({
                "paramName": "x",
                "baseName": "x",
                "dataType": signature
            }))
            .unwrap();

            let back = serde_json::to_value(&parameter).unwrap();
            assert_eq!(back["dataType"], json!(signature));
        }
    }

    #[test]
    fn test_item_signature() {
        let list = TypeSignature::parse("List<string>").unwrap();
        assert_eq!(list.kind(), &DataType::StringList);
        assert_eq!(list.item_signature(), Some("string"));
        assert_eq!(TypeSignature::parse("IList<Video>").unwrap().item_signature(), Some("Video"));
        assert_eq!(TypeSignature::parse("Video").unwrap().item_signature(), None);
    }

    #[test]
    fn test_operation_deserializes_vendor_extensions() {
        let operation: Operation = serde_json::from_value(json!({
            "operationId": "GET_videos",
            "baseName": "Videos",
            "returnType": "VideosListResponse",
            "allParams": [{
                "paramName": "title",
                "baseName": "title",
                "dataType": "String",
                "vendorExtensions": { "x-client-ignore": true }
            }],
            "vendorExtensions": {
                "x-client-action": "list",
                "x-client-paginated": true
            }
        }))
        .unwrap();

        assert_eq!(operation.client_action(), Some("list"));
        assert!(operation.vendor_extensions.client_paginated);
        assert!(operation.all_params[0].vendor_extensions.client_ignore);
        assert_eq!(operation.all_params[0].data_type.kind(), &DataType::String);
    }

    #[test]
    fn test_operation_rejects_malformed_data_type() {
        let result = serde_json::from_value::<Parameter>(json!({
            "paramName": "x",
            "baseName": "x",
            "dataType": "Map<String, Object"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_client_action_is_absent() {
        let mut operation = Operation::default();
        operation.vendor_extensions.client_action = Some("  ".to_string());
        assert_eq!(operation.client_action(), None);
    }

    #[test]
    fn test_extensions_serialize_under_vendor_names() {
        let mut group = OperationGroup {
            class_name: "VideosApi".to_string(),
            ..Default::default()
        };
        group.all_hidden = true;
        let value = serde_json::to_value(&group).unwrap();
        assert_eq!(value["x-client-hidden"], json!(true));
        assert_eq!(value["className"], json!("VideosApi"));
    }
}

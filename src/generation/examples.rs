//! Literal synthesis for generated documentation and tests

use crate::generation::{DataType, Parameter, Property, TargetLanguage};

/// Target-language literal for a nested field's example
///
/// Returns `None` when the type keeps its original example unchanged.
pub fn example_literal(property: &Property, target: TargetLanguage) -> Option<String> {
    let example = property.example.as_deref();
    match property.data_type.kind() {
        DataType::StringList => example.map(|text| target.string_list_literal(&list_elements(text))),
        DataType::Array(_) => property
            .data_type
            .item_signature()
            .map(|item| target.empty_list_literal(item)),
        DataType::String => example.map(|text| target.string_literal(text)),
        DataType::DateTime => example.map(|text| target.date_time_literal(text)),
        _ => None,
    }
}

/// Strip the brackets of a JSON-ish list and unescape its quotes
fn list_elements(example: &str) -> String {
    example
        .replace(['[', ']'], "")
        .replace("\\\"", "\"")
}

/// Expression constructing a parameter value in generated tests
pub fn test_constructor(parameter: &Parameter, target: TargetLanguage, placeholder_uri: &str) -> String {
    match parameter.data_type.kind() {
        DataType::Uri => target.uri_constructor(placeholder_uri),
        DataType::File => target.file_constructor(),
        DataType::String => parameter
            .example
            .clone()
            .unwrap_or_else(|| target.string_literal("")),
        DataType::Integer => target.integer_literal(),
        _ => target.default_constructor(parameter.data_type.as_str()),
    }
}

//! House rules shared by every target language

use std::cmp::Ordering;

use crate::generation::Operation;

/// Nested parameter fields that stay functional but are left out of client docs
pub const PARAMETERS_TO_HIDE_IN_CLIENT_DOC: &[&str] = &["currentPage", "pageSize"];

/// Generated field names replaced by their public spelling
pub const RESERVED_FIELD_RENAMES: &[(&str, &str)] = &[("_AccessToken", "AccessToken")];

/// Name of the page model field holding the page items
pub const PAGINATION_DATA_FIELD: &str = "Data";

/// Root of the response fixtures, relative to the output directory
pub const FIXTURES_ROOT: &str = "tests/resources/payloads";

/// Support-file templates replaced by hand-written code
pub const SKIPPED_SUPPORTING_FILES: &[&str] = &[
    "ExceptionFactory",
    "GlobalConfiguration",
    "IApiAccessor",
    "OpenAPIDateConverter",
    "IReadableConfiguration",
    "Configuration",
];

/// Per-model test template; model tests come from response fixtures instead
pub const MODEL_TEST_TEMPLATE: &str = "model_test";

/// Action verbs in the order generated clients list them
const ACTION_ORDER: &[&str] = &["create", "upload", "get", "update", "delete", "list"];

fn action_rank(action: &str) -> usize {
    ACTION_ORDER
        .iter()
        .position(|verb| {
            action
                .strip_prefix(verb)
                .is_some_and(|rest| rest.chars().next().is_none_or(|c| !c.is_lowercase()))
        })
        .unwrap_or(ACTION_ORDER.len())
}

fn sort_key(operation: &Operation) -> &str {
    operation
        .client_action()
        .unwrap_or(operation.operation_id.as_str())
}

/// Ordering of operations inside an API class
///
/// Operations are ranked by action verb, then by action name, then by path.
pub fn compare_operations(a: &Operation, b: &Operation) -> Ordering {
    let (ka, kb) = (sort_key(a), sort_key(b));
    action_rank(ka)
        .cmp(&action_rank(kb))
        .then_with(|| ka.cmp(kb))
        .then_with(|| a.path.cmp(&b.path))
}

/// Public spelling of a generated field name, if the name is reserved
pub fn public_field_name(name: &str) -> Option<&'static str> {
    RESERVED_FIELD_RENAMES
        .iter()
        .find(|(generated, _)| *generated == name)
        .map(|(_, public)| *public)
}

//! Pagination descriptors for operations returning a page model

use crate::generation::{Model, Operation, PaginationDescriptor, TargetLanguage, rules, utils};

/// Describe where the items of `operation`'s page live
///
/// Looks up the model named by the operation's return type and its `Data`
/// field. Returns `None` when either is missing.
pub fn describe(
    operation: &Operation,
    models: &[Model],
    target: TargetLanguage,
) -> Option<PaginationDescriptor> {
    let return_type = operation.return_type.as_deref()?;
    let model = models.iter().find(|m| m.class_name == return_type)?;
    let data = model
        .all_vars
        .iter()
        .chain(model.vars.iter())
        .find(|v| v.name == rules::PAGINATION_DATA_FIELD)?;
    let item_type = data.data_type.item_signature()?.to_string();

    Some(PaginationDescriptor {
        item_type,
        getter: data
            .getter
            .clone()
            .unwrap_or_else(|| utils::to_getter(&data.name, target)),
    })
}

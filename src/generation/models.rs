//! Model transformer

use crate::generation::{Model, rules};

/// Rename reserved field names and flag models carrying default values
///
/// Returns the number of renamed fields.
pub fn transform_models(models: &mut [Model]) -> usize {
    let mut renamed = 0;

    for model in models.iter_mut() {
        for field in model.vars.iter_mut().chain(model.all_vars.iter_mut()) {
            if let Some(public) = rules::public_field_name(&field.name) {
                tracing::debug!(
                    model = %model.class_name,
                    from = %field.name,
                    to = %public,
                    "Renamed reserved field"
                );
                field.name = public.to_string();
                renamed += 1;
            }
            if field.default_value.as_deref().is_some_and(|value| !value.is_empty()) {
                model.vendor_extensions.has_defaults = true;
            }
        }
    }

    renamed
}

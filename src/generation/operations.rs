//! Operation transformer - reshapes each API class into the house client layout

use crate::generation::{
    Artifact, GenerationError, Model, Operation, OperationGroup, Parameter, TargetLanguage,
    examples, fixtures, pagination, rules, utils,
};
use crate::infrastructure::{ApiDocument, DescriptionTable};

/// Applies the house conventions to the operations of one API class
pub struct OperationTransformer<'a> {
    target: TargetLanguage,
    descriptions: &'a DescriptionTable,
    placeholder_uri: &'a str,
}

impl<'a> OperationTransformer<'a> {
    pub fn new(
        target: TargetLanguage,
        descriptions: &'a DescriptionTable,
        placeholder_uri: &'a str,
    ) -> Self {
        Self {
            target,
            descriptions,
            placeholder_uri,
        }
    }

    /// Transform a group in place and return its response fixtures
    ///
    /// Fails without touching operation names when any operation of the
    /// group has no `x-client-action`.
    pub fn transform(
        &self,
        group: &mut OperationGroup,
        models: &[Model],
        document: &ApiDocument,
    ) -> Result<Vec<Artifact>, GenerationError> {
        for operation in &mut group.operations {
            self.apply_descriptions(operation);
        }

        group.operations.sort_by(rules::compare_operations);
        group.all_hidden = group
            .operations
            .iter()
            .all(|operation| operation.vendor_extensions.client_hidden);

        if let Some(unnamed) = group
            .operations
            .iter()
            .find(|operation| operation.client_action().is_none())
        {
            return Err(GenerationError::MissingClientAction {
                operation_id: unnamed.operation_id.clone(),
            });
        }

        let mut artifacts = Vec::new();
        for operation in &mut group.operations {
            artifacts.extend(self.transform_operation(operation, models, document)?);
        }

        tracing::debug!(
            group = %group.class_name,
            operations = group.operations.len(),
            hidden = group.all_hidden,
            fixtures = artifacts.len(),
            "Transformed operation group"
        );
        Ok(artifacts)
    }

    fn apply_descriptions(&self, operation: &mut Operation) {
        let id = operation.operation_id.clone();
        let lookup = |key: String| self.descriptions.lookup(self.target, &key).map(str::to_string);

        if let Some(notes) = lookup(DescriptionTable::operation_key(&id)) {
            operation.notes = Some(notes);
        }
        if let Some(summary) = lookup(DescriptionTable::summary_key(&id)) {
            operation.summary = Some(summary);
        }
        if let Some(sample) = lookup(DescriptionTable::sample_key(&id)) {
            operation.vendor_extensions.client_sample = Some(sample);
        }
        for_each_parameter(operation, |parameter| {
            if let Some(description) =
                lookup(DescriptionTable::parameter_key(&id, &parameter.base_name))
            {
                parameter.description = Some(description);
            }
        });
    }

    fn transform_operation(
        &self,
        operation: &mut Operation,
        models: &[Model],
        document: &ApiDocument,
    ) -> Result<Vec<Artifact>, GenerationError> {
        let action = operation
            .client_action()
            .ok_or_else(|| GenerationError::MissingClientAction {
                operation_id: operation.operation_id.clone(),
            })?
            .to_string();
        operation.operation_id = action.clone();
        operation.nickname = action.clone();

        let target = self.target;
        for_each_parameter(operation, |parameter| {
            if parameter.vendor_extensions.copy_from_response {
                parameter.vendor_extensions.getter =
                    Some(utils::to_getter(&parameter.param_name, target));
            }
        });

        for group in operation.param_groups_mut() {
            group.retain(|parameter| !parameter.vendor_extensions.client_ignore);
        }

        for_each_parameter(operation, |parameter| {
            for field in &mut parameter.vars {
                if rules::PARAMETERS_TO_HIDE_IN_CLIENT_DOC
                    .iter()
                    .any(|hidden| field.base_name == *hidden || field.name == *hidden)
                {
                    field.vendor_extensions.doc_hidden = true;
                }
                if let Some(literal) = examples::example_literal(field, target) {
                    field.vendor_extensions.example_literal = Some(literal);
                }
            }
        });

        if operation.vendor_extensions.client_paginated {
            operation.vendor_extensions.pagination =
                pagination::describe(operation, models, target);
            if operation.vendor_extensions.pagination.is_none() {
                tracing::warn!(
                    operation = %operation.operation_id,
                    return_type = ?operation.return_type,
                    "Paginated operation has no resolvable Data field, generating it as not paginated"
                );
            }
        }

        let placeholder_uri = self.placeholder_uri;
        for_each_parameter(operation, |parameter| {
            parameter.vendor_extensions.test_constructor =
                Some(examples::test_constructor(parameter, target, placeholder_uri));
        });

        // Snapshot once every per-parameter value is derived
        operation.vendor_extensions.copy_from_response = operation
            .all_params
            .iter()
            .filter(|parameter| parameter.vendor_extensions.copy_from_response)
            .cloned()
            .collect();

        let folder = fixtures::fixture_folder(operation, &action);
        operation.vendor_extensions.fixture_folder = Some(folder.clone());
        fixtures::populate(operation, &folder, document)
    }
}

/// Visit every parameter of every group, the aggregate list included
fn for_each_parameter(operation: &mut Operation, mut visit: impl FnMut(&mut Parameter)) {
    for group in operation.param_groups_mut() {
        group.iter_mut().for_each(&mut visit);
    }
}

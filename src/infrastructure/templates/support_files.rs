//! Support files the framework would render, and the suppression policy

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::generation::rules;

/// Generic support file rendered once per client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportingFile {
    /// Template file name, e.g. `Configuration.mustache`
    pub template_file: String,
    pub folder: String,
    pub destination: String,
}

impl SupportingFile {
    pub fn new(
        template_file: impl Into<String>,
        folder: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            template_file: template_file.into(),
            folder: folder.into(),
            destination: destination.into(),
        }
    }

    fn template_stem(&self) -> &str {
        template_stem(&self.template_file)
    }
}

fn template_stem(template_file: &str) -> &str {
    Path::new(template_file)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(template_file)
}

/// Templates the framework will render besides operations and models
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSet {
    pub supporting_files: Vec<SupportingFile>,
    /// Per-model test templates, template file to output suffix
    pub model_test_templates: BTreeMap<String, String>,
}

/// Drop the support files this client ships by hand, and the model test template
///
/// Returns the template files that were removed.
pub fn apply_output_policy(templates: &mut TemplateSet) -> Vec<String> {
    let mut removed = Vec::new();

    templates.supporting_files.retain(|file| {
        let skipped = rules::SKIPPED_SUPPORTING_FILES.contains(&file.template_stem());
        if skipped {
            removed.push(file.template_file.clone());
        }
        !skipped
    });

    templates.model_test_templates.retain(|template, _| {
        let skipped = template_stem(template) == rules::MODEL_TEST_TEMPLATE;
        if skipped {
            removed.push(template.clone());
        }
        !skipped
    });

    tracing::debug!(removed = ?removed, "Applied output suppression policy");
    removed
}

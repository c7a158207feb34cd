//! Generation orchestration - coordinates one house-style run

use std::path::PathBuf;
use std::sync::Arc;

use crate::core::{GeneratorConfig, Result};
use crate::generation::{
    ApiExtractor, Artifact, CodegenHooks, ExtractedApi, GenerationContext, GenerationError, Model,
    OperationGroup, OperationTransformer, OutputService, TargetLanguage, transform_models,
};
use crate::infrastructure::changelog;
use crate::infrastructure::openapi::normalize;
use crate::infrastructure::{
    ApiDocument, DescriptionTable, FileSystemOutputService, TemplateSet, TeraTemplateRenderer,
    apply_output_policy,
};

/// The house style for one target language
pub struct HouseStyle {
    config: GeneratorConfig,
    descriptions: DescriptionTable,
}

impl HouseStyle {
    pub fn new(config: GeneratorConfig, descriptions: DescriptionTable) -> Self {
        Self {
            config,
            descriptions,
        }
    }

    /// Build from a config, loading its description table if one is named
    pub fn from_config(config: GeneratorConfig) -> Result<Self> {
        let descriptions = match &config.descriptions {
            Some(path) => DescriptionTable::load(path)?,
            None => DescriptionTable::default(),
        };
        Ok(Self::new(config, descriptions))
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn target(&self) -> TargetLanguage {
        self.config.target
    }

    /// Fresh context for a run of this house style
    pub fn context(&self) -> GenerationContext {
        GenerationContext::new(self.config.target, self.config.package_name.clone())
    }

    /// Tera renderer with the formatting filters for this target
    pub fn renderer(&self) -> TeraTemplateRenderer {
        TeraTemplateRenderer::new(self.config.target)
    }

    /// Output service writing below the configured output directory
    pub fn output_service(&self) -> FileSystemOutputService {
        FileSystemOutputService::new(&self.config.output_dir)
    }
}

impl CodegenHooks for HouseStyle {
    fn process_opts(
        &self,
        context: &mut GenerationContext,
        templates: &mut TemplateSet,
    ) -> Result<()> {
        let version = changelog::resolve(&self.config.changelog)?;
        context.set_artifact_version(&version);

        let removed = apply_output_policy(templates);
        tracing::info!(
            target_language = %self.config.target,
            version = %version,
            suppressed = removed.len(),
            "Configured house style"
        );
        Ok(())
    }

    fn preprocess(&self, document: &mut ApiDocument) -> Result<()> {
        normalize(document);
        Ok(())
    }

    fn post_process_operations(
        &self,
        group: &mut OperationGroup,
        models: &[Model],
        document: &ApiDocument,
    ) -> std::result::Result<Vec<Artifact>, GenerationError> {
        OperationTransformer::new(
            self.config.target,
            &self.descriptions,
            &self.config.placeholder_uri,
        )
        .transform(group, models, document)
    }

    fn post_process_models(&self, models: &mut [Model]) {
        let renamed = transform_models(models);
        tracing::debug!(models = models.len(), renamed, "Transformed models");
    }

    fn finalize(&self) -> Result<Vec<PathBuf>> {
        let path = changelog::persist(&self.config.changelog, &self.config.output_dir)?;
        Ok(vec![path])
    }
}

/// Outcome of a run, handed back to the host's renderer
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub context: GenerationContext,
    pub groups: Vec<OperationGroup>,
    pub models: Vec<Model>,
    /// Response fixtures
    pub artifacts: Vec<Artifact>,
    /// Paths of the fixtures and changelog written
    pub written: Vec<PathBuf>,
}

/// Orchestrates a single, sequential generation run
pub struct GenerationOrchestrator {
    hooks: Arc<dyn CodegenHooks>,
    extractor: Arc<dyn ApiExtractor>,
    output: Arc<dyn OutputService>,
}

impl GenerationOrchestrator {
    pub fn new(
        hooks: Arc<dyn CodegenHooks>,
        extractor: Arc<dyn ApiExtractor>,
        output: Arc<dyn OutputService>,
    ) -> Self {
        Self {
            hooks,
            extractor,
            output,
        }
    }

    /// Orchestrator writing below the house style's output directory
    pub fn with_house_style(style: HouseStyle, extractor: Arc<dyn ApiExtractor>) -> Self {
        let output = Arc::new(style.output_service());
        Self::new(Arc::new(style), extractor, output)
    }

    /// Execute the run
    ///
    /// Nothing is written unless every operation group was transformed.
    pub fn run(
        &self,
        mut document: ApiDocument,
        templates: &mut TemplateSet,
        mut context: GenerationContext,
    ) -> Result<GenerationResult> {
        // 1. Setup
        self.hooks.process_opts(&mut context, templates)?;

        // 2. Normalize the raw description
        self.hooks.preprocess(&mut document)?;

        // 3. Host extraction
        let ExtractedApi {
            mut groups,
            mut models,
        } = self.extractor.extract(&document)?;
        tracing::debug!(
            groups = groups.len(),
            models = models.len(),
            "Extracted operations and models"
        );

        // 4. Operations, then models
        let mut artifacts = Vec::new();
        for group in &mut groups {
            artifacts.extend(
                self.hooks
                    .post_process_operations(group, &models, &document)?,
            );
        }
        self.hooks.post_process_models(&mut models);

        // 5. Emit
        let mut written = self.output.write_artifacts(&artifacts)?;
        written.extend(self.hooks.finalize()?);

        tracing::info!(
            groups = groups.len(),
            models = models.len(),
            written = written.len(),
            "House style applied"
        );

        Ok(GenerationResult {
            context,
            groups,
            models,
            artifacts,
            written,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use crate::generation::{Operation, Response};
    use crate::infrastructure::SupportingFile;
    use serde_json::json;
    use std::sync::Mutex;
    use tempfile::TempDir;

    struct StaticExtractor(ExtractedApi);

    impl ApiExtractor for StaticExtractor {
        fn extract(&self, _document: &ApiDocument) -> Result<ExtractedApi> {
            Ok(self.0.clone())
        }
    }

    #[derive(Default)]
    struct MemoryOutput {
        artifacts: Mutex<Vec<Artifact>>,
    }

    impl OutputService for MemoryOutput {
        fn write_artifacts(&self, artifacts: &[Artifact]) -> Result<Vec<PathBuf>> {
            let mut stored = self.artifacts.lock().unwrap();
            stored.extend_from_slice(artifacts);
            Ok(artifacts.iter().map(|a| a.path.clone()).collect())
        }
    }

    fn operation(id: &str, action: Option<&str>) -> Operation {
        let mut operation = Operation {
            operation_id: id.to_string(),
            base_name: "Videos".to_string(),
            path: "/videos".to_string(),
            responses: vec![Response {
                code: "200".to_string(),
                example: Some(json!({ "videoId": "vi123" })),
                ..Default::default()
            }],
            ..Default::default()
        };
        operation.vendor_extensions.client_action = action.map(str::to_string);
        operation
    }

    fn house_style(temp_dir: &TempDir) -> HouseStyle {
        let changelog = temp_dir.path().join("CHANGELOG.yml");
        std::fs::write(&changelog, "- name: 1.4.0\n  changes:\n    - Initial\n").unwrap();
        let config = GeneratorConfig::new(
            TargetLanguage::Java,
            "video.api.client",
            temp_dir.path().join("out"),
            changelog,
        );
        HouseStyle::new(config, DescriptionTable::default())
    }

    fn orchestrator(
        style: HouseStyle,
        extracted: ExtractedApi,
        output: Arc<MemoryOutput>,
    ) -> GenerationOrchestrator {
        GenerationOrchestrator::new(
            Arc::new(style),
            Arc::new(StaticExtractor(extracted)),
            output,
        )
    }

    #[test]
    fn test_run_emits_fixtures_then_changelog() {
        let temp_dir = TempDir::new().unwrap();
        let style = house_style(&temp_dir);
        let context = style.context();
        let extracted = ExtractedApi {
            groups: vec![OperationGroup {
                class_name: "VideosApi".to_string(),
                operations: vec![operation("GET_videos", Some("list"))],
                all_hidden: false,
            }],
            models: vec![],
        };
        let output = Arc::new(MemoryOutput::default());
        let mut templates = TemplateSet {
            supporting_files: vec![SupportingFile::new("Configuration.mustache", "src", "Configuration.java")],
            ..Default::default()
        };

        let result = orchestrator(style, extracted, output.clone())
            .run(ApiDocument::new(json!({})), &mut templates, context)
            .unwrap();

        assert_eq!(result.context.artifact_version(), Some("1.4.0"));
        assert!(templates.supporting_files.is_empty());
        assert_eq!(result.groups[0].operations[0].operation_id, "list");

        let paths: Vec<_> = output.artifacts.lock().unwrap().iter().map(|a| a.path.clone()).collect();
        assert_eq!(
            paths,
            [PathBuf::from("tests/resources/payloads/videos/list/responses/200.json")]
        );

        let changelog = temp_dir.path().join("out").join(changelog::CHANGELOG_FILE);
        assert_eq!(result.written.len(), 2);
        assert_eq!(result.written[1], changelog);
        let markdown = std::fs::read_to_string(changelog).unwrap();
        assert!(markdown.contains("## [1.4.0]\n- Initial\n"));
    }

    #[test]
    fn test_missing_action_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let style = house_style(&temp_dir);
        let context = style.context();
        let extracted = ExtractedApi {
            groups: vec![
                OperationGroup {
                    class_name: "VideosApi".to_string(),
                    operations: vec![operation("GET_videos", Some("list"))],
                    all_hidden: false,
                },
                OperationGroup {
                    class_name: "WebhooksApi".to_string(),
                    operations: vec![operation("GET_webhooks", None)],
                    all_hidden: false,
                },
            ],
            models: vec![],
        };
        let output = Arc::new(MemoryOutput::default());

        let result = orchestrator(style, extracted, output.clone()).run(
            ApiDocument::new(json!({})),
            &mut TemplateSet::default(),
            context,
        );

        assert!(matches!(
            result,
            Err(Error::Generation(GenerationError::MissingClientAction { .. }))
        ));
        assert!(output.artifacts.lock().unwrap().is_empty());
        assert!(!temp_dir.path().join("out").exists());
    }

    #[test]
    fn test_unreadable_changelog_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let config = GeneratorConfig::new(
            TargetLanguage::CSharp,
            "ApiVideo",
            temp_dir.path(),
            temp_dir.path().join("missing.yml"),
        );
        let style = HouseStyle::new(config, DescriptionTable::default());
        let context = style.context();
        let output = Arc::new(MemoryOutput::default());

        let result = orchestrator(style, ExtractedApi::default(), output).run(
            ApiDocument::new(json!({})),
            &mut TemplateSet::default(),
            context,
        );
        assert!(matches!(result, Err(Error::Changelog(_))));
    }

    #[test]
    fn test_with_house_style_writes_to_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        let style = house_style(&temp_dir);
        let context = style.context();
        let extracted = ExtractedApi {
            groups: vec![OperationGroup {
                class_name: "VideosApi".to_string(),
                operations: vec![operation("GET_videos", Some("list"))],
                all_hidden: false,
            }],
            models: vec![],
        };

        let result = GenerationOrchestrator::with_house_style(style, Arc::new(StaticExtractor(extracted)))
            .run(ApiDocument::new(json!({})), &mut TemplateSet::default(), context)
            .unwrap();

        let out = temp_dir.path().join("out");
        assert_eq!(
            result.written,
            [
                out.join("tests/resources/payloads/videos/list/responses/200.json"),
                out.join(changelog::CHANGELOG_FILE),
            ]
        );
        assert!(result.written.iter().all(|path| path.exists()));
    }
}

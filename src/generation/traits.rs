//! Port interfaces between the house style and the host framework

use std::path::PathBuf;

use crate::core::Result;
use crate::generation::{
    Artifact, ExtractedApi, GenerationContext, GenerationError, Model, OperationGroup,
};
use crate::infrastructure::{ApiDocument, TemplateSet};

/// Hooks the host framework calls around its own extraction
pub trait CodegenHooks: Send + Sync {
    /// Once, at setup
    fn process_opts(
        &self,
        context: &mut GenerationContext,
        templates: &mut TemplateSet,
    ) -> Result<()>;

    /// Before operations and models are extracted
    fn preprocess(&self, document: &mut ApiDocument) -> Result<()>;

    /// Per API class, after extraction. Returns response fixtures.
    fn post_process_operations(
        &self,
        group: &mut OperationGroup,
        models: &[Model],
        document: &ApiDocument,
    ) -> std::result::Result<Vec<Artifact>, GenerationError>;

    /// On every extracted model
    fn post_process_models(&self, models: &mut [Model]);

    /// After every artifact was written. Returns any further paths written.
    fn finalize(&self) -> Result<Vec<PathBuf>> {
        Ok(Vec::new())
    }
}

/// The framework's extraction of operations and models
pub trait ApiExtractor: Send + Sync {
    fn extract(&self, document: &ApiDocument) -> Result<ExtractedApi>;
}

/// Writes generated artifacts to the output destination
pub trait OutputService: Send + Sync {
    /// Write all artifacts, returning the paths written
    fn write_artifacts(&self, artifacts: &[Artifact]) -> Result<Vec<PathBuf>>;
}

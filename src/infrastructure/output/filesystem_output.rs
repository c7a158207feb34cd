//! Filesystem-based output service implementation

use std::path::{Path, PathBuf};

use crate::core::Result;
use crate::generation::{Artifact, OutputService};

/// Output service that writes artifacts below a root directory
pub struct FileSystemOutputService {
    root: PathBuf,
}

impl FileSystemOutputService {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl OutputService for FileSystemOutputService {
    fn write_artifacts(&self, artifacts: &[Artifact]) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(artifacts.len());

        for artifact in artifacts {
            let path = self.root.join(&artifact.path);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, &artifact.content)?;
            tracing::debug!(path = %path.display(), "Wrote artifact");
            written.push(path);
        }

        Ok(written)
    }
}

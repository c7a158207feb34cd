//! Generator configuration.
//!
//! A run is described by a small YAML file:
//!
//! ```yaml
//! target: csharp
//! package_name: ApiVideo
//! output_dir: ./out
//! changelog: CHANGELOG.yml
//! descriptions: descriptions.yml
//! placeholder_uri: https://api.video
//! ```
//!
//! Relative paths are resolved against the directory holding the config file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::{Error, Result};
use crate::generation::TargetLanguage;

fn default_placeholder_uri() -> String {
    "https://api.video".to_string()
}

/// Settings for one generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Target language of the generated client
    pub target: TargetLanguage,
    /// Package name used in generated metadata
    pub package_name: String,
    /// Root of the generated output
    pub output_dir: PathBuf,
    /// Changelog source (YAML, newest entry first)
    pub changelog: PathBuf,
    /// Optional shared description table
    #[serde(default)]
    pub descriptions: Option<PathBuf>,
    /// URI used when a test needs a URI argument
    #[serde(default = "default_placeholder_uri")]
    pub placeholder_uri: String,
}

impl GeneratorConfig {
    /// Create a config with default placeholders
    pub fn new(
        target: TargetLanguage,
        package_name: impl Into<String>,
        output_dir: impl Into<PathBuf>,
        changelog: impl Into<PathBuf>,
    ) -> Self {
        Self {
            target,
            package_name: package_name.into(),
            output_dir: output_dir.into(),
            changelog: changelog.into(),
            descriptions: None,
            placeholder_uri: default_placeholder_uri(),
        }
    }

    /// Parse a config from YAML text without resolving paths
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: GeneratorConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file and resolve its relative paths
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml_str(&content)?;
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        tracing::debug!(
            path = %path.display(),
            target = %config.target,
            package = %config.package_name,
            "Loaded generator config"
        );
        Ok(config)
    }

    /// Check the settings that every run depends on
    pub fn validate(&self) -> Result<()> {
        if self.package_name.trim().is_empty() {
            return Err(Error::config("package_name cannot be empty"));
        }
        if self.changelog.as_os_str().is_empty() {
            return Err(Error::config("changelog path cannot be empty"));
        }
        if !self.placeholder_uri.contains("://") {
            return Err(Error::config(format!(
                "placeholder_uri must be absolute, got '{}'",
                self.placeholder_uri
            )));
        }
        Ok(())
    }

    fn resolve_paths(&mut self, base: &Path) {
        let resolve = |p: &PathBuf| {
            if p.is_relative() {
                base.join(p)
            } else {
                p.clone()
            }
        };
        self.output_dir = resolve(&self.output_dir);
        self.changelog = resolve(&self.changelog);
        self.descriptions = self.descriptions.as_ref().map(resolve);
    }
}

//! Changelog-driven package versioning
//!
//! The changelog source is a YAML list of releases, newest first:
//!
//! ```yaml
//! - name: 1.2.0
//!   date: 2024-03-01
//!   changes:
//!     - Add pagination helpers
//! - name: 1.1.0
//!   changes:
//!     - Add live streams
//! ```
//!
//! The first entry is the current release. Every entry name must be a valid
//! semantic version.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::{Error, Result};

/// File name of the rendered changelog in the output root
pub const CHANGELOG_FILE: &str = "CHANGELOG.md";

/// One release of the generated client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogEntry {
    pub name: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub changes: Vec<String>,
}

/// Release history, newest first
///
/// Never empty and every name is a semantic version, however it was built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ChangelogEntry>", into = "Vec<ChangelogEntry>")]
pub struct Changelog {
    entries: Vec<ChangelogEntry>,
}

impl TryFrom<Vec<ChangelogEntry>> for Changelog {
    type Error = Error;

    fn try_from(entries: Vec<ChangelogEntry>) -> Result<Self> {
        Self::from_entries(entries)
    }
}

impl From<Changelog> for Vec<ChangelogEntry> {
    fn from(changelog: Changelog) -> Self {
        changelog.entries
    }
}

impl Changelog {
    /// Parse and validate a changelog
    pub fn parse(content: &str) -> Result<Self> {
        let entries: Vec<ChangelogEntry> = serde_yaml::from_str(content)
            .map_err(|e| Error::changelog(format!("failed to parse changelog: {e}")))?;
        Self::from_entries(entries)
    }

    pub fn from_entries(entries: Vec<ChangelogEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::changelog("changelog has no versions"));
        }
        for entry in &entries {
            semver::Version::parse(&entry.name).map_err(|e| {
                Error::changelog(format!("invalid version '{}': {e}", entry.name))
            })?;
        }
        Ok(Self { entries })
    }

    /// Read a changelog file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::changelog(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::parse(&content)
    }

    pub fn entries(&self) -> &[ChangelogEntry] {
        &self.entries
    }

    /// Most recent release
    pub fn last_version(&self) -> Option<&ChangelogEntry> {
        self.entries.first()
    }

    /// Render the changelog as Markdown
    pub fn to_markdown(&self) -> String {
        let mut out = String::from(
            "# Changelog\nAll changes to this project will be documented in this file.\n",
        );
        for entry in &self.entries {
            let heading = match entry.date {
                Some(date) => format!("\n## [{}] - {}\n", entry.name, date.format("%Y-%m-%d")),
                None => format!("\n## [{}]\n", entry.name),
            };
            out.push_str(&heading);
            for change in &entry.changes {
                out.push_str(&format!("- {change}\n"));
            }
        }
        out
    }

    /// Write the rendered changelog into the output root
    pub fn write_to(&self, output_dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(output_dir)?;
        let path = output_dir.join(CHANGELOG_FILE);
        std::fs::write(&path, self.to_markdown())?;
        tracing::debug!(path = %path.display(), "Wrote changelog");
        Ok(path)
    }
}

/// Current package version named by the changelog at `source`
pub fn resolve(source: &Path) -> Result<String> {
    let changelog = Changelog::load(source)?;
    changelog
        .last_version()
        .map(|entry| entry.name.clone())
        .ok_or_else(|| Error::changelog("changelog has no versions"))
}

/// Copy the changelog at `source` into `output_dir`
pub fn persist(source: &Path, output_dir: &Path) -> Result<PathBuf> {
    Changelog::load(source)?.write_to(output_dir)
}

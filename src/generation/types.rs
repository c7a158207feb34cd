//! Core types for the generation domain

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::generation::GenerationError;

/// Client languages the house style knows how to write literals for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    CSharp,
    Java,
}

impl TargetLanguage {
    /// Identifier used as the description-table key
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetLanguage::CSharp => "csharp",
            TargetLanguage::Java => "java",
        }
    }

    /// Get the display name for this language
    pub fn display_name(&self) -> &'static str {
        match self {
            TargetLanguage::CSharp => "C#",
            TargetLanguage::Java => "Java",
        }
    }

    /// Get all supported languages
    pub fn all() -> Vec<TargetLanguage> {
        vec![TargetLanguage::CSharp, TargetLanguage::Java]
    }

    /// Token inserted after every line break of an embedded doc comment
    pub fn comment_continuation(&self) -> &'static str {
        match self {
            TargetLanguage::CSharp => "        /// ",
            TargetLanguage::Java => "     * ",
        }
    }

    /// List literal over already-quoted, comma-separated elements
    pub fn string_list_literal(&self, elements: &str) -> String {
        match self {
            TargetLanguage::CSharp => format!("new List<string> {{ {elements} }}"),
            TargetLanguage::Java => format!("Arrays.asList({elements})"),
        }
    }

    /// Empty list of the framework's element signature
    pub fn empty_list_literal(&self, item: &str) -> String {
        match self {
            TargetLanguage::CSharp => format!("new List<{item}>()"),
            TargetLanguage::Java => format!("Collections.<{item}>emptyList()"),
        }
    }

    pub fn string_literal(&self, text: &str) -> String {
        format!("\"{text}\"")
    }

    pub fn date_time_literal(&self, text: &str) -> String {
        match self {
            TargetLanguage::CSharp => format!("DateTime.Parse(\"{text}\")"),
            TargetLanguage::Java => format!("OffsetDateTime.parse(\"{text}\")"),
        }
    }

    pub fn uri_constructor(&self, uri: &str) -> String {
        match self {
            TargetLanguage::CSharp => format!("new Uri(\"{uri}\")"),
            TargetLanguage::Java => format!("URI.create(\"{uri}\")"),
        }
    }

    pub fn file_constructor(&self) -> String {
        match self {
            TargetLanguage::CSharp => "new MemoryStream()".to_string(),
            TargetLanguage::Java => "new File(\"\")".to_string(),
        }
    }

    pub fn integer_literal(&self) -> String {
        "123".to_string()
    }

    pub fn default_constructor(&self, signature: &str) -> String {
        format!("new {signature}()")
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetLanguage {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csharp" | "c#" | "cs" => Ok(TargetLanguage::CSharp),
            "java" => Ok(TargetLanguage::Java),
            _ => Err(GenerationError::InvalidLanguage(s.to_string())),
        }
    }
}

/// Generated artifact
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    /// Path relative to the output root
    pub path: PathBuf,
    pub content: String,
}

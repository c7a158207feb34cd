//! Infrastructure layer - file formats and I/O behind the generation domain

pub mod changelog;
pub mod descriptions;
pub mod generation;
pub mod openapi;
pub mod output;
pub mod templates;

pub use changelog::{Changelog, ChangelogEntry};
pub use descriptions::DescriptionTable;
pub use generation::{TeraTemplateRenderer, register_filters};
pub use openapi::ApiDocument;
pub use output::FileSystemOutputService;
pub use templates::{SupportingFile, TemplateSet, apply_output_policy};

//! Raw API description: loading and house-wide normalization

pub mod document;
pub mod file_loader;
pub mod normalizer;

pub use document::ApiDocument;
pub use file_loader::load_document;
pub use normalizer::normalize;

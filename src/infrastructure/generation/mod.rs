//! Template rendering support

pub mod template_renderer;

pub use template_renderer::{TeraTemplateRenderer, register_filters};

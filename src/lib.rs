//! House-style post-processing for OpenAPI client generators.
//!
//! The host framework parses an API description, extracts operations and
//! models, and renders templates. This crate sits between extraction and
//! rendering: it renames operations after their `x-client-action`, strips
//! client-ignored parameters, synthesizes example literals, derives pagination
//! descriptors and response fixtures, and resolves the package version from
//! the changelog.
#![deny(unsafe_code)]

pub mod core;
pub mod generation;
pub mod infrastructure;

pub use crate::core::{Error, GeneratorConfig, Result};
pub use generation::{
    GenerationContext, GenerationOrchestrator, GenerationResult, HouseStyle, Operation,
    OperationGroup, TargetLanguage,
};

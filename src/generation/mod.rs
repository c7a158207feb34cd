//! Generation domain module - the house style applied to extracted APIs
//!
//! Takes the operations and models the host framework extracted from an API
//! description and reshapes them into the layout the house templates expect:
//! canonical names, stable ordering, hidden parameters, synthesized literals,
//! pagination descriptors and response fixtures.

pub mod context;
pub mod errors;
pub mod examples;
pub mod fixtures;
pub mod formatting;
pub mod model;
pub mod models;
pub mod operations;
pub mod orchestrator;
pub mod pagination;
pub mod rules;
pub mod traits;
pub mod types;
pub mod utils;

pub use context::*;
pub use errors::*;
pub use model::*;
pub use models::transform_models;
pub use operations::OperationTransformer;
pub use orchestrator::*;
pub use traits::*;
pub use types::*;

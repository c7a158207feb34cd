//! Support-file templates handed to the framework

pub mod support_files;

pub use support_files::*;

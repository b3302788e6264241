//! Field-level change detection between versions of a form template.
//!
//! [`compare`] matches two versions' fields by `field_id`, diffs each attribute,
//! classifies every field and summarizes the result. The engine is synchronous,
//! holds no state and performs no I/O.

pub mod attributes;
pub mod classify;
pub mod core;
pub mod error;
pub mod matcher;
pub mod metrics;
pub mod parallel;
pub mod parse;
pub mod store;
pub mod types;
pub mod utils;
pub mod wasm_api;

#[cfg(test)]
mod test_data;

pub use crate::core::{compare, compare_request, compare_with_options};
pub use crate::error::{CompareError, Result};
pub use crate::parallel::compare_batch;
pub use crate::parse::parse_field_export;
pub use crate::store::{compare_versions, InMemoryStore, VersionStore};
pub use crate::types::*;

//! Application use cases. Orchestrate domain logic via ports.

pub mod import_service;
pub mod latest_release;
pub mod transform;

pub use import_service::{ImportService, ImportSummary, RunState};
pub use latest_release::extract_latest_release;
pub use transform::transform_entries;

//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod aggregate;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use aggregate::{aggregate_from, execute_aggregate, validate_args};
pub use models::AggregateArgs;
pub use utils::{display_catalog, display_schema, display_version, validate_report_file};

//! Configuration and constants for the CLI.

use std::time::Duration;

/// Default timeout for supplier HTTP requests
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default number of groups shown in text summaries
pub const DEFAULT_TOP_GROUPS: usize = 10;

/// Upper bound for `--top`
pub const MAX_TOP_GROUPS: usize = 1000;

// Envelope field names that may wrap the stamp array (checked in order)
pub const STAMP_FIELD_NAMES: &[&str] = &["stamps", "items", "data", "result", "json"];

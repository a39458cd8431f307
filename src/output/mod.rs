//! Output writers for stamp reports.
//!
//! This module handles:
//! - Building versioned reports and checking their invariants
//! - JSON reports on disk
//! - Text summaries for the terminal

pub mod json;
pub mod report;
pub mod text;

// Re-export main functions
pub use json::{read_report, report_to_string, write_report};
pub use report::{build_report, validate_report};
pub use text::render_summary;

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

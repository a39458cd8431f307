use crate::catalog::StampCatalog;
use crate::output::{read_report, validate_report};
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;
    validate_report(&report)
        .with_context(|| format!("Report {} is inconsistent", file_path.display()))?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    if let Some(post_id) = &report.post_id {
        println!("  Post: {}", post_id);
    }
    println!("  Policy: {}", report.policy);
    println!("  Stamps: {}", report.total_stamps);
    println!("  Reactors: {}", report.distinct_reactors);
    println!("  Groups: {}", report.groups.len());

    Ok(())
}

/// Print the effective catalog
pub fn display_catalog(file: Option<&Path>) -> Result<()> {
    let catalog = match file {
        Some(path) => StampCatalog::load(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => StampCatalog::default(),
    };

    println!("Stamp Catalog ({} entries)", catalog.len());
    for entry in catalog.entries() {
        println!("  {}  {:<10} {}", entry.glyph, entry.kind, entry.label);
    }

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Mood Stamps Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string            - Schema version (e.g., '1.0.0')");
        println!("  post_id: string?           - Post the stamps belong to");
        println!("  policy: string             - Reactor policy applied before grouping");
        println!("  total_stamps: number       - Stamps across all groups");
        println!("  distinct_reactors: number  - Distinct anonymous reactors");
        println!("  groups: array              - One entry per stamp kind, first seen first");
        println!("    type: string             - Stamp kind");
        println!("    count: number            - Stamps of this kind, repeats included");
        println!("    stamps: array            - The stamps, in supplied order");
        println!("      id: string             - Stamp id");
        println!("      type: string           - Stamp kind");
        println!("      native: string         - Display glyph");
        println!("      anonymousId: string    - Reactor id");
        println!("  generated_at: string       - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Mood Stamps v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Stamp aggregation for an anonymous mood-sharing app.");
}

//! Aggregate command implementation.
//!
//! The aggregate command:
//! 1. Fetches stamps from a file or URL
//! 2. Applies the reactor policy
//! 3. Groups stamps by kind
//! 4. Writes the JSON report (and optionally a text summary)

use super::models::AggregateArgs;
use crate::aggregator::{aggregate, apply_policy, calculate_distribution, ReactionPolicy};
use crate::catalog::StampCatalog;
use crate::output::{build_report, render_summary, write_report};
use crate::stamp::{AggregatedStamp, StampReport};
use crate::supplier::{FileSupplier, HttpSupplier, StampSupplier};
use crate::utils::config::MAX_TOP_GROUPS;
use crate::utils::error::SupplyError;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the aggregate command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The report that was written
///
/// # Errors
/// * Supplier failures (missing file, HTTP errors, unparseable documents)
/// * Catalog load errors
/// * File write errors
pub fn execute_aggregate(args: AggregateArgs) -> Result<StampReport> {
    let start_time = Instant::now();

    let supplier = build_supplier(&args)?;
    info!("Aggregating stamps from {}", supplier.describe());

    let catalog = match &args.catalog {
        Some(path) => StampCatalog::load(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => StampCatalog::default(),
    };

    info!("Step 1/3: Fetching and grouping stamps (policy: {})...", args.policy);
    let groups = aggregate_from(supplier.as_ref(), args.policy)
        .context("Failed to fetch stamps")?;

    let dist = calculate_distribution(&groups);
    info!("Stamp distribution: {}", dist.summary());

    info!("Step 2/3: Building report...");
    let report = build_report(groups, args.post_id.clone(), args.policy);

    info!("Step 3/3: Writing output files...");
    write_report(&report, &args.output_json).context("Failed to write report JSON")?;
    info!("✓ Report written to: {}", args.output_json.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(64));
        println!("STAMP SUMMARY");
        println!("{}", "=".repeat(64));
        if let Some(post_id) = &report.post_id {
            println!("Post:     {}", post_id);
        }
        println!("Policy:   {}", report.policy);
        println!("\n{}", render_summary(&report.groups, &catalog, args.top_groups));
        println!("{}", "=".repeat(64));
    }

    let elapsed = start_time.elapsed();
    info!("Aggregation completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Fetch, filter and group stamps from any supplier
///
/// **Public** - the pipeline without file output
pub fn aggregate_from<S: StampSupplier + ?Sized>(
    supplier: &S,
    policy: ReactionPolicy,
) -> Result<Vec<AggregatedStamp>, SupplyError> {
    let stamps = supplier.fetch_stamps()?;
    debug!("Supplier returned {} stamps", stamps.len());

    let filtered = apply_policy(&stamps, policy);
    Ok(aggregate(&filtered))
}

/// Pick the supplier named by the arguments
///
/// **Private** - internal helper for execute_aggregate
fn build_supplier(args: &AggregateArgs) -> Result<Box<dyn StampSupplier>> {
    match (&args.input, &args.url) {
        (Some(path), None) => Ok(Box::new(FileSupplier::new(path))),
        (None, Some(url)) => Ok(Box::new(
            HttpSupplier::new(url).context("Failed to create HTTP client")?,
        )),
        _ => anyhow::bail!("Exactly one of --input or --url is required"),
    }
}

/// Validate aggregate arguments
///
/// **Public** - can be called before execute_aggregate for early validation
pub fn validate_args(args: &AggregateArgs) -> Result<()> {
    match (&args.input, &args.url) {
        (Some(_), Some(_)) => anyhow::bail!("--input and --url cannot be combined"),
        (None, None) => anyhow::bail!("One of --input or --url is required"),
        _ => {}
    }

    if let Some(path) = &args.input {
        if path.as_os_str().is_empty() {
            anyhow::bail!("Input path cannot be empty");
        }
    }

    if let Some(url) = &args.url {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            anyhow::bail!("URL must start with http:// or https://");
        }
    }

    if let Some(post_id) = &args.post_id {
        if post_id.trim().is_empty() {
            anyhow::bail!("Post id cannot be blank");
        }
    }

    if args.top_groups == 0 {
        anyhow::bail!("top must be greater than 0");
    }

    if args.top_groups > MAX_TOP_GROUPS {
        anyhow::bail!("top is too large (max {})", MAX_TOP_GROUPS);
    }

    Ok(())
}

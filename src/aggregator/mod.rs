//! Aggregation of stamps into per-kind groups.
//!
//! This module transforms supplied stamps into:
//! - Per-kind groups (the partition consumers render)
//! - Policy-filtered input for products that limit repeat reactions
//! - Memoized results for repeated input
//! - Distribution statistics and rankings

pub mod cache;
pub mod grouping;
pub mod metrics;
pub mod policy;

// Re-export main types and functions
pub use cache::AggregationCache;
pub use grouping::{aggregate, flatten};
pub use metrics::{calculate_distribution, count_distinct_reactors, top_groups, StampDistribution};
pub use policy::{apply_policy, ReactionPolicy};

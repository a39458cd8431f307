//! Summary statistics over aggregated groups.
//!
//! These feed the text summary and the logs; the groups themselves stay in
//! first-seen order, rankings are computed here as a separate view.

use crate::stamp::{AggregatedStamp, StampKind};
use log::debug;
use std::collections::HashSet;

/// Rank groups by count
///
/// **Public** - main entry point for ranking
///
/// # Arguments
/// * `groups` - Output of `aggregate`
/// * `top_n` - Number of groups to return
///
/// # Returns
/// Up to `top_n` groups, most stamps first. Ties keep aggregation order.
pub fn top_groups(groups: &[AggregatedStamp], top_n: usize) -> Vec<&AggregatedStamp> {
    debug!("Ranking top {} of {} groups", top_n, groups.len());

    let mut ranked: Vec<&AggregatedStamp> = groups.iter().collect();
    // stable sort keeps first-seen order among equal counts
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(top_n);
    ranked
}

/// Calculate distribution statistics
///
/// **Public** - provides summary statistics
pub fn calculate_distribution(groups: &[AggregatedStamp]) -> StampDistribution {
    if groups.is_empty() {
        return StampDistribution::default();
    }

    let total_stamps: usize = groups.iter().map(|g| g.count).sum();

    let mut reactors = HashSet::new();
    let mut repeat_reactions = 0;
    for group in groups {
        let distinct = group.reactors();
        repeat_reactions += group.stamps.len() - distinct.len();
        reactors.extend(distinct);
    }

    let top = top_groups(groups, 1).into_iter().next();

    StampDistribution {
        total_stamps,
        group_count: groups.len(),
        distinct_reactors: reactors.len(),
        repeat_reactions,
        top_kind: top.map(|g| g.kind.clone()),
        top_count: top.map_or(0, |g| g.count),
    }
}

/// Count distinct reactors across groups
///
/// **Public** - used when building reports
pub fn count_distinct_reactors(groups: &[AggregatedStamp]) -> usize {
    groups
        .iter()
        .flat_map(|g| g.stamps.iter().map(|s| s.anonymous_id.as_str()))
        .collect::<HashSet<_>>()
        .len()
}

/// Stamp distribution statistics
///
/// **Public** - returned from calculate_distribution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StampDistribution {
    /// Total stamps across all groups
    pub total_stamps: usize,

    /// Number of distinct kinds
    pub group_count: usize,

    /// Number of distinct reactors
    pub distinct_reactors: usize,

    /// Stamps beyond a reactor's first of the same kind
    pub repeat_reactions: usize,

    /// Most used kind (first seen wins a tie)
    pub top_kind: Option<StampKind>,

    /// Count of the most used kind
    pub top_count: usize,
}

impl StampDistribution {
    /// Share of all stamps held by the top kind, in percent
    pub fn top_percentage(&self) -> f64 {
        if self.total_stamps == 0 {
            0.0
        } else {
            (self.top_count as f64 / self.total_stamps as f64) * 100.0
        }
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        let top = self
            .top_kind
            .as_ref()
            .map_or_else(|| "-".to_string(), |k| k.to_string());

        format!(
            "Stamps: {} | Kinds: {} | Reactors: {} | Repeats: {} | Top: {} ({:.1}%)",
            self.total_stamps,
            self.group_count,
            self.distinct_reactors,
            self.repeat_reactions,
            top,
            self.top_percentage()
        )
    }
}

//! Group stamps by kind.
//!
//! Grouping is a partition of the input: every stamp lands in exactly one
//! group, groups appear in the order their kind was first seen, and stamps
//! keep their relative order inside a group.
//!
//! Example: `[happy#1, sad#3, happy#2]` becomes `[happy: [#1, #2], sad: [#3]]`.

use crate::stamp::{AggregatedStamp, Stamp};
use log::debug;
use std::collections::HashMap;

/// Aggregate stamps into per-kind groups
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `stamps` - Stamps in supplier order (any order, may be empty)
///
/// # Returns
/// One group per distinct kind, in first-seen order
///
/// # Algorithm
/// 1. Walk the input once
/// 2. Look up the group index for the stamp's kind name, creating a group on first sight
/// 3. Append a copy of the stamp to that group
///
/// Repeat reactions from one reactor are all counted. Kinds are compared by
/// their wire name, so unknown kinds simply form their own groups.
pub fn aggregate(stamps: &[Stamp]) -> Vec<AggregatedStamp> {
    let mut index_by_kind: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<AggregatedStamp> = Vec::new();

    for stamp in stamps {
        let index = *index_by_kind
            .entry(stamp.kind.as_str())
            .or_insert_with(|| {
                groups.push(AggregatedStamp {
                    kind: stamp.kind.clone(),
                    count: 0,
                    stamps: Vec::new(),
                });
                groups.len() - 1
            });

        let group = &mut groups[index];
        group.stamps.push(stamp.clone());
        group.count += 1;
    }

    debug!("Aggregated {} stamps into {} groups", stamps.len(), groups.len());

    groups
}

/// Concatenate every group's stamps back into one sequence
///
/// **Public** - inverse view of `aggregate` (modulo interleaving)
pub fn flatten(groups: &[AggregatedStamp]) -> Vec<Stamp> {
    groups
        .iter()
        .flat_map(|group| group.stamps.iter().cloned())
        .collect()
}

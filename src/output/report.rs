//! Build stamp reports and check them against the grouping invariants.

use crate::aggregator::{count_distinct_reactors, ReactionPolicy};
use crate::stamp::{AggregatedStamp, StampReport};
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::ReportError;
use chrono::Utc;
use std::collections::HashSet;

/// Wrap aggregated groups in a versioned report
///
/// **Public** - used by commands to create final output
pub fn build_report(
    groups: Vec<AggregatedStamp>,
    post_id: Option<String>,
    policy: ReactionPolicy,
) -> StampReport {
    StampReport {
        version: SCHEMA_VERSION.to_string(),
        post_id,
        policy: policy.to_string(),
        total_stamps: groups.iter().map(|g| g.count).sum(),
        distinct_reactors: count_distinct_reactors(&groups),
        groups,
        generated_at: Utc::now().to_rfc3339(),
    }
}

/// Check a report's groups form a valid partition
///
/// **Public** - reports may be edited or produced by other tools
///
/// # Errors
/// The first violation found, checked group by group in report order.
pub fn validate_report(report: &StampReport) -> Result<(), ReportError> {
    let mut kinds = HashSet::new();
    let mut ids = HashSet::new();
    let mut held = 0;

    for group in &report.groups {
        let kind = group.kind.as_str();

        if !kinds.insert(kind) {
            return Err(ReportError::DuplicateKind(kind.to_string()));
        }

        if group.stamps.is_empty() {
            return Err(ReportError::EmptyGroup(kind.to_string()));
        }

        if group.count != group.stamps.len() {
            return Err(ReportError::CountMismatch {
                kind: kind.to_string(),
                count: group.count,
                actual: group.stamps.len(),
            });
        }

        if let Some(stray) = group.stamps.iter().find(|s| s.kind.as_str() != kind) {
            return Err(ReportError::MisfiledStamp {
                id: stray.id.clone(),
                group: kind.to_string(),
                kind: stray.kind.to_string(),
            });
        }

        if let Some(repeat) = group.stamps.iter().find(|s| !ids.insert(s.id.as_str())) {
            return Err(ReportError::DuplicateStamp(repeat.id.clone()));
        }

        held += group.count;
    }

    if held != report.total_stamps {
        return Err(ReportError::TotalMismatch {
            expected: report.total_stamps,
            actual: held,
        });
    }

    let reactors = count_distinct_reactors(&report.groups);
    if reactors != report.distinct_reactors {
        return Err(ReportError::ReactorMismatch {
            expected: report.distinct_reactors,
            actual: reactors,
        });
    }

    Ok(())
}

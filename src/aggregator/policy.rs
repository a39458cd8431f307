//! Reactor policies applied before aggregation.
//!
//! `aggregate` counts every stamp. Products that want "one stamp per reactor"
//! filter the input with a policy first; the grouping itself never changes.

use crate::stamp::Stamp;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// How repeat reactions from one reactor are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ReactionPolicy {
    /// Every stamp counts
    #[default]
    CountAll,

    /// Keep a reactor's first stamp of each kind
    OnePerReactorPerKind,

    /// Keep a reactor's first stamp on the post, whatever its kind
    OnePerReactor,
}

impl ReactionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionPolicy::CountAll => "count-all",
            ReactionPolicy::OnePerReactorPerKind => "one-per-reactor-per-kind",
            ReactionPolicy::OnePerReactor => "one-per-reactor",
        }
    }
}

impl fmt::Display for ReactionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter stamps according to a policy
///
/// **Public** - run before `aggregate`
///
/// Keeps the first qualifying stamp in input order and preserves the
/// relative order of everything kept.
pub fn apply_policy(stamps: &[Stamp], policy: ReactionPolicy) -> Vec<Stamp> {
    let kept: Vec<Stamp> = match policy {
        ReactionPolicy::CountAll => stamps.to_vec(),
        ReactionPolicy::OnePerReactorPerKind => {
            let mut seen = HashSet::new();
            stamps
                .iter()
                .filter(|s| seen.insert((s.anonymous_id.as_str(), s.kind.as_str())))
                .cloned()
                .collect()
        }
        ReactionPolicy::OnePerReactor => {
            let mut seen = HashSet::new();
            stamps
                .iter()
                .filter(|s| seen.insert(s.anonymous_id.as_str()))
                .cloned()
                .collect()
        }
    };

    debug!(
        "Policy {} kept {} of {} stamps",
        policy,
        kept.len(),
        stamps.len()
    );

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Stamp> {
        vec![
            Stamp::new("1", "love", "🥰", "a"),
            Stamp::new("2", "love", "🥰", "a"),
            Stamp::new("3", "cry", "😭", "a"),
            Stamp::new("4", "love", "🥰", "b"),
        ]
    }

    fn ids(stamps: &[Stamp]) -> Vec<&str> {
        stamps.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_count_all_is_identity() {
        let stamps = sample();
        assert_eq!(apply_policy(&stamps, ReactionPolicy::CountAll), stamps);
    }

    #[test]
    fn test_one_per_reactor_per_kind() {
        let kept = apply_policy(&sample(), ReactionPolicy::OnePerReactorPerKind);
        assert_eq!(ids(&kept), vec!["1", "3", "4"]);
    }

    #[test]
    fn test_one_per_reactor() {
        let kept = apply_policy(&sample(), ReactionPolicy::OnePerReactor);
        assert_eq!(ids(&kept), vec!["1", "4"]);
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(ReactionPolicy::default().to_string(), "count-all");
        let parsed: ReactionPolicy = serde_json::from_str("\"one-per-reactor\"").unwrap();
        assert_eq!(parsed, ReactionPolicy::OnePerReactor);
    }
}

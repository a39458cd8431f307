//! Record and report definitions.
//!
//! `Stamp` mirrors what the stamp supplier hands us; `AggregatedStamp` is the
//! per-kind rollup; `StampReport` is the versioned JSON document we write.

use super::kind::StampKind;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single emoji reaction placed on a post
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stamp {
    /// Opaque identifier, unique within one post's stamps
    pub id: String,

    /// Stamp kind (the grouping key)
    #[serde(rename = "type")]
    pub kind: StampKind,

    /// Display glyph carried by the record
    #[serde(alias = "glyph")]
    pub native: String,

    /// Opaque identifier of whoever placed the stamp
    #[serde(alias = "anonymous_id")]
    pub anonymous_id: String,
}

impl Stamp {
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<StampKind>,
        native: impl Into<String>,
        anonymous_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            native: native.into(),
            anonymous_id: anonymous_id.into(),
        }
    }
}

/// All stamps of one kind, in the order they were supplied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedStamp {
    #[serde(rename = "type")]
    pub kind: StampKind,

    /// Number of records in `stamps`, repeats from one reactor included
    pub count: usize,

    pub stamps: Vec<Stamp>,
}

impl AggregatedStamp {
    /// Glyph of the first stamp seen for this kind
    ///
    /// Records of one kind are expected to share a glyph; when they do not,
    /// the first one wins and the rest are not checked.
    pub fn glyph(&self) -> Option<&str> {
        self.stamps.first().map(|s| s.native.as_str())
    }

    /// Distinct reactors in first-seen order
    pub fn reactors(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.stamps
            .iter()
            .map(|s| s.anonymous_id.as_str())
            .filter(|id| seen.insert(*id))
            .collect()
    }
}

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StampReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Post the stamps belong to, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,

    /// Reactor policy applied before aggregation
    pub policy: String,

    /// Number of stamps that went into `groups`
    pub total_stamps: usize,

    /// Distinct reactors across all groups
    pub distinct_reactors: usize,

    /// Per-kind groups in first-seen order
    pub groups: Vec<AggregatedStamp>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamp_deserializes_camel_case() {
        let stamp: Stamp = serde_json::from_str(
            r#"{"id":"1","type":"love","native":"🥰","anonymousId":"user1"}"#,
        )
        .unwrap();

        assert_eq!(stamp, Stamp::new("1", StampKind::Love, "🥰", "user1"));
    }

    #[test]
    fn test_stamp_accepts_aliases() {
        let stamp: Stamp = serde_json::from_str(
            r#"{"id":"1","type":"cry","glyph":"😭","anonymous_id":"u"}"#,
        )
        .unwrap();

        assert_eq!(stamp.native, "😭");
        assert_eq!(stamp.anonymous_id, "u");
    }

    #[test]
    fn test_stamp_serializes_wire_names() {
        let value = serde_json::to_value(Stamp::new("7", "happy", "😊", "u1")).unwrap();
        assert_eq!(value["type"], "happy");
        assert_eq!(value["anonymousId"], "u1");
    }

    #[test]
    fn test_group_glyph_and_reactors() {
        let group = AggregatedStamp {
            kind: StampKind::Love,
            count: 3,
            stamps: vec![
                Stamp::new("1", StampKind::Love, "🥰", "a"),
                Stamp::new("2", StampKind::Love, "💖", "b"),
                Stamp::new("3", StampKind::Love, "🥰", "a"),
            ],
        };

        assert_eq!(group.glyph(), Some("🥰"));
        assert_eq!(group.reactors(), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_group_has_no_glyph() {
        let group = AggregatedStamp {
            kind: StampKind::Sad,
            count: 0,
            stamps: Vec::new(),
        };
        assert!(group.glyph().is_none());
        assert!(group.reactors().is_empty());
    }
}

//! Stamp kinds.
//!
//! The product ships a fixed set of stamps, but records coming from the
//! supplier may carry kinds introduced later by configuration. Those are kept
//! verbatim in [`StampKind::Other`] so they still group correctly.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Kind of emoji reaction attached to a post
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StampKind {
    Thanks,
    Love,
    Smile,
    Cry,
    Sad,
    Shock,
    /// Any kind outside the built-in set, stored as the literal string
    Other(String),
}

impl StampKind {
    /// Built-in kinds in their canonical display order
    pub const BUILT_IN: [StampKind; 6] = [
        StampKind::Thanks,
        StampKind::Love,
        StampKind::Smile,
        StampKind::Cry,
        StampKind::Sad,
        StampKind::Shock,
    ];

    /// Wire name of this kind
    pub fn as_str(&self) -> &str {
        match self {
            StampKind::Thanks => "thanks",
            StampKind::Love => "love",
            StampKind::Smile => "smile",
            StampKind::Cry => "cry",
            StampKind::Sad => "sad",
            StampKind::Shock => "shock",
            StampKind::Other(name) => name,
        }
    }

    /// Whether this kind is one of the built-in stamps
    pub fn is_built_in(&self) -> bool {
        !matches!(self, StampKind::Other(_))
    }
}

impl FromStr for StampKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "thanks" => StampKind::Thanks,
            "love" => StampKind::Love,
            "smile" => StampKind::Smile,
            "cry" => StampKind::Cry,
            "sad" => StampKind::Sad,
            "shock" => StampKind::Shock,
            other => StampKind::Other(other.to_string()),
        })
    }
}

impl From<String> for StampKind {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(StampKind::Other(_)) => StampKind::Other(value),
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for StampKind {
    fn from(value: &str) -> Self {
        value.to_string().into()
    }
}

impl From<StampKind> for String {
    fn from(kind: StampKind) -> Self {
        match kind {
            StampKind::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for StampKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

//! Stamp records and input parsing.
//!
//! This module handles:
//! - The stamp kind enumeration
//! - Record and report definitions
//! - Parsing raw JSON documents from suppliers

pub mod input;
pub mod kind;
pub mod schema;

// Re-export main types
pub use input::{parse_stamps, parse_stamps_str};
pub use kind::StampKind;
pub use schema::{AggregatedStamp, Stamp, StampReport};

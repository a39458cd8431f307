//! Mood Stamps
//!
//! Stamp aggregation for an anonymous mood-sharing app: reactions
//! ("stamps") on a post are grouped by kind into display-ready counts.
//!
//! This crate provides the engine and the `mood-stamps` CLI.
//!
//! ## Getting Started
//!
//! ```
//! use mood_stamps::aggregator::aggregate;
//! use mood_stamps::stamp::Stamp;
//!
//! let groups = aggregate(&[
//!     Stamp::new("1", "love", "🥰", "user1"),
//!     Stamp::new("2", "love", "🥰", "user2"),
//! ]);
//! assert_eq!(groups[0].count, 2);
//! ```

pub mod aggregator;
pub mod catalog;
pub mod commands;
pub mod output;
pub mod stamp;
pub mod supplier;
pub mod utils;

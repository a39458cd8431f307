//! Parse raw stamp documents into typed records.
//!
//! Suppliers hand us JSON in a few shapes: a bare array, or an object that
//! wraps the array (possibly several levels deep, as tRPC responses do).

use super::schema::Stamp;
use crate::utils::config::STAMP_FIELD_NAMES;
use crate::utils::error::ParseError;
use log::{debug, warn};
use serde::Deserialize;

/// Parse stamps from a JSON string
///
/// **Public** - convenience wrapper around `parse_stamps`
pub fn parse_stamps_str(raw: &str) -> Result<Vec<Stamp>, ParseError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    parse_stamps(&value)
}

/// Parse stamps from a JSON document
///
/// **Public** - main entry point for input parsing
///
/// # Arguments
/// * `raw` - Array of stamps, or an object wrapping one
///
/// # Returns
/// Stamps in document order. Malformed entries are skipped with a warning.
///
/// # Errors
/// * `ParseError::InvalidFormat` - no stamp array found, or every entry failed
pub fn parse_stamps(raw: &serde_json::Value) -> Result<Vec<Stamp>, ParseError> {
    let array = find_stamp_array(raw).ok_or_else(|| {
        ParseError::InvalidFormat(format!(
            "Expected a stamp array or an object with one of: {}",
            STAMP_FIELD_NAMES.join(", ")
        ))
    })?;

    parse_stamp_array(array)
}

/// Locate the stamp array inside a document
///
/// **Private** - walks known envelope fields depth-first
fn find_stamp_array(value: &serde_json::Value) -> Option<&[serde_json::Value]> {
    match value {
        serde_json::Value::Array(items) => Some(items.as_slice()),
        serde_json::Value::Object(obj) => STAMP_FIELD_NAMES.iter().find_map(|field| {
            let inner = obj.get(*field)?;
            debug!("Descending into envelope field '{}'", field);
            find_stamp_array(inner)
        }),
        _ => None,
    }
}

/// Parse an array of stamp objects
///
/// **Private** - internal parsing logic
fn parse_stamp_array(items: &[serde_json::Value]) -> Result<Vec<Stamp>, ParseError> {
    let mut stamps = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        match Stamp::deserialize(item) {
            Ok(stamp) => stamps.push(stamp),
            Err(e) => warn!("Skipping malformed stamp {}: {}", index, e),
        }
    }

    if stamps.is_empty() && !items.is_empty() {
        return Err(ParseError::InvalidFormat(
            "All stamps failed to parse".to_string(),
        ));
    }

    debug!("Parsed {} of {} stamps", stamps.len(), items.len());

    Ok(stamps)
}

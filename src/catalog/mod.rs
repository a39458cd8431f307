//! Presentation catalog for stamp kinds.
//!
//! Maps each kind to the glyph and label shown to users. The catalog is
//! handed to the presentation layer explicitly; aggregation never reads it.
//!
//! Catalog files are TOML:
//!
//! ```toml
//! [[stamp]]
//! kind = "love"
//! glyph = "🥰"
//! label = "大好きボタン"
//! ```

use crate::stamp::{AggregatedStamp, StampKind};
use crate::utils::error::CatalogError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Display information for one stamp kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub kind: StampKind,
    pub glyph: String,
    pub label: String,
}

impl CatalogEntry {
    pub fn new(kind: StampKind, glyph: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind,
            glyph: glyph.into(),
            label: label.into(),
        }
    }
}

/// Ordered set of catalog entries, one per kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StampCatalog {
    #[serde(rename = "stamp", default)]
    entries: Vec<CatalogEntry>,
}

impl Default for StampCatalog {
    fn default() -> Self {
        Self {
            entries: vec![
                CatalogEntry::new(StampKind::Thanks, "😢", "ありがとうボタン"),
                CatalogEntry::new(StampKind::Love, "🥰", "大好きボタン"),
                CatalogEntry::new(StampKind::Smile, "😁", "笑顔ボタン"),
                CatalogEntry::new(StampKind::Cry, "😭", "号泣ボタン"),
                CatalogEntry::new(StampKind::Sad, "🥺", "悲しいボタン"),
                CatalogEntry::new(StampKind::Shock, "😱", "ショックボタン"),
            ],
        }
    }
}

impl StampCatalog {
    /// Build a catalog, rejecting duplicate kinds
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.kind.as_str()) {
                return Err(CatalogError::DuplicateKind(entry.kind.to_string()));
            }
        }
        Ok(Self { entries })
    }

    /// Parse a catalog from TOML text
    pub fn from_toml_str(raw: &str) -> Result<Self, CatalogError> {
        let parsed: StampCatalog = toml::from_str(raw)?;
        Self::from_entries(parsed.entries)
    }

    /// Load a catalog file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        debug!("Loading stamp catalog from: {}", path.display());

        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&raw)?;

        info!("Loaded {} catalog entries from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Entries in catalog order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lookup(&self, kind: &StampKind) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.kind.as_str() == kind.as_str())
    }

    /// Glyph to show for a group: the catalog's, else the group's first-seen glyph
    pub fn display_glyph<'a>(&'a self, group: &'a AggregatedStamp) -> &'a str {
        self.lookup(&group.kind)
            .map(|e| e.glyph.as_str())
            .or_else(|| group.glyph())
            .unwrap_or("")
    }

    /// Label to show for a group, falling back to the kind name
    pub fn display_label<'a>(&'a self, group: &'a AggregatedStamp) -> &'a str {
        self.lookup(&group.kind)
            .map_or_else(|| group.kind.as_str(), |e| e.label.as_str())
    }
}

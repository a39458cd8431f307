//! Read stamps from a JSON document on disk.

use super::StampSupplier;
use crate::stamp::{parse_stamps, Stamp};
use crate::utils::error::{ParseError, SupplyError};
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Supplier backed by a local JSON file
#[derive(Debug, Clone)]
pub struct FileSupplier {
    path: PathBuf,
}

impl FileSupplier {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StampSupplier for FileSupplier {
    fn fetch_stamps(&self) -> Result<Vec<Stamp>, SupplyError> {
        debug!("Reading stamps from: {}", self.path.display());

        let file = File::open(&self.path)?;
        let raw: serde_json::Value = serde_json::from_reader(BufReader::new(file))
            .map_err(ParseError::from)?;

        Ok(parse_stamps(&raw)?)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

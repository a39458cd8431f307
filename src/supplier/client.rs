//! HTTP client for fetching stamps from the application backend.

use super::StampSupplier;
use crate::stamp::{parse_stamps, Stamp};
use crate::utils::config::DEFAULT_FETCH_TIMEOUT;
use crate::utils::error::SupplyError;
use log::{debug, info};
use reqwest::blocking::Client;
use std::time::Duration;

/// Supplier that GETs a JSON stamp document from a URL
pub struct HttpSupplier {
    client: Client,
    url: String,
}

impl HttpSupplier {
    /// Create a new HTTP supplier
    pub fn new(url: impl Into<String>) -> Result<Self, SupplyError> {
        Self::with_timeout(url, DEFAULT_FETCH_TIMEOUT)
    }

    /// Create a supplier with a custom timeout
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self, SupplyError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SupplyError::RequestFailed)?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl StampSupplier for HttpSupplier {
    fn fetch_stamps(&self) -> Result<Vec<Stamp>, SupplyError> {
        info!("Fetching stamps from: {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .map_err(SupplyError::RequestFailed)?;

        if !response.status().is_success() {
            return Err(SupplyError::InvalidResponse(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().unwrap_or_default()
            )));
        }

        let raw: serde_json::Value = response.json().map_err(SupplyError::RequestFailed)?;
        debug!("Supplier response received");

        Ok(parse_stamps(&raw)?)
    }

    fn describe(&self) -> String {
        format!("url {}", self.url)
    }
}

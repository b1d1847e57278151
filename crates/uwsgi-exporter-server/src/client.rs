//! Upstream stats client.
//!
//! One GET per call. No retry and no timeout beyond the reqwest default; a
//! hung upstream delays the current tick but never corrupts later ones.

use reqwest::Client;

use uwsgi_exporter_core::error::{ExporterError, Result, ScrapeFailure};
use uwsgi_exporter_core::WorkerSnapshot;

#[derive(Clone)]
pub struct StatsClient {
    http: Client,
    url: String,
}

impl StatsClient {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| ExporterError::Internal(format!("http client init failed: {e}")))?;
        Ok(Self { http, url: url.into() })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and decode the stats document.
    pub async fn fetch(&self) -> Result<WorkerSnapshot> {
        let resp = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| ScrapeFailure::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeFailure::Status(status.as_u16()).into());
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| ScrapeFailure::Network(e.to_string()))?;

        WorkerSnapshot::from_json(&body)
    }
}

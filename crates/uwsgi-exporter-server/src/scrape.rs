//! Scrape loop: fetch -> compute -> publish, once per interval.
//!
//! A failed tick is logged and skipped. Gauges and the readiness cell keep
//! their last good values until the next successful tick.

use std::time::Duration;

use tokio::time::sleep;

use uwsgi_exporter_core::error::Result;
use uwsgi_exporter_core::{utilization, UtilizationSample};

use crate::app_state::ExporterState;
use crate::client::StatsClient;

pub struct ScrapeLoop {
    client: StatsClient,
    state: ExporterState,
    interval: Duration,
}

impl ScrapeLoop {
    pub fn new(client: StatsClient, state: ExporterState, interval: Duration) -> Self {
        Self { client, state, interval }
    }

    /// Fetch and reduce one snapshot. Publishes nothing.
    pub async fn sample(&self) -> Result<UtilizationSample> {
        let snapshot = self.client.fetch().await?;
        Ok(utilization::compute(&snapshot))
    }

    /// Run one tick. The only place gauges and the readiness cell are written.
    pub async fn tick(&self) -> Result<UtilizationSample> {
        let sample = self.sample().await?;
        self.state.metrics().publish(&sample);
        self.state.utilization().store(sample.busy_fraction);
        Ok(sample)
    }

    /// Run one tick and log its outcome.
    pub async fn scrape_once(&self) -> Result<UtilizationSample> {
        let outcome = self.tick().await;
        match &outcome {
            Ok(s) => tracing::debug!(
                busy = s.busy_count,
                total = s.total_count,
                fraction = s.busy_fraction,
                "scrape ok"
            ),
            Err(e) => tracing::warn!(
                kind = e.kind().as_str(),
                error = %e,
                "error scraping uWSGI stats"
            ),
        }
        outcome
    }

    /// Tick forever. Returns only when the surrounding task is dropped.
    pub async fn run(self) {
        tracing::info!(
            url = %self.client.url(),
            interval_ms = self.interval.as_millis() as u64,
            "scrape loop started"
        );

        loop {
            let _ = self.scrape_once().await;
            sleep(self.interval).await;
        }
    }
}

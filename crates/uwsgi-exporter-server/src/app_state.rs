//! Shared state for the exporter listeners and the scrape loop.
//!
//! The scrape loop is the only writer. Both listeners only read.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use uwsgi_exporter_core::error::Result;
use uwsgi_exporter_core::utilization;

use crate::obs::metrics::ExporterMetrics;

/// Latest busy fraction, stored as `f64` bits so readers never see a torn
/// value. Starts at 0.0 (ready) until the first successful scrape.
#[derive(Clone, Default)]
pub struct UtilizationCell {
    bits: Arc<AtomicU64>,
}

impl UtilizationCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Acquire))
    }

    pub fn store(&self, busy_fraction: f64) {
        self.bits.store(busy_fraction.to_bits(), Ordering::Release);
    }

    pub fn is_saturated(&self) -> bool {
        utilization::is_saturated(self.load())
    }
}

#[derive(Clone)]
pub struct ExporterState {
    metrics: Arc<ExporterMetrics>,
    utilization: UtilizationCell,
}

impl ExporterState {
    /// Build application state.
    /// Returns Result so main can handle registry errors without panicking.
    pub fn new() -> Result<Self> {
        Ok(Self {
            metrics: Arc::new(ExporterMetrics::new()?),
            utilization: UtilizationCell::new(),
        })
    }

    pub fn metrics(&self) -> &ExporterMetrics {
        &self.metrics
    }

    pub fn utilization(&self) -> &UtilizationCell {
        &self.utilization
    }
}

//! Exporter gauges.
//!
//! `uwsgi_fraction_workers_busy` is published as a raw fraction in `[0, 1]`,
//! not as a percentage.

use prometheus::{Encoder, Gauge, IntGauge, Opts, Registry, TextEncoder};

use uwsgi_exporter_core::error::{ExporterError, Result};
use uwsgi_exporter_core::UtilizationSample;

pub const BUSY_WORKERS: &str = "uwsgi_busy_workers";
pub const FRACTION_WORKERS_BUSY: &str = "uwsgi_fraction_workers_busy";
pub const TOTAL_WORKERS: &str = "uwsgi_total_workers";

pub struct ExporterMetrics {
    registry: Registry,
    busy_workers: IntGauge,
    fraction_workers_busy: Gauge,
    total_workers: IntGauge,
}

impl ExporterMetrics {
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        let busy_workers = IntGauge::with_opts(Opts::new(BUSY_WORKERS, "Number of busy uWSGI workers"))
            .map_err(registry_err)?;
        registry.register(Box::new(busy_workers.clone())).map_err(registry_err)?;

        let fraction_workers_busy = Gauge::with_opts(Opts::new(
            FRACTION_WORKERS_BUSY,
            "Fraction of uWSGI workers that are busy (0-1)",
        ))
        .map_err(registry_err)?;
        registry
            .register(Box::new(fraction_workers_busy.clone()))
            .map_err(registry_err)?;

        let total_workers = IntGauge::with_opts(Opts::new(TOTAL_WORKERS, "Number of uWSGI workers reported"))
            .map_err(registry_err)?;
        registry.register(Box::new(total_workers.clone())).map_err(registry_err)?;

        Ok(Self { registry, busy_workers, fraction_workers_busy, total_workers })
    }

    /// Overwrite all gauges with the latest sample.
    pub fn publish(&self, sample: &UtilizationSample) {
        self.busy_workers.set(clamp_i64(sample.busy_count));
        self.fraction_workers_busy.set(sample.busy_fraction);
        self.total_workers.set(clamp_i64(sample.total_count));
    }

    pub fn busy_workers(&self) -> i64 {
        self.busy_workers.get()
    }

    pub fn fraction_workers_busy(&self) -> f64 {
        self.fraction_workers_busy.get()
    }

    pub fn total_workers(&self) -> i64 {
        self.total_workers.get()
    }

    /// Render in Prometheus text exposition format.
    pub fn render(&self) -> Result<String> {
        let mut buf = Vec::new();
        TextEncoder::new()
            .encode(&self.registry.gather(), &mut buf)
            .map_err(registry_err)?;
        String::from_utf8(buf).map_err(|e| ExporterError::Internal(format!("metrics not utf-8: {e}")))
    }
}

fn clamp_i64(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}

fn registry_err(e: prometheus::Error) -> ExporterError {
    ExporterError::Internal(format!("prometheus: {e}"))
}

//! Prometheus exposition for the exporter.
//!
//! Gauges live in a process-owned `prometheus::Registry` and are rendered by
//! the metrics listener on every scrape.

pub mod metrics;

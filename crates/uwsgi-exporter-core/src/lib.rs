//! uwsgi-exporter core: stats wire model, utilization math, and error types.
//!
//! This crate carries no transport or runtime dependencies; the server crate
//! owns HTTP, timing, and metric exposition.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here so malformed
//! upstream documents always surface as `ExporterError`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod stats;
pub mod utilization;

pub use error::{ErrorKind, ExporterError, Result, ScrapeFailure};
pub use stats::{WorkerRecord, WorkerSnapshot, WorkerStatus};
pub use utilization::{compute, UtilizationSample};

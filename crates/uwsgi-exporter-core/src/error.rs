//! Shared error type across uwsgi-exporter crates.

use thiserror::Error;

/// Stable error codes, used as a structured log field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Upstream could not be reached or the body could not be read.
    Network,
    /// Upstream answered with a non-2xx status.
    UpstreamStatus,
    /// Upstream body was not the expected stats document.
    Malformed,
    /// Invalid configuration.
    Config,
    /// Internal error (bind failures, registry errors).
    Internal,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Network => "NETWORK",
            ErrorKind::UpstreamStatus => "UPSTREAM_STATUS",
            ErrorKind::Malformed => "MALFORMED",
            ErrorKind::Config => "CONFIG",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

/// Why a single scrape tick produced no sample.
#[derive(Debug, Error)]
pub enum ScrapeFailure {
    #[error("network: {0}")]
    Network(String),
    #[error("upstream returned HTTP {0}")]
    Status(u16),
    #[error("malformed stats body: {0}")]
    Malformed(String),
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ExporterError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum ExporterError {
    #[error("scrape failed: {0}")]
    Scrape(#[from] ScrapeFailure),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl ExporterError {
    /// Map to a stable code.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExporterError::Scrape(ScrapeFailure::Network(_)) => ErrorKind::Network,
            ExporterError::Scrape(ScrapeFailure::Status(_)) => ErrorKind::UpstreamStatus,
            ExporterError::Scrape(ScrapeFailure::Malformed(_)) => ErrorKind::Malformed,
            ExporterError::Config(_) => ErrorKind::Config,
            ExporterError::Internal(_) => ErrorKind::Internal,
        }
    }

    pub fn is_scrape_failure(&self) -> bool {
        matches!(self, ExporterError::Scrape(_))
    }
}

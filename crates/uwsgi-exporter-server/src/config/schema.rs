use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use reqwest::Url;
use uwsgi_exporter_core::error::{ExporterError, Result};

#[derive(Debug, Clone)]
pub struct ExporterConfig {
    /// Upstream uWSGI stats endpoint.
    pub stats_url: String,
    /// Tick period in seconds.
    pub scrape_interval_secs: f64,
    pub metrics_port: u16,
    pub readiness_port: u16,
    pub listen_host: IpAddr,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            stats_url: default_stats_url(),
            scrape_interval_secs: default_scrape_interval_secs(),
            metrics_port: default_metrics_port(),
            readiness_port: default_readiness_port(),
            listen_host: default_listen_host(),
        }
    }
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.stats_url)
            .map_err(|e| ExporterError::Config(format!("UWSGI_STATS_URL is not a valid url: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ExporterError::Config(
                "UWSGI_STATS_URL must use http or https".into(),
            ));
        }

        if !self.scrape_interval_secs.is_finite() || self.scrape_interval_secs <= 0.0 {
            return Err(ExporterError::Config(
                "SCRAPE_INTERVAL must be a positive number of seconds".into(),
            ));
        }
        Duration::try_from_secs_f64(self.scrape_interval_secs)
            .map_err(|e| ExporterError::Config(format!("SCRAPE_INTERVAL out of range: {e}")))?;

        if self.metrics_port == self.readiness_port {
            return Err(ExporterError::Config(
                "METRICS_PORT and READINESS_PORT must differ".into(),
            ));
        }

        Ok(())
    }

    /// Saturates instead of panicking on a config that skipped `validate()`.
    pub fn scrape_interval(&self) -> Duration {
        Duration::try_from_secs_f64(self.scrape_interval_secs).unwrap_or(Duration::MAX)
    }

    pub fn metrics_addr(&self) -> SocketAddr {
        SocketAddr::new(self.listen_host, self.metrics_port)
    }

    pub fn readiness_addr(&self) -> SocketAddr {
        SocketAddr::new(self.listen_host, self.readiness_port)
    }
}

pub(crate) fn default_stats_url() -> String {
    "http://127.0.0.1:9192".into()
}
pub(crate) fn default_scrape_interval_secs() -> f64 {
    5.0
}
pub(crate) fn default_metrics_port() -> u16 {
    9101
}
pub(crate) fn default_readiness_port() -> u16 {
    8080
}
pub(crate) fn default_listen_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

//! Exporter config loader (environment variables, strict parsing).
//!
//! Every variable is optional. A variable that is set but does not parse is a
//! startup error rather than a silent fallback to the default.

pub mod schema;

use std::str::FromStr;

use uwsgi_exporter_core::error::{ExporterError, Result};

pub use schema::ExporterConfig;

pub const ENV_STATS_URL: &str = "UWSGI_STATS_URL";
pub const ENV_SCRAPE_INTERVAL: &str = "SCRAPE_INTERVAL";
pub const ENV_METRICS_PORT: &str = "METRICS_PORT";
pub const ENV_READINESS_PORT: &str = "READINESS_PORT";
pub const ENV_LISTEN_HOST: &str = "LISTEN_HOST";

pub fn load_from_env() -> Result<ExporterConfig> {
    load_from_lookup(|key| std::env::var(key).ok())
}

pub fn load_from_lookup<F>(lookup: F) -> Result<ExporterConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let cfg = ExporterConfig {
        stats_url: lookup(ENV_STATS_URL)
            .map(|s| s.trim().to_string())
            .unwrap_or_else(schema::default_stats_url),
        scrape_interval_secs: parse_or(&lookup, ENV_SCRAPE_INTERVAL, schema::default_scrape_interval_secs)?,
        metrics_port: parse_or(&lookup, ENV_METRICS_PORT, schema::default_metrics_port)?,
        readiness_port: parse_or(&lookup, ENV_READINESS_PORT, schema::default_readiness_port)?,
        listen_host: parse_or(&lookup, ENV_LISTEN_HOST, schema::default_listen_host)?,
    };
    cfg.validate()?;
    Ok(cfg)
}

fn parse_or<F, T>(lookup: &F, key: &str, default: fn() -> T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ExporterError::Config(format!("{key}={raw:?}: {e}"))),
        None => Ok(default()),
    }
}

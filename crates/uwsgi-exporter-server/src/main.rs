//! uwsgi-exporter
//!
//! - polls the uWSGI stats server every `SCRAPE_INTERVAL` seconds
//! - publishes busy/total worker gauges on `METRICS_PORT`
//! - answers readiness on `READINESS_PORT` (503 once every worker is busy)

use std::process::ExitCode;

use tokio::sync::watch;
use tracing_subscriber::{fmt, EnvFilter};

use uwsgi_exporter_core::error::Result;
use uwsgi_exporter_server::{
    app_state::ExporterState, bind, client::StatsClient, config, obs::metrics, router,
    scrape::ScrapeLoop, serve, stop_requested, supervise,
};

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(kind = e.kind().as_str(), error = %e, "uwsgi-exporter failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cfg = config::load_from_env()?;
    let state = ExporterState::new()?;
    let client = StatsClient::new(cfg.stats_url.clone())?;

    let metrics_addr = cfg.metrics_addr();
    let readiness_addr = cfg.readiness_addr();
    let metrics_listener = bind(metrics_addr).await?;
    let readiness_listener = bind(readiness_addr).await?;

    tracing::info!(
        stats_url = %cfg.stats_url,
        interval_secs = cfg.scrape_interval_secs,
        %metrics_addr,
        %readiness_addr,
        "uwsgi-exporter starting"
    );
    tracing::info!(
        busy = metrics::BUSY_WORKERS,
        fraction = metrics::FRACTION_WORKERS_BUSY,
        total = metrics::TOTAL_WORKERS,
        "publishing gauges; busy fraction is a raw ratio in [0, 1]"
    );

    let (stop_tx, stop_rx) = watch::channel(false);

    let metrics_srv = tokio::spawn(serve(
        metrics_listener,
        router::build_metrics_router(state.clone()),
        stop_requested(stop_rx.clone()),
    ));
    let readiness_srv = tokio::spawn(serve(
        readiness_listener,
        router::build_readiness_router(state.clone()),
        stop_requested(stop_rx),
    ));
    let scrape = tokio::spawn(ScrapeLoop::new(client, state, cfg.scrape_interval()).run());

    let outcome = supervise(metrics_srv, readiness_srv, shutdown_signal(), stop_tx).await;
    scrape.abort();
    outcome
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

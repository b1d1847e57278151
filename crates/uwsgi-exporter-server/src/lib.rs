//! uwsgi-exporter server library entry.
//!
//! Wires the stats client, scrape loop, Prometheus gauges, and the metrics and
//! readiness listeners. Consumed by the binary (`main.rs`) and by integration
//! tests.

pub mod app_state;
pub mod client;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod scrape;

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::{JoinError, JoinHandle};

use uwsgi_exporter_core::error::{ExporterError, Result};

/// Bind a listener, reporting the address in the error.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|e| ExporterError::Internal(format!("bind {addr} failed: {e}")))
}

/// Serve `app` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ExporterError::Internal(format!("server failed: {e}")))
}

/// Resolves once `rx` observes `true` or its sender is dropped.
pub async fn stop_requested(mut rx: watch::Receiver<bool>) {
    let _ = rx.wait_for(|stop| *stop).await;
}

/// Wait for `shutdown` or for either listener task to exit, whichever is first.
///
/// On shutdown, `stop` is raised and both listeners are drained. A listener
/// that exits before shutdown is an error even if it returned `Ok`; the other
/// listener is stopped before returning.
pub async fn supervise<F>(
    mut metrics: JoinHandle<Result<()>>,
    mut readiness: JoinHandle<Result<()>>,
    shutdown: F,
    stop: watch::Sender<bool>,
) -> Result<()>
where
    F: Future<Output = ()>,
{
    tokio::select! {
        _ = shutdown => {
            tracing::info!("shutdown signal received");
            let _ = stop.send(true);
            listener_exit("metrics", metrics.await)?;
            listener_exit("readiness", readiness.await)
        }
        r = &mut metrics => {
            let _ = stop.send(true);
            let _ = readiness.await;
            stopped_early("metrics", r)
        }
        r = &mut readiness => {
            let _ = stop.send(true);
            let _ = metrics.await;
            stopped_early("readiness", r)
        }
    }
}

fn listener_exit(name: &str, r: std::result::Result<Result<()>, JoinError>) -> Result<()> {
    r.map_err(|e| ExporterError::Internal(format!("{name} listener task failed: {e}")))?
}

fn stopped_early(name: &str, r: std::result::Result<Result<()>, JoinError>) -> Result<()> {
    listener_exit(name, r)?;
    Err(ExporterError::Internal(format!("{name} listener stopped unexpectedly")))
}

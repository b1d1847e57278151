#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::watch;

use uwsgi_exporter_core::error::{ErrorKind, ExporterError};
use uwsgi_exporter_server::{
    app_state::ExporterState, router, serve, stop_requested, supervise,
};

async fn listener() -> TcpListener {
    TcpListener::bind("127.0.0.1:0").await.unwrap()
}

#[tokio::test]
async fn shutdown_drains_both_listeners() {
    let state = ExporterState::new().unwrap();
    let (stop_tx, stop_rx) = watch::channel(false);
    let metrics = tokio::spawn(serve(
        listener().await,
        router::build_metrics_router(state.clone()),
        stop_requested(stop_rx.clone()),
    ));
    let readiness = tokio::spawn(serve(
        listener().await,
        router::build_readiness_router(state),
        stop_requested(stop_rx),
    ));

    let res = tokio::time::timeout(
        Duration::from_secs(5),
        supervise(metrics, readiness, async {}, stop_tx),
    )
    .await
    .expect("supervise must return after shutdown");
    assert!(res.is_ok());
}

#[tokio::test]
async fn failing_listener_stops_the_process() {
    let state = ExporterState::new().unwrap();
    let (stop_tx, stop_rx) = watch::channel(false);
    let metrics = tokio::spawn(async { Err::<(), _>(ExporterError::Internal("server failed: boom".into())) });
    let readiness = tokio::spawn(serve(
        listener().await,
        router::build_readiness_router(state),
        stop_requested(stop_rx),
    ));

    let res = tokio::time::timeout(
        Duration::from_secs(5),
        supervise(metrics, readiness, std::future::pending(), stop_tx),
    )
    .await
    .expect("supervise must not wait for a shutdown signal");
    let err = res.expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Internal);
    assert!(err.to_string().contains("boom"));
}

#[tokio::test]
async fn listener_exiting_cleanly_before_shutdown_is_an_error() {
    let state = ExporterState::new().unwrap();
    let (stop_tx, stop_rx) = watch::channel(false);
    let metrics = tokio::spawn(serve(
        listener().await,
        router::build_metrics_router(state),
        stop_requested(stop_rx),
    ));
    let readiness = tokio::spawn(async { Ok::<(), ExporterError>(()) });

    let err = tokio::time::timeout(
        Duration::from_secs(5),
        supervise(metrics, readiness, std::future::pending(), stop_tx),
    )
    .await
    .unwrap()
    .expect_err("must fail");
    assert!(err.to_string().contains("readiness listener stopped unexpectedly"));
}

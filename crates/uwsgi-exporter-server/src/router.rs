//! Axum router wiring for the two listeners.

use axum::{
    routing::{any, get},
    Router,
};

use crate::{app_state::ExporterState, ops};

pub fn build_metrics_router(state: ExporterState) -> Router {
    Router::new()
        .route("/healthz", get(ops::healthz))
        .route("/metrics", any(ops::metrics))
        .fallback(ops::metrics)
        .with_state(state)
}

/// Every path and method answers with the readiness decision.
pub fn build_readiness_router(state: ExporterState) -> Router {
    Router::new().fallback(ops::readiness).with_state(state)
}

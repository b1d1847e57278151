//! Operational HTTP endpoints.
//!
//! Metrics listener:
//! - `/healthz` : liveness
//! - anything else : Prometheus text format
//!
//! Readiness listener:
//! - any path, any method : 200 `OK`, or 503 once every worker is busy

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::app_state::ExporterState;

pub const READY_BODY: &str = "OK";
pub const SATURATED_BODY: &str = "All uWSGI workers are busy";

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn readiness(State(state): State<ExporterState>) -> impl IntoResponse {
    if state.utilization().is_saturated() {
        (StatusCode::SERVICE_UNAVAILABLE, SATURATED_BODY)
    } else {
        (StatusCode::OK, READY_BODY)
    }
}

pub async fn metrics(State(state): State<ExporterState>) -> Response {
    match state.metrics().render() {
        Ok(body) => (
            StatusCode::OK,
            [(axum::http::header::CONTENT_TYPE, prometheus::TEXT_FORMAT)],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "metrics render failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "metrics unavailable").into_response()
        }
    }
}

use crate::infra::AppState;
use crate::verses::VerseCycle;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use decision_coach::workflows::decision::{decision_router, DecisionCoach};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub(crate) struct VerseResponse {
    pub(crate) reference: &'static str,
    pub(crate) text: &'static str,
    pub(crate) index: usize,
    pub(crate) next_index: usize,
}

pub(crate) fn with_decision_routes(coach: Arc<DecisionCoach>) -> axum::Router {
    decision_router(coach)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/verses/:index", axum::routing::get(verse_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Any index is accepted; it wraps around the verse list.
pub(crate) async fn verse_endpoint(Path(index): Path<usize>) -> Json<VerseResponse> {
    let cycle = VerseCycle::at(index);
    let verse = cycle.current();
    Json(VerseResponse {
        reference: verse.reference,
        text: verse.text,
        index: cycle.index(),
        next_index: cycle.next().index(),
    })
}

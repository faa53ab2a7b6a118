use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::Local;
use serde_json::json;

use super::coach::{BucketPlanRequest, DecisionCoach, DecisionError, DecisionRequest};
use super::domain::HeartCheckAnswers;

/// Router builder exposing the coach as JSON endpoints.
pub fn decision_router(coach: Arc<DecisionCoach>) -> Router {
    Router::new()
        .route("/api/v1/decision/evaluate", post(evaluate_handler))
        .route("/api/v1/decision/buckets", post(buckets_handler))
        .route("/api/v1/decision/heart-check", post(heart_check_handler))
        .with_state(coach)
}

pub(crate) async fn evaluate_handler(
    State(coach): State<Arc<DecisionCoach>>,
    Json(request): Json<DecisionRequest>,
) -> Response {
    let today = Local::now().date_naive();
    match coach.evaluate(request, today) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(error) => validation_response(error),
    }
}

pub(crate) async fn buckets_handler(
    State(coach): State<Arc<DecisionCoach>>,
    Json(request): Json<BucketPlanRequest>,
) -> Response {
    match coach.plan_buckets(&request) {
        Ok(plan) => (StatusCode::OK, Json(plan)).into_response(),
        Err(error) => validation_response(error),
    }
}

pub(crate) async fn heart_check_handler(
    State(coach): State<Arc<DecisionCoach>>,
    Json(answers): Json<HeartCheckAnswers>,
) -> Response {
    let view = coach.check_heart(&answers);
    (StatusCode::OK, Json(view)).into_response()
}

fn validation_response(error: DecisionError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
}

use crate::infra::AppState;
use archetype_quiz::error::AppError;
use archetype_quiz::quiz::{AnswerSet, ScoringEngine};
use archetype_quiz::submission::{submission_router, ContactStore, SubmissionGateway};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_quiz_routes<S>(gateway: Arc<SubmissionGateway<S>>) -> axum::Router
where
    S: ContactStore + 'static,
{
    submission_router(gateway)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/quiz/score", axum::routing::post(score_endpoint))
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

/// Stateless preview of a result: scores and classifies an answer vector
/// without touching the contact list.
#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    pub(crate) answers: Vec<u8>,
}

pub(crate) async fn score_endpoint(
    Json(request): Json<ScoreRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let answers =
        AnswerSet::new(request.answers).map_err(|err| AppError::Submission(err.into()))?;
    let outcome = ScoringEngine::standard().evaluate(&answers);

    Ok(Json(json!({
        "scores": outcome.scores,
        "profile": outcome.profile,
    })))
}

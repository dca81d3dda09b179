use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::quiz::QUESTION_COUNT;
use crate::submission::gateway::SubmissionGateway;
use crate::submission::router::{
    submission_router, webinar_handler, SubmissionRequest, WebinarInterestRequest,
};

fn request_body(answers: Option<Vec<u8>>) -> SubmissionRequest {
    SubmissionRequest {
        first_name: "Camille".to_string(),
        email: "camille@example.com".to_string(),
        consent: true,
        answers,
        webinar_interest: false,
    }
}

#[tokio::test]
async fn submit_route_accepts_full_payloads() {
    let store = Arc::new(MemoryStore::default());
    let router = submission_router(Arc::new(SubmissionGateway::new(store.clone())));

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/quiz/submissions")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&request_body(Some(vec![3; QUESTION_COUNT]))).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("success"), Some(&json!(true)));
    assert_eq!(
        payload.pointer("/receipt/scores/architect"),
        Some(&json!(18))
    );
    assert_eq!(
        payload.pointer("/receipt/profile/kind"),
        Some(&json!("combined"))
    );
    assert_eq!(store.rows().len(), 1);
}

#[tokio::test]
async fn submit_route_accepts_partial_payloads() {
    let store = Arc::new(MemoryStore::default());
    let router = submission_router(Arc::new(SubmissionGateway::new(store.clone())));

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/quiz/submissions")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&json!({
                        "firstName": "Camille",
                        "email": "camille@example.com",
                        "consent": true,
                        "webinarInterest": true,
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("success"), Some(&json!(true)));
    assert!(payload.pointer("/receipt/profile").is_none());

    let rows = store.rows();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].answers.is_empty());
    assert!(rows[0].webinar_interest);
}

#[tokio::test]
async fn submit_route_rejects_wrong_answer_count() {
    let store = Arc::new(MemoryStore::default());
    let router = submission_router(Arc::new(SubmissionGateway::new(store.clone())));

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/quiz/submissions")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&request_body(Some(vec![3; 26]))).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("success"), Some(&json!(false)));
    assert_eq!(store.append_calls(), 0);
}

#[tokio::test]
async fn submit_route_maps_store_failures_to_bad_gateway() {
    let router = submission_router(Arc::new(SubmissionGateway::new(Arc::new(AuthFailingStore))));

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/quiz/submissions")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&request_body(Some(vec![3; QUESTION_COUNT]))).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("success"), Some(&json!(false)));
    assert!(payload
        .get("error")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .contains("authentication"));
}

#[tokio::test]
async fn webinar_handler_returns_not_found_for_unknown_email() {
    let gateway = Arc::new(SubmissionGateway::new(Arc::new(MemoryStore::default())));

    let response = webinar_handler::<MemoryStore>(
        State(gateway),
        axum::Json(WebinarInterestRequest {
            email: "ghost@example.com".to_string(),
            webinar_interest: true,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("success"), Some(&json!(false)));
}

#[tokio::test]
async fn webinar_route_updates_existing_row() {
    let store = Arc::new(MemoryStore::default());
    let gateway = Arc::new(SubmissionGateway::new(store.clone()));
    let router = submission_router(gateway.clone());

    let submit = router
        .clone()
        .oneshot(
            axum::http::Request::post("/api/v1/quiz/submissions")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&request_body(Some(vec![3; QUESTION_COUNT]))).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("submit executes");
    assert_eq!(submit.status(), StatusCode::OK);

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/quiz/webinar-interest")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&json!({
                        "email": "camille@example.com",
                        "webinarInterest": true,
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("update executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("success"), Some(&json!(true)));
    assert!(store.rows()[0].webinar_interest);
}

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{LeadIdentity, QuizSubmission};
use super::gateway::{SubmissionError, SubmissionGateway};
use super::session::SubmissionSession;
use super::store::{ContactStore, ContactStoreError};

/// Router builder exposing the capture and webinar-interest endpoints.
pub fn submission_router<S>(gateway: Arc<SubmissionGateway<S>>) -> Router
where
    S: ContactStore + 'static,
{
    Router::new()
        .route("/api/v1/quiz/submissions", post(submit_handler::<S>))
        .route(
            "/api/v1/quiz/webinar-interest",
            post(webinar_handler::<S>),
        )
        .with_state(gateway)
}

/// Wire shape of a capture request. `answers` is present only after the
/// questionnaire was completed; its length must match the 24-statement
/// contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub first_name: String,
    pub email: String,
    pub consent: bool,
    #[serde(default)]
    pub answers: Option<Vec<u8>>,
    #[serde(default)]
    pub webinar_interest: bool,
}

impl SubmissionRequest {
    pub fn into_submission(self) -> QuizSubmission {
        let identity = LeadIdentity {
            first_name: self.first_name,
            email: self.email,
            consent: self.consent,
        };

        match self.answers {
            Some(answers) => QuizSubmission::Full {
                identity,
                webinar_interest: self.webinar_interest,
                answers,
            },
            None => QuizSubmission::Partial {
                identity,
                webinar_interest: self.webinar_interest,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebinarInterestRequest {
    pub email: String,
    pub webinar_interest: bool,
}

pub(crate) async fn submit_handler<S>(
    State(gateway): State<Arc<SubmissionGateway<S>>>,
    axum::Json(request): axum::Json<SubmissionRequest>,
) -> Response
where
    S: ContactStore + 'static,
{
    let mut session = SubmissionSession::new(request.into_submission());

    match gateway.submit(&mut session) {
        Ok(receipt) => {
            let payload = json!({ "success": true, "receipt": receipt });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => failure_response(err),
    }
}

pub(crate) async fn webinar_handler<S>(
    State(gateway): State<Arc<SubmissionGateway<S>>>,
    axum::Json(request): axum::Json<WebinarInterestRequest>,
) -> Response
where
    S: ContactStore + 'static,
{
    match gateway.update_webinar_interest(&request.email, request.webinar_interest) {
        Ok(()) => {
            let payload = json!({
                "success": true,
                "email": request.email,
                "webinarInterest": request.webinar_interest,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => failure_response(err),
    }
}

fn failure_response(err: SubmissionError) -> Response {
    let status = match &err {
        SubmissionError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        SubmissionError::InFlight | SubmissionError::AlreadySubmitted => StatusCode::CONFLICT,
        SubmissionError::Store(ContactStoreError::NotFound) => StatusCode::NOT_FOUND,
        SubmissionError::Store(_) => StatusCode::BAD_GATEWAY,
    };

    let payload = json!({ "success": false, "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}

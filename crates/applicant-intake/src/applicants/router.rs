use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use super::domain::{ApplicantCreatedView, ApplicantId, ApplicantSubmission};
use super::service::{IntakeError, IntakeService};
use super::store::{ApplicantStore, StoreError};

/// Routes for the applicant intake surface.
pub fn applicant_router<S>(service: Arc<IntakeService<S>>) -> Router
where
    S: ApplicantStore + 'static,
{
    Router::new()
        .route("/applicants", post(create_handler::<S>))
        .route("/applicants/:applicant_id", get(fetch_handler::<S>))
        .with_state(service)
}

pub(crate) async fn create_handler<S>(
    State(service): State<Arc<IntakeService<S>>>,
    submission: Result<Json<ApplicantSubmission>, JsonRejection>,
) -> Response
where
    S: ApplicantStore + 'static,
{
    // Wrong-typed or malformed bodies map to 400, not the extractor's
    // default statuses.
    let Json(submission) = match submission {
        Ok(body) => body,
        Err(rejection) => {
            let payload = json!({
                "error": rejection.body_text(),
            });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    match service.create(submission) {
        Ok(applicant) => {
            let view = ApplicantCreatedView { id: applicant.id };
            (StatusCode::CREATED, Json(view)).into_response()
        }
        Err(IntakeError::Validation(rejection)) => {
            let payload = json!({
                "error": rejection.to_string(),
                "violations": rejection.violations,
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Err(IntakeError::Store(StoreError::Conflict)) => {
            let payload = json!({
                "error": "applicant already exists",
            });
            (StatusCode::CONFLICT, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn fetch_handler<S>(
    State(service): State<Arc<IntakeService<S>>>,
    Path(applicant_id): Path<String>,
) -> Response
where
    S: ApplicantStore + 'static,
{
    let id = ApplicantId(applicant_id);
    match service.get(&id) {
        Ok(applicant) => (StatusCode::OK, Json(applicant.view())).into_response(),
        Err(IntakeError::Store(StoreError::NotFound)) => {
            let payload = json!({
                "error": "applicant not found",
                "id": id.0,
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

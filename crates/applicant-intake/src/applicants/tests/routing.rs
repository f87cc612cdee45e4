use super::common::*;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::applicants::{applicant_router, IntakeService};

#[tokio::test]
async fn create_handler_returns_conflict_on_duplicate() {
    let service = Arc::new(IntakeService::new(Arc::new(ConflictStore)));

    let response = crate::applicants::router::create_handler::<ConflictStore>(
        State(service),
        Ok(axum::Json(submission())),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn create_handler_returns_internal_error_on_store_failure() {
    let service = Arc::new(IntakeService::new(Arc::new(UnavailableStore)));

    let response = crate::applicants::router::create_handler::<UnavailableStore>(
        State(service),
        Ok(axum::Json(submission())),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn create_route_returns_created_with_id() {
    let (service, _) = build_service();
    let router = intake_router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::post("/applicants")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&submission()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert!(payload.get("id").and_then(serde_json::Value::as_str).is_some());
}

#[tokio::test]
async fn create_route_rejects_broken_submissions() {
    let (service, _) = build_service();
    let router = intake_router_with_service(service);

    let body = json!({
        "email": "invalid-email",
        "firstName": "John",
        "lastName": "Doe",
    });
    let response = router
        .oneshot(
            axum::http::Request::post("/applicants")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload["violations"][0]["field"],
        json!("email"),
        "violations should name the offending field"
    );
}

#[tokio::test]
async fn create_route_rejects_wrong_typed_fields() {
    let (service, store) = build_service();
    let router = intake_router_with_service(service);

    let body = json!({
        "email": 123,
        "firstName": "John",
        "lastName": "Doe",
    });
    let response = router
        .oneshot(
            axum::http::Request::post("/applicants")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(serde_json::Value::as_str)
        .is_some());
    assert_eq!(store.len(), 0, "unbindable bodies must not reach the store");
}

#[tokio::test]
async fn fetch_route_returns_stored_applicants() {
    let (service, _) = build_service();
    let service = Arc::new(service);
    let applicant = service
        .create(submission_with_comment("I am a comment"))
        .expect("submission is stored");
    let router = applicant_router(service.clone());

    let response = router
        .oneshot(
            axum::http::Request::get(format!("/applicants/{}", applicant.id.0))
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["id"], json!(applicant.id.0));
    assert_eq!(payload["firstName"], json!("John"));
    assert_eq!(payload["comment"], json!("I am a comment"));
}

#[tokio::test]
async fn fetch_route_returns_not_found_for_unknown_ids() {
    let (service, _) = build_service();
    let router = intake_router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::get("/applicants/applicant-999999")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload["id"], json!("applicant-999999"));
}

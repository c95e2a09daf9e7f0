use super::common::*;
use axum::body::{to_bytes, Body};
use axum::extract::{Query, State};
use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use crate::tracking::router::{listing_handler, tracker_router, ListingParams};
use crate::tracking::service::TrackerService;
use crate::tracking::source::{ApplicationSnapshot, ApplicationSource, SourceError};
use crate::tracking::triage::DeadlineTriage;

struct MalformedSource;

impl ApplicationSource for MalformedSource {
    fn snapshot(&self) -> Result<ApplicationSnapshot, SourceError> {
        Err(SourceError::Malformed("expected an object".to_string()))
    }
}

fn scenario_service() -> Arc<TrackerService<ApplicationSnapshot>> {
    Arc::new(TrackerService::new(
        Arc::new(ApplicationSnapshot::from_applications(dashboard_scenario())),
        DeadlineTriage::default(),
    ))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn listing_handler_defaults_to_every_application() {
    let response = listing_handler::<ApplicationSnapshot>(
        State(scenario_service()),
        Query(ListingParams::default()),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total"], 3);
    assert_eq!(body["jobs"][0]["id"], "lux-job");
    assert_eq!(body["jobs"][1]["id"], "unlinked-draft");
    assert_eq!(body["education"][0]["id"], "de-uni");
}

#[tokio::test]
async fn listing_handler_rejects_unknown_status() {
    let params = ListingParams {
        status: Some("withdrawn".to_string()),
        ..ListingParams::default()
    };
    let response = listing_handler::<ApplicationSnapshot>(State(scenario_service()), Query(params))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        "invalid request: unknown application status 'withdrawn'"
    );
}

#[tokio::test]
async fn router_filters_by_type_query_parameter() {
    let response = tracker_router(scenario_service())
        .oneshot(
            Request::builder()
                .uri("/api/v1/applications?type=university&sort=date-oldest")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total"], 1);
    assert!(body["jobs"].as_array().expect("jobs array").is_empty());
    assert_eq!(body["query"]["type"], "UNIVERSITY");
    assert_eq!(body["query"]["sort"], "DATE_OLDEST");
}

#[tokio::test]
async fn router_serves_the_dashboard() {
    let response = tracker_router(scenario_service())
        .oneshot(
            Request::builder()
                .uri("/api/v1/dashboard")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["summary"]["applications"], 3);
    assert_eq!(body["statuses"]["unknown"], 1);
    assert!(body.get("consistency_notes").is_none());
}

#[tokio::test]
async fn malformed_source_is_service_unavailable() {
    let service = Arc::new(TrackerService::new(
        Arc::new(MalformedSource),
        DeadlineTriage::default(),
    ));
    let response = tracker_router(service)
        .oneshot(
            Request::builder()
                .uri("/api/v1/dashboard")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

//! Tests for routing and the OpenAPI document.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use drishti::{model::zone::Zone, server::router::routes};
use tower::ServiceExt;

use super::*;

async fn get(path: &str) -> axum::response::Response {
    let app = routes(&test_config()).with_state(app_state());

    app.oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Tests that zones serialize with camelCase fields.
///
/// Expected: 200 OK with five zones decoded from the body
#[tokio::test]
async fn zones_route_returns_json() -> Result<(), TestError> {
    let resp = get("/api/zones").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let zones: Vec<Zone> = serde_json::from_slice(&body)?;
    assert_eq!(zones.len(), 5);

    let raw: serde_json::Value = serde_json::from_slice(&body)?;
    assert!(raw[0].get("crowdDensity").is_some());

    Ok(())
}

/// Tests the zone details route for an unknown zone.
///
/// Expected: 404 Not Found with an error body
#[tokio::test]
async fn unknown_zone_route_is_not_found() -> Result<(), TestError> {
    let resp = get("/api/zones/zone-99").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let raw: serde_json::Value = serde_json::from_slice(&body)?;
    assert_eq!(raw["error"], "Failed to fetch zone details");

    Ok(())
}

/// Tests the event query parameters through the router.
///
/// Expected: 200 OK with only zone-1's events, capped by the limit
#[tokio::test]
async fn events_route_applies_query() -> Result<(), TestError> {
    let resp = get("/api/events?limit=1&zoneId=zone-1").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let raw: serde_json::Value = serde_json::from_slice(&body)?;
    let events = raw.as_array().cloned().unwrap_or_default();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["id"], "event-1");

    Ok(())
}

/// Tests the OpenAPI document.
///
/// Expected: 200 OK listing the dashboard routes and the configured contact
#[tokio::test]
async fn openapi_document_lists_routes() -> Result<(), TestError> {
    let resp = get("/api/docs/openapi.json").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&body)?;
    assert!(doc["paths"].get("/api/zones/{zone_id}").is_some());
    assert!(doc["paths"].get("/api/dashboard/summary").is_some());
    assert_eq!(doc["info"]["contact"]["email"], "ops@drishti.test");

    Ok(())
}

//! Tests for the event log endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use drishti::{
    model::event::EventQuery,
    server::controller::event::{get_events, resolve_event},
};

use super::*;

/// Tests listing events without query parameters.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn get_events_success() -> Result<(), TestError> {
    let result = get_events(State(app_state()), Query(EventQuery::default())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests listing events for a zone that has none.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn get_events_for_quiet_zone_success() -> Result<(), TestError> {
    let query = EventQuery {
        limit: Some(10),
        zone_id: Some("zone-5".to_string()),
    };

    let result = get_events(State(app_state()), Query(query)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests resolving an event.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn resolve_event_success() -> Result<(), TestError> {
    let result = resolve_event(State(app_state()), Path("event-1".to_string())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

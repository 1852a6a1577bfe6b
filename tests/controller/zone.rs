//! Tests for the zone endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use drishti::server::controller::zone::{get_zone_details, get_zones};

use super::*;

/// Tests listing zones.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn get_zones_success() -> Result<(), TestError> {
    let result = get_zones(State(app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests details for a known zone.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn get_zone_details_success() -> Result<(), TestError> {
    let result = get_zone_details(State(app_state()), Path("zone-1".to_string())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests details for an unknown zone.
///
/// Expected: Err with 404 Not Found response
#[tokio::test]
async fn get_zone_details_not_found() -> Result<(), TestError> {
    let result = get_zone_details(State(app_state()), Path("zone-99".to_string())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

//! Tests for the unit endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use drishti::{
    model::api::DispatchDto,
    server::controller::unit::{dispatch_unit, get_units},
};

use super::*;

/// Tests listing units.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn get_units_success() -> Result<(), TestError> {
    let result = get_units(State(app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests dispatching a unit.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn dispatch_unit_success() -> Result<(), TestError> {
    let payload = DispatchDto {
        zone_id: "zone-3".to_string(),
    };

    let result = dispatch_unit(
        State(app_state()),
        Path("unit-1".to_string()),
        Json(payload),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

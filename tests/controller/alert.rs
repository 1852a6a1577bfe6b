//! Tests for the alert endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use drishti::{
    model::api::AcknowledgeDto,
    server::controller::alert::{acknowledge_alert, get_alerts},
};

use super::*;

/// Tests listing alerts.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn get_alerts_success() -> Result<(), TestError> {
    let result = get_alerts(State(app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests acknowledging an alert.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn acknowledge_alert_success() -> Result<(), TestError> {
    let payload = AcknowledgeDto {
        commander_id: "cmd-001".to_string(),
    };

    let result = acknowledge_alert(
        State(app_state()),
        Path("alert-1".to_string()),
        Json(payload),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

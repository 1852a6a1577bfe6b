//! Tests for the dashboard endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use drishti::server::controller::dashboard::{get_analytics, get_metrics, get_summary_feed};

use super::*;

/// Tests fetching metrics.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn get_metrics_success() -> Result<(), TestError> {
    let result = get_metrics(State(app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests fetching analytics.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn get_analytics_success() -> Result<(), TestError> {
    let result = get_analytics(State(app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests fetching the summary feed.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn get_summary_feed_success() -> Result<(), TestError> {
    let result = get_summary_feed(State(app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

//! Tests for the login and logout endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use drishti::{
    model::api::LoginDto,
    server::controller::auth::{login, logout},
    store::fixture::{COMMANDER_EMAIL, COMMANDER_PASSWORD},
};

use super::*;

/// Tests login with the fixture credentials.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn login_success() -> Result<(), TestError> {
    let payload = LoginDto {
        email: COMMANDER_EMAIL.to_string(),
        password: COMMANDER_PASSWORD.to_string(),
    };

    let result = login(State(app_state()), Json(payload)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests login with invalid credentials.
///
/// Expected: Err with 401 Unauthorized response
#[tokio::test]
async fn login_invalid_credentials() -> Result<(), TestError> {
    let payload = LoginDto {
        email: COMMANDER_EMAIL.to_string(),
        password: "not-the-password".to_string(),
    };

    let result = login(State(app_state()), Json(payload)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Tests logout.
///
/// Expected: Ok with 204 No Content response
#[tokio::test]
async fn logout_success() -> Result<(), TestError> {
    let result = logout(State(app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

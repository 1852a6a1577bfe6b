use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use dioxus_logger::tracing;

use crate::{
    model::{
        api::{ErrorDto, LoginDto},
        commander::Commander,
    },
    server::{error::Error, model::app::AppState},
    store::DataSource,
};

pub static AUTH_TAG: &str = "auth";

/// Authenticate a commander with email and password
///
/// # Responses
/// - 200 (OK): Credentials accepted, body is the commander profile
/// - 401 (Unauthorized): Credentials rejected
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Commander authenticated", body = Commander),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let commander = state.source.login(&payload.email, &payload.password).await?;

    tracing::info!(commander_id = %commander.id, "Commander logged in");

    Ok((StatusCode::OK, Json(commander)))
}

/// End the current commander session
///
/// # Responses
/// - 204 (No Content): Logged out
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto),
    ),
)]
pub async fn logout(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    state.source.logout().await?;

    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        zone::{Zone, ZoneDetails},
    },
    server::{error::Error, model::app::AppState},
    store::DataSource,
};

pub static ZONE_TAG: &str = "zone";

/// List every monitored zone
#[utoipa::path(
    get,
    path = "/api/zones",
    tag = ZONE_TAG,
    responses(
        (status = 200, description = "Monitored zones", body = Vec<Zone>),
        (status = 500, description = "Internal server error", body = ErrorDto),
    ),
)]
pub async fn get_zones(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let zones = state.source.fetch_zones().await?;

    Ok((StatusCode::OK, Json(zones)))
}

/// Get a zone with its recent summary, events, and nearby units
///
/// # Responses
/// - 200 (OK): Zone found
/// - 404 (Not Found): No zone with the given id
#[utoipa::path(
    get,
    path = "/api/zones/{zone_id}",
    tag = ZONE_TAG,
    params(("zone_id" = String, Path, description = "Zone identifier")),
    responses(
        (status = 200, description = "Zone details", body = ZoneDetails),
        (status = 404, description = "Zone not found", body = ErrorDto),
    ),
)]
pub async fn get_zone_details(
    State(state): State<AppState>,
    Path(zone_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let details = state.source.fetch_zone_details(&zone_id).await?;

    Ok((StatusCode::OK, Json(details)))
}

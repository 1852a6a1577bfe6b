use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;

use crate::{
    model::{
        api::{DispatchDto, ErrorDto},
        unit::{DispatchReceipt, Unit},
    },
    server::{error::Error, model::app::AppState},
    store::DataSource,
};

pub static UNIT_TAG: &str = "unit";

/// List every response unit
#[utoipa::path(
    get,
    path = "/api/units",
    tag = UNIT_TAG,
    responses(
        (status = 200, description = "Response units", body = Vec<Unit>),
        (status = 500, description = "Internal server error", body = ErrorDto),
    ),
)]
pub async fn get_units(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let units = state.source.fetch_units().await?;

    Ok((StatusCode::OK, Json(units)))
}

/// Dispatch a unit to a zone
#[utoipa::path(
    post,
    path = "/api/units/{unit_id}/dispatch",
    tag = UNIT_TAG,
    params(("unit_id" = String, Path, description = "Unit identifier")),
    request_body = DispatchDto,
    responses(
        (status = 200, description = "Dispatch recorded", body = DispatchReceipt),
        (status = 500, description = "Internal server error", body = ErrorDto),
    ),
)]
pub async fn dispatch_unit(
    State(state): State<AppState>,
    Path(unit_id): Path<String>,
    Json(payload): Json<DispatchDto>,
) -> Result<impl IntoResponse, Error> {
    let receipt = state.source.dispatch_unit(&unit_id, &payload.zone_id).await?;

    tracing::info!(unit_id = %receipt.unit_id, zone_id = %receipt.zone_id, "Unit dispatched");

    Ok((StatusCode::OK, Json(receipt)))
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        alert::{AcknowledgeReceipt, Alert},
        api::{AcknowledgeDto, ErrorDto},
    },
    server::{error::Error, model::app::AppState},
    store::DataSource,
};

pub static ALERT_TAG: &str = "alert";

/// List current alerts, newest first
#[utoipa::path(
    get,
    path = "/api/alerts",
    tag = ALERT_TAG,
    responses(
        (status = 200, description = "Alerts", body = Vec<Alert>),
        (status = 500, description = "Internal server error", body = ErrorDto),
    ),
)]
pub async fn get_alerts(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let alerts = state.source.fetch_alerts().await?;

    Ok((StatusCode::OK, Json(alerts)))
}

/// Acknowledge an alert on behalf of a commander
#[utoipa::path(
    post,
    path = "/api/alerts/{alert_id}/acknowledge",
    tag = ALERT_TAG,
    params(("alert_id" = String, Path, description = "Alert identifier")),
    request_body = AcknowledgeDto,
    responses(
        (status = 200, description = "Acknowledgement recorded", body = AcknowledgeReceipt),
        (status = 500, description = "Internal server error", body = ErrorDto),
    ),
)]
pub async fn acknowledge_alert(
    State(state): State<AppState>,
    Path(alert_id): Path<String>,
    Json(payload): Json<AcknowledgeDto>,
) -> Result<impl IntoResponse, Error> {
    let receipt = state
        .source
        .acknowledge_alert(&alert_id, &payload.commander_id)
        .await?;

    Ok((StatusCode::OK, Json(receipt)))
}

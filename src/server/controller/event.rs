use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        event::{EventLogEntry, EventQuery, ResolveReceipt},
    },
    server::{error::Error, model::app::AppState},
    store::DataSource,
};

pub static EVENT_TAG: &str = "event";

/// List event log entries, optionally restricted to one zone and capped in length
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    params(EventQuery),
    responses(
        (status = 200, description = "Event log entries", body = Vec<EventLogEntry>),
        (status = 500, description = "Internal server error", body = ErrorDto),
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
    Query(query): Query<EventQuery>,
) -> Result<impl IntoResponse, Error> {
    let events = state.source.fetch_events(&query).await?;

    Ok((StatusCode::OK, Json(events)))
}

/// Mark an event as resolved
#[utoipa::path(
    post,
    path = "/api/events/{event_id}/resolve",
    tag = EVENT_TAG,
    params(("event_id" = String, Path, description = "Event identifier")),
    responses(
        (status = 200, description = "Resolution recorded", body = ResolveReceipt),
        (status = 500, description = "Internal server error", body = ErrorDto),
    ),
)]
pub async fn resolve_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let receipt = state.source.resolve_event(&event_id).await?;

    Ok((StatusCode::OK, Json(receipt)))
}

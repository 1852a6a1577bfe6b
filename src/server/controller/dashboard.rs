use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        dashboard::{AnalyticsData, DashboardMetrics, SummaryEntry},
    },
    server::{error::Error, model::app::AppState},
    store::DataSource,
};

pub static DASHBOARD_TAG: &str = "dashboard";

/// Get the headline counters
#[utoipa::path(
    get,
    path = "/api/dashboard/metrics",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Dashboard metrics", body = DashboardMetrics),
        (status = 500, description = "Internal server error", body = ErrorDto),
    ),
)]
pub async fn get_metrics(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let metrics = state.source.fetch_metrics().await?;

    Ok((StatusCode::OK, Json(metrics)))
}

/// Get chart series for the analytics panel
#[utoipa::path(
    get,
    path = "/api/dashboard/analytics",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Analytics series", body = AnalyticsData),
        (status = 500, description = "Internal server error", body = ErrorDto),
    ),
)]
pub async fn get_analytics(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let analytics = state.source.fetch_analytics().await?;

    Ok((StatusCode::OK, Json(analytics)))
}

/// Get the most recent per-zone summaries
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Summary feed", body = Vec<SummaryEntry>),
        (status = 500, description = "Internal server error", body = ErrorDto),
    ),
)]
pub async fn get_summary_feed(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let feed = state.source.fetch_summary_feed().await?;

    Ok((StatusCode::OK, Json(feed)))
}

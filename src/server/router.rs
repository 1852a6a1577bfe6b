//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI
//! is served at `/api/docs`.

use axum::Router;
use utoipa::{openapi::ContactBuilder, OpenApi};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{config::Config, controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/auth/login` - Authenticate a commander
/// - `POST /api/auth/logout` - End the session
/// - `GET /api/zones` - List zones
/// - `GET /api/zones/{zone_id}` - Zone details
/// - `GET /api/units` - List response units
/// - `POST /api/units/{unit_id}/dispatch` - Dispatch a unit to a zone
/// - `GET /api/alerts` - List alerts
/// - `POST /api/alerts/{alert_id}/acknowledge` - Acknowledge an alert
/// - `GET /api/events` - List event log entries (`limit`, `zoneId` query parameters)
/// - `POST /api/events/{event_id}/resolve` - Resolve an event
/// - `GET /api/dashboard/metrics` - Headline counters
/// - `GET /api/dashboard/analytics` - Chart series
/// - `GET /api/dashboard/summary` - Summary feed
///
/// The OpenAPI document is served at `/api/docs/openapi.json` with `config.contact_email`
/// as its contact address.
///
/// # Returns
/// An Axum `Router<AppState>` ready to be merged into the main application router.
pub fn routes(config: &Config) -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Drishti", description = "Drishti operations API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Commander authentication"),
        (name = controller::zone::ZONE_TAG, description = "Monitored zones"),
        (name = controller::unit::UNIT_TAG, description = "Response units and dispatch"),
        (name = controller::alert::ALERT_TAG, description = "Alerts"),
        (name = controller::event::EVENT_TAG, description = "Event log"),
        (name = controller::dashboard::DASHBOARD_TAG, description = "Dashboard metrics, analytics, and summaries"),
    ))]
    struct ApiDoc;

    let (routes, mut api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::zone::get_zones))
        .routes(routes!(controller::zone::get_zone_details))
        .routes(routes!(controller::unit::get_units))
        .routes(routes!(controller::unit::dispatch_unit))
        .routes(routes!(controller::alert::get_alerts))
        .routes(routes!(controller::alert::acknowledge_alert))
        .routes(routes!(controller::event::get_events))
        .routes(routes!(controller::event::resolve_event))
        .routes(routes!(controller::dashboard::get_metrics))
        .routes(routes!(controller::dashboard::get_analytics))
        .routes(routes!(controller::dashboard::get_summary_feed))
        .split_for_parts();

    api.info.contact = Some(
        ContactBuilder::new()
            .email(Some(config.contact_email.clone()))
            .build(),
    );

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

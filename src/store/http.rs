//! [`DataSource`] backed by the dashboard's JSON API.

use dioxus_logger::tracing;
use reqwasm::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    model::{
        alert::{AcknowledgeReceipt, Alert},
        api::{AcknowledgeDto, DispatchDto, ErrorDto, LoginDto},
        commander::Commander,
        dashboard::{AnalyticsData, DashboardMetrics, SummaryEntry},
        event::{EventLogEntry, EventQuery, ResolveReceipt},
        unit::{DispatchReceipt, Unit},
        zone::{Zone, ZoneDetails},
    },
    store::{error::StoreError, source::DataSource},
};

#[derive(Debug, Clone, PartialEq)]
pub struct HttpSource {
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, err: StoreError) -> Result<T, StoreError> {
        let response = Request::get(&self.url(path))
            .credentials(reqwasm::http::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| failed(&err, format!("Failed to send request: {}", e)))?;

        parse(response, err).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        err: StoreError,
    ) -> Result<T, StoreError> {
        let body = serde_json::to_string(body)
            .map_err(|e| failed(&err, format!("Failed to encode request: {}", e)))?;

        let response = Request::post(&self.url(path))
            .credentials(reqwasm::http::RequestCredentials::Include)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| failed(&err, format!("Failed to send request: {}", e)))?;

        parse(response, err).await
    }
}

/// Percent-encodes an id or query value.
fn encode(value: &str) -> String {
    js_sys::encode_uri_component(value).into()
}

/// `/api/{collection}/{id}` followed by `action`, with the id percent-encoded.
fn item_path(collection: &str, id: &str, action: &str, encode: impl Fn(&str) -> String) -> String {
    format!("/api/{}/{}{}", collection, encode(id), action)
}

fn events_path(query: &EventQuery, encode: impl Fn(&str) -> String) -> String {
    let mut params = Vec::new();
    if let Some(limit) = query.limit {
        params.push(format!("limit={}", limit));
    }
    if let Some(zone_id) = query.zone_id.as_deref().filter(|z| !z.is_empty()) {
        params.push(format!("zoneId={}", encode(zone_id)));
    }

    if params.is_empty() {
        "/api/events".to_string()
    } else {
        format!("/api/events?{}", params.join("&"))
    }
}

fn failed(err: &StoreError, cause: String) -> StoreError {
    tracing::error!("{}: {}", err, cause);

    err.clone()
}

async fn parse<T: DeserializeOwned>(response: Response, err: StoreError) -> Result<T, StoreError> {
    match response.status() {
        200..=299 => response
            .json::<T>()
            .await
            .map_err(|e| failed(&err, format!("Failed to parse response: {}", e))),
        status => {
            let cause = match response.json::<ErrorDto>().await {
                Ok(error_dto) => error_dto.error,
                Err(_) => "Unknown error".to_string(),
            };

            Err(failed(
                &err,
                format!("Request failed with status {}: {}", status, cause),
            ))
        }
    }
}

impl DataSource for HttpSource {
    async fn login(&self, email: &str, password: &str) -> Result<Commander, StoreError> {
        let body = LoginDto {
            email: email.to_string(),
            password: password.to_string(),
        };

        self.post("/api/auth/login", &body, StoreError::AuthenticationFailed)
            .await
    }

    async fn logout(&self) -> Result<(), StoreError> {
        let response = Request::post(&self.url("/api/auth/logout"))
            .credentials(reqwasm::http::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| failed(&StoreError::LogoutFailed, e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(failed(
                &StoreError::LogoutFailed,
                format!("Request failed with status {}", response.status()),
            ))
        }
    }

    /// Tokens are only kept client-side; the API has no endpoint for them yet.
    async fn update_fcm_token(&self, token: &str) -> Result<String, StoreError> {
        Ok(token.to_string())
    }

    async fn fetch_zones(&self) -> Result<Vec<Zone>, StoreError> {
        self.get("/api/zones", StoreError::FetchZones).await
    }

    async fn fetch_zone_details(&self, zone_id: &str) -> Result<ZoneDetails, StoreError> {
        self.get(
            &item_path("zones", zone_id, "", encode),
            StoreError::FetchZoneDetails(zone_id.to_string()),
        )
        .await
    }

    async fn fetch_units(&self) -> Result<Vec<Unit>, StoreError> {
        self.get("/api/units", StoreError::FetchUnits).await
    }

    async fn dispatch_unit(
        &self,
        unit_id: &str,
        zone_id: &str,
    ) -> Result<DispatchReceipt, StoreError> {
        let body = DispatchDto {
            zone_id: zone_id.to_string(),
        };

        self.post(
            &item_path("units", unit_id, "/dispatch", encode),
            &body,
            StoreError::DispatchUnit,
        )
        .await
    }

    async fn fetch_alerts(&self) -> Result<Vec<Alert>, StoreError> {
        self.get("/api/alerts", StoreError::FetchAlerts).await
    }

    async fn acknowledge_alert(
        &self,
        alert_id: &str,
        commander_id: &str,
    ) -> Result<AcknowledgeReceipt, StoreError> {
        let body = AcknowledgeDto {
            commander_id: commander_id.to_string(),
        };

        self.post(
            &item_path("alerts", alert_id, "/acknowledge", encode),
            &body,
            StoreError::AcknowledgeAlert,
        )
        .await
    }

    async fn fetch_events(&self, query: &EventQuery) -> Result<Vec<EventLogEntry>, StoreError> {
        self.get(&events_path(query, encode), StoreError::FetchEvents)
            .await
    }

    async fn resolve_event(&self, event_id: &str) -> Result<ResolveReceipt, StoreError> {
        self.post(
            &item_path("events", event_id, "/resolve", encode),
            &(),
            StoreError::ResolveEvent,
        )
        .await
    }

    async fn fetch_metrics(&self) -> Result<DashboardMetrics, StoreError> {
        self.get("/api/dashboard/metrics", StoreError::FetchMetrics)
            .await
    }

    async fn fetch_analytics(&self) -> Result<AnalyticsData, StoreError> {
        self.get("/api/dashboard/analytics", StoreError::FetchAnalytics)
            .await
    }

    async fn fetch_summary_feed(&self) -> Result<Vec<SummaryEntry>, StoreError> {
        self.get("/api/dashboard/summary", StoreError::FetchSummaryFeed)
            .await
    }
}

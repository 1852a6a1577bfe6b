//! Data source that rejects every operation.

use drishti::{
    model::{
        alert::{AcknowledgeReceipt, Alert},
        commander::Commander,
        dashboard::{AnalyticsData, DashboardMetrics, SummaryEntry},
        event::{EventLogEntry, EventQuery, ResolveReceipt},
        unit::{DispatchReceipt, Unit},
        zone::{Zone, ZoneDetails},
    },
    store::{DataSource, StoreError},
};

/// Rejects each call with the [`StoreError`] variant of that operation, for exercising the
/// error paths of the slices.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingSource;

impl DataSource for FailingSource {
    async fn login(&self, _email: &str, _password: &str) -> Result<Commander, StoreError> {
        Err(StoreError::AuthenticationFailed)
    }

    async fn logout(&self) -> Result<(), StoreError> {
        Err(StoreError::LogoutFailed)
    }

    async fn update_fcm_token(&self, _token: &str) -> Result<String, StoreError> {
        Err(StoreError::UpdateFcmToken)
    }

    async fn fetch_zones(&self) -> Result<Vec<Zone>, StoreError> {
        Err(StoreError::FetchZones)
    }

    async fn fetch_zone_details(&self, zone_id: &str) -> Result<ZoneDetails, StoreError> {
        Err(StoreError::FetchZoneDetails(zone_id.to_string()))
    }

    async fn fetch_units(&self) -> Result<Vec<Unit>, StoreError> {
        Err(StoreError::FetchUnits)
    }

    async fn dispatch_unit(
        &self,
        _unit_id: &str,
        _zone_id: &str,
    ) -> Result<DispatchReceipt, StoreError> {
        Err(StoreError::DispatchUnit)
    }

    async fn fetch_alerts(&self) -> Result<Vec<Alert>, StoreError> {
        Err(StoreError::FetchAlerts)
    }

    async fn acknowledge_alert(
        &self,
        _alert_id: &str,
        _commander_id: &str,
    ) -> Result<AcknowledgeReceipt, StoreError> {
        Err(StoreError::AcknowledgeAlert)
    }

    async fn fetch_events(&self, _query: &EventQuery) -> Result<Vec<EventLogEntry>, StoreError> {
        Err(StoreError::FetchEvents)
    }

    async fn resolve_event(&self, _event_id: &str) -> Result<ResolveReceipt, StoreError> {
        Err(StoreError::ResolveEvent)
    }

    async fn fetch_metrics(&self) -> Result<DashboardMetrics, StoreError> {
        Err(StoreError::FetchMetrics)
    }

    async fn fetch_analytics(&self) -> Result<AnalyticsData, StoreError> {
        Err(StoreError::FetchAnalytics)
    }

    async fn fetch_summary_feed(&self) -> Result<Vec<SummaryEntry>, StoreError> {
        Err(StoreError::FetchSummaryFeed)
    }
}

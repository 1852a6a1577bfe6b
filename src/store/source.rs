//! The asynchronous seam every store operation resolves through.

use crate::{
    model::{
        alert::{AcknowledgeReceipt, Alert},
        commander::Commander,
        dashboard::{AnalyticsData, DashboardMetrics, SummaryEntry},
        event::{EventLogEntry, EventQuery, ResolveReceipt},
        unit::{DispatchReceipt, Unit},
        zone::{Zone, ZoneDetails},
    },
    store::error::StoreError,
};

/// Backend the store fetches from and reports mutations to.
///
/// Implementations honour the entity shapes in [`crate::model`] and reject with the
/// [`StoreError`] variant matching the operation, so slices can store the message as-is.
#[allow(async_fn_in_trait)]
pub trait DataSource {
    async fn login(&self, email: &str, password: &str) -> Result<Commander, StoreError>;

    async fn logout(&self) -> Result<(), StoreError>;

    async fn update_fcm_token(&self, token: &str) -> Result<String, StoreError>;

    async fn fetch_zones(&self) -> Result<Vec<Zone>, StoreError>;

    async fn fetch_zone_details(&self, zone_id: &str) -> Result<ZoneDetails, StoreError>;

    async fn fetch_units(&self) -> Result<Vec<Unit>, StoreError>;

    async fn dispatch_unit(
        &self,
        unit_id: &str,
        zone_id: &str,
    ) -> Result<DispatchReceipt, StoreError>;

    async fn fetch_alerts(&self) -> Result<Vec<Alert>, StoreError>;

    async fn acknowledge_alert(
        &self,
        alert_id: &str,
        commander_id: &str,
    ) -> Result<AcknowledgeReceipt, StoreError>;

    async fn fetch_events(&self, query: &EventQuery) -> Result<Vec<EventLogEntry>, StoreError>;

    async fn resolve_event(&self, event_id: &str) -> Result<ResolveReceipt, StoreError>;

    async fn fetch_metrics(&self) -> Result<DashboardMetrics, StoreError>;

    async fn fetch_analytics(&self) -> Result<AnalyticsData, StoreError>;

    async fn fetch_summary_feed(&self) -> Result<Vec<SummaryEntry>, StoreError>;
}

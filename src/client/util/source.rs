//! Picks the backend the client store talks to.

use drishti::{
    model::{
        alert::{AcknowledgeReceipt, Alert},
        commander::Commander,
        dashboard::{AnalyticsData, DashboardMetrics, SummaryEntry},
        event::{EventLogEntry, EventQuery, ResolveReceipt},
        unit::{DispatchReceipt, Unit},
        zone::{Zone, ZoneDetails},
    },
    store::{DataSource, FixtureSource, StoreError},
};

#[cfg(feature = "web")]
use drishti::store::http::HttpSource;

/// Backend selected at compile time.
///
/// Builds with `DRISHTI_API_URL` set talk to the JSON API at that address; every other
/// build serves the built-in fixtures.
#[derive(Debug, Clone, PartialEq)]
pub enum AppSource {
    Fixture(FixtureSource),
    #[cfg(feature = "web")]
    Http(HttpSource),
}

impl AppSource {
    pub fn from_build_env() -> Self {
        #[cfg(feature = "web")]
        {
            if let Some(url) = option_env!("DRISHTI_API_URL").filter(|url| !url.is_empty()) {
                return Self::Http(HttpSource::new(url));
            }
        }

        Self::Fixture(FixtureSource::new())
    }
}

macro_rules! delegate {
    ($self:ident, $source:ident => $call:expr) => {
        match $self {
            Self::Fixture($source) => $call,
            #[cfg(feature = "web")]
            Self::Http($source) => $call,
        }
    };
}

impl DataSource for AppSource {
    async fn login(&self, email: &str, password: &str) -> Result<Commander, StoreError> {
        delegate!(self, s => s.login(email, password).await)
    }

    async fn logout(&self) -> Result<(), StoreError> {
        delegate!(self, s => s.logout().await)
    }

    async fn update_fcm_token(&self, token: &str) -> Result<String, StoreError> {
        delegate!(self, s => s.update_fcm_token(token).await)
    }

    async fn fetch_zones(&self) -> Result<Vec<Zone>, StoreError> {
        delegate!(self, s => s.fetch_zones().await)
    }

    async fn fetch_zone_details(&self, zone_id: &str) -> Result<ZoneDetails, StoreError> {
        delegate!(self, s => s.fetch_zone_details(zone_id).await)
    }

    async fn fetch_units(&self) -> Result<Vec<Unit>, StoreError> {
        delegate!(self, s => s.fetch_units().await)
    }

    async fn dispatch_unit(
        &self,
        unit_id: &str,
        zone_id: &str,
    ) -> Result<DispatchReceipt, StoreError> {
        delegate!(self, s => s.dispatch_unit(unit_id, zone_id).await)
    }

    async fn fetch_alerts(&self) -> Result<Vec<Alert>, StoreError> {
        delegate!(self, s => s.fetch_alerts().await)
    }

    async fn acknowledge_alert(
        &self,
        alert_id: &str,
        commander_id: &str,
    ) -> Result<AcknowledgeReceipt, StoreError> {
        delegate!(self, s => s.acknowledge_alert(alert_id, commander_id).await)
    }

    async fn fetch_events(&self, query: &EventQuery) -> Result<Vec<EventLogEntry>, StoreError> {
        delegate!(self, s => s.fetch_events(query).await)
    }

    async fn resolve_event(&self, event_id: &str) -> Result<ResolveReceipt, StoreError> {
        delegate!(self, s => s.resolve_event(event_id).await)
    }

    async fn fetch_metrics(&self) -> Result<DashboardMetrics, StoreError> {
        delegate!(self, s => s.fetch_metrics().await)
    }

    async fn fetch_analytics(&self) -> Result<AnalyticsData, StoreError> {
        delegate!(self, s => s.fetch_analytics().await)
    }

    async fn fetch_summary_feed(&self) -> Result<Vec<SummaryEntry>, StoreError> {
        delegate!(self, s => s.fetch_summary_feed().await)
    }
}

//! Client-side application state.
//!
//! [`AppStore`] owns the seven slices. Each slice exposes synchronous reducers and a
//! `*_pending`/`*_settled` pair per asynchronous operation; the async drivers on
//! [`AppStore`] run an operation against a [`DataSource`] from pending to settled. The
//! views drive the same pairs across a spawned task so that several operations can be in
//! flight at once.

pub mod alerts;
pub mod auth;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod filter;
pub mod fixture;
#[cfg(feature = "web")]
pub mod http;
pub mod source;
pub mod status;
pub mod ui;
pub mod units;
pub mod upload;
pub mod zones;

pub use error::StoreError;
pub use fixture::FixtureSource;
pub use source::DataSource;

use crate::model::event::EventQuery;

use self::{
    alerts::AlertsState, auth::AuthState, dashboard::DashboardState, events::EventsState,
    ui::UiState, units::UnitsState, zones::ZonesState,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppStore {
    pub auth: AuthState,
    pub zones: ZonesState,
    pub units: UnitsState,
    pub alerts: AlertsState,
    pub events: EventsState,
    pub dashboard: DashboardState,
    pub ui: UiState,
}

impl AppStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every slice to its initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub async fn login<S: DataSource>(&mut self, source: &S, email: &str, password: &str) {
        self.auth.login_pending();
        let result = source.login(email, password).await;
        self.auth.login_settled(result);
    }

    pub async fn logout<S: DataSource>(&mut self, source: &S) {
        let result = source.logout().await;
        self.auth.logout_settled(result);
    }

    pub async fn update_fcm_token<S: DataSource>(&mut self, source: &S, token: &str) {
        let result = source.update_fcm_token(token).await;
        self.auth.fcm_token_settled(result);
    }

    pub async fn fetch_zones<S: DataSource>(&mut self, source: &S) {
        self.zones.fetch_pending();
        let result = source.fetch_zones().await;
        self.zones.fetch_settled(result);
    }

    pub async fn fetch_zone_details<S: DataSource>(&mut self, source: &S, zone_id: &str) {
        self.zones.details_pending();
        let result = source.fetch_zone_details(zone_id).await;
        self.zones.details_settled(result);
    }

    pub async fn fetch_units<S: DataSource>(&mut self, source: &S) {
        self.units.fetch_pending();
        let result = source.fetch_units().await;
        self.units.fetch_settled(result);
    }

    pub async fn dispatch_unit<S: DataSource>(&mut self, source: &S, unit_id: &str, zone_id: &str) {
        let result = source.dispatch_unit(unit_id, zone_id).await;
        self.units.dispatch_settled(result);
    }

    pub async fn fetch_alerts<S: DataSource>(&mut self, source: &S) {
        self.alerts.fetch_pending();
        let result = source.fetch_alerts().await;
        self.alerts.fetch_settled(result);
    }

    pub async fn acknowledge_alert<S: DataSource>(
        &mut self,
        source: &S,
        alert_id: &str,
        commander_id: &str,
    ) {
        let result = source.acknowledge_alert(alert_id, commander_id).await;
        self.alerts.acknowledge_settled(result);
    }

    pub async fn fetch_events<S: DataSource>(&mut self, source: &S, query: &EventQuery) {
        self.events.fetch_pending();
        let result = source.fetch_events(query).await;
        self.events.fetch_settled(result);
    }

    pub async fn resolve_event<S: DataSource>(&mut self, source: &S, event_id: &str) {
        let result = source.resolve_event(event_id).await;
        self.events.resolve_settled(result);
    }

    pub async fn fetch_metrics<S: DataSource>(&mut self, source: &S) {
        self.dashboard.metrics_pending();
        let result = source.fetch_metrics().await;
        self.dashboard.metrics_settled(result);
    }

    pub async fn fetch_analytics<S: DataSource>(&mut self, source: &S) {
        self.dashboard.analytics_pending();
        let result = source.fetch_analytics().await;
        self.dashboard.analytics_settled(result);
    }

    pub async fn fetch_summary_feed<S: DataSource>(&mut self, source: &S) {
        self.dashboard.summary_pending();
        let result = source.fetch_summary_feed().await;
        self.dashboard.summary_settled(result);
    }

    /// Loads zones, units and alerts concurrently once a commander is signed in. Each
    /// settles on its own; a failure in one leaves the others intact.
    pub async fn on_authenticated<S: DataSource>(&mut self, source: &S) {
        self.zones.fetch_pending();
        self.units.fetch_pending();
        self.alerts.fetch_pending();

        let (zones, units, alerts) = futures::join!(
            source.fetch_zones(),
            source.fetch_units(),
            source.fetch_alerts()
        );

        self.zones.fetch_settled(zones);
        self.units.fetch_settled(units);
        self.alerts.fetch_settled(alerts);
    }

    /// Loads the three dashboard sections concurrently.
    pub async fn refresh_dashboard<S: DataSource>(&mut self, source: &S) {
        self.dashboard.metrics_pending();
        self.dashboard.analytics_pending();
        self.dashboard.summary_pending();

        let (metrics, analytics, summary) = futures::join!(
            source.fetch_metrics(),
            source.fetch_analytics(),
            source.fetch_summary_feed()
        );

        self.dashboard.metrics_settled(metrics);
        self.dashboard.analytics_settled(analytics);
        self.dashboard.summary_settled(summary);
    }
}

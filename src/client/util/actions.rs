//! Store operations driven from the views.
//!
//! Each action flips the slice to pending, awaits the source on a spawned task, then
//! settles. The write guard is never held across the await, so any number of actions may
//! be in flight and the views keep rendering the pending state meanwhile.

use dioxus::prelude::*;
use drishti::{
    model::event::EventQuery,
    store::{fixture, AppStore, DataSource},
};

use crate::client::util::AppSource;

/// Number of log entries the event view asks for.
pub const EVENT_PAGE_SIZE: usize = 50;

pub fn login(mut store: Signal<AppStore>, source: AppSource, email: String, password: String) {
    store.write().auth.login_pending();

    spawn(async move {
        let result = source.login(&email, &password).await;
        store.write().auth.login_settled(result);
    });
}

pub fn logout(mut store: Signal<AppStore>, source: AppSource) {
    spawn(async move {
        let result = source.logout().await;
        store.write().auth.logout_settled(result);
    });
}

/// Loads zones, units and alerts, each settling on its own.
pub fn load_operations(mut store: Signal<AppStore>, source: AppSource) {
    // The fixture backend also carries standing dispatch advice; the API has none.
    if let AppSource::Fixture(fixture_source) = &source {
        if store.peek().units.recommendations.is_empty() {
            let mut state = store.write();
            for rec in fixture::recommendations(fixture_source.now()) {
                state.units.add_recommendation(rec);
            }
        }
    }

    fetch_zones(store, source.clone());
    fetch_units(store, source.clone());
    fetch_alerts(store, source);
}

pub fn fetch_zones(mut store: Signal<AppStore>, source: AppSource) {
    store.write().zones.fetch_pending();

    spawn(async move {
        let result = source.fetch_zones().await;
        store.write().zones.fetch_settled(result);
    });
}

pub fn fetch_zone_details(mut store: Signal<AppStore>, source: AppSource, zone_id: String) {
    store.write().zones.details_pending();

    spawn(async move {
        let result = source.fetch_zone_details(&zone_id).await;
        store.write().zones.details_settled(result);
    });
}

pub fn fetch_units(mut store: Signal<AppStore>, source: AppSource) {
    store.write().units.fetch_pending();

    spawn(async move {
        let result = source.fetch_units().await;
        store.write().units.fetch_settled(result);
    });
}

pub fn dispatch_unit(
    mut store: Signal<AppStore>,
    source: AppSource,
    unit_id: String,
    zone_id: String,
) {
    spawn(async move {
        let result = source.dispatch_unit(&unit_id, &zone_id).await;
        store.write().units.dispatch_settled(result);
    });
}

pub fn fetch_alerts(mut store: Signal<AppStore>, source: AppSource) {
    store.write().alerts.fetch_pending();

    spawn(async move {
        let result = source.fetch_alerts().await;
        store.write().alerts.fetch_settled(result);
    });
}

pub fn acknowledge_alert(
    mut store: Signal<AppStore>,
    source: AppSource,
    alert_id: String,
    commander_id: String,
) {
    spawn(async move {
        let result = source.acknowledge_alert(&alert_id, &commander_id).await;
        store.write().alerts.acknowledge_settled(result);
    });
}

pub fn fetch_events(mut store: Signal<AppStore>, source: AppSource, query: EventQuery) {
    store.write().events.fetch_pending();

    spawn(async move {
        let result = source.fetch_events(&query).await;
        store.write().events.fetch_settled(result);
    });
}

pub fn resolve_event(mut store: Signal<AppStore>, source: AppSource, event_id: String) {
    spawn(async move {
        let result = source.resolve_event(&event_id).await;
        store.write().events.resolve_settled(result);
    });
}

/// Loads the three dashboard sections, each settling on its own.
pub fn refresh_dashboard(mut store: Signal<AppStore>, source: AppSource) {
    {
        let mut store = store.write();
        store.dashboard.metrics_pending();
        store.dashboard.analytics_pending();
        store.dashboard.summary_pending();
    }

    let metrics_source = source.clone();
    spawn(async move {
        let result = metrics_source.fetch_metrics().await;
        store.write().dashboard.metrics_settled(result);
    });

    let analytics_source = source.clone();
    spawn(async move {
        let result = analytics_source.fetch_analytics().await;
        store.write().dashboard.analytics_settled(result);
    });

    spawn(async move {
        let result = source.fetch_summary_feed().await;
        store.write().dashboard.summary_settled(result);
    });
}

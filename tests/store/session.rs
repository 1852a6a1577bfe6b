//! Tests for the loads that follow signing in.

use drishti::{model::unit::UnitStatus, store::AppStore};

use super::*;

/// Tests the initial load after authentication.
///
/// Verifies zones, units and alerts are all fetched and none is left loading.
///
/// Expected: 5 zones, 4 units, 2 unacknowledged alerts
#[tokio::test]
async fn on_authenticated_loads_zones_units_and_alerts() -> Result<(), TestError> {
    let test = TestBuilder::new().authenticated().with_fixtures().build().await?;
    let store = &test.store;

    assert_eq!(store.zones.zones.len(), 5);
    assert_eq!(store.units.units.len(), 4);
    assert_eq!(store.alerts.alerts().len(), 2);
    assert_eq!(store.alerts.unacknowledged_count(), 2);
    assert_eq!(store.units.count_with_status(UnitStatus::Available), 2);

    assert!(!store.zones.is_loading());
    assert!(!store.units.is_loading());
    assert!(!store.alerts.is_loading());
    assert!(store.zones.last_updated.is_some());

    Ok(())
}

/// Tests the initial load when the backend rejects everything.
///
/// Expected: each slice carries its own error and keeps its empty list
#[tokio::test]
async fn on_authenticated_failures_settle_independently() -> Result<(), TestError> {
    let mut store = AppStore::new();

    store.on_authenticated(&FailingSource).await;

    assert_eq!(store.zones.error(), Some("Failed to fetch zones"));
    assert_eq!(store.units.error(), Some("Failed to fetch units"));
    assert_eq!(store.alerts.error(), Some("Failed to fetch alerts"));
    assert!(store.zones.zones.is_empty());
    assert!(!store.zones.is_loading());
    assert!(!store.units.is_loading());
    assert!(!store.alerts.is_loading());

    Ok(())
}

/// Tests that a failed refetch keeps previously loaded data.
///
/// Expected: zones retained alongside the new error
#[tokio::test]
async fn failed_refetch_keeps_loaded_zones() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_fixtures().build().await?;

    test.store.fetch_zones(&FailingSource).await;

    assert_eq!(test.store.zones.zones.len(), 5);
    assert_eq!(test.store.zones.error(), Some("Failed to fetch zones"));

    Ok(())
}

/// Tests resetting the store.
///
/// Expected: equal to a fresh store
#[tokio::test]
async fn reset_restores_initial_state() -> Result<(), TestError> {
    let mut test = TestBuilder::new().authenticated().with_fixtures().build().await?;

    test.store.ui.toggle_sidebar();
    test.store.reset();

    assert_eq!(test.store, AppStore::new());

    Ok(())
}

//! Tests for dispatching units.

use drishti::model::{unit::UnitStatus, Severity};

use super::*;

/// Tests dispatching an available unit.
///
/// Expected: dispatched, bound to the zone, arriving ten minutes after the pinned
/// dispatch time
#[tokio::test]
async fn dispatch_available_unit() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_fixtures().build().await?;

    test.store.dispatch_unit(&test.source, "unit-1", "zone-3").await;

    let unit = test
        .store
        .units
        .unit("unit-1")
        .ok_or_else(|| TestError::Missing("unit-1".to_string()))?;
    assert_eq!(unit.status, UnitStatus::Dispatched);
    assert_eq!(unit.assigned_zone.as_deref(), Some("zone-3"));
    assert_eq!(
        unit.estimated_arrival.as_deref(),
        Some("2024-06-01T12:10:00.000Z")
    );

    Ok(())
}

/// Tests re-dispatching a unit that is already dispatched elsewhere.
///
/// Expected: re-bound to the new zone
#[tokio::test]
async fn dispatch_rebinds_dispatched_unit() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_fixtures().build().await?;

    test.store.dispatch_unit(&test.source, "unit-2", "zone-4").await;

    let unit = test
        .store
        .units
        .unit("unit-2")
        .ok_or_else(|| TestError::Missing("unit-2".to_string()))?;
    assert_eq!(unit.status, UnitStatus::Dispatched);
    assert_eq!(unit.assigned_zone.as_deref(), Some("zone-4"));

    Ok(())
}

/// Tests a rejected dispatch.
///
/// Expected: unit untouched with "Failed to dispatch unit"
#[tokio::test]
async fn rejected_dispatch_leaves_unit_unchanged() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_units(vec![factory::unit("unit-a", UnitStatus::Available)])
        .build()
        .await?;

    test.store.dispatch_unit(&FailingSource, "unit-a", "zone-1").await;

    let unit = test
        .store
        .units
        .unit("unit-a")
        .ok_or_else(|| TestError::Missing("unit-a".to_string()))?;
    assert_eq!(unit.status, UnitStatus::Available);
    assert!(unit.assigned_zone.is_none());
    assert_eq!(test.store.units.error(), Some("Failed to dispatch unit"));

    Ok(())
}

/// Tests dismissing recommendations for a zone.
///
/// Expected: only the other zone's recommendation remains
#[tokio::test]
async fn remove_recommendation_drops_zone_entries() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let unit = factory::unit("unit-a", UnitStatus::Available);

    test.store
        .units
        .add_recommendation(factory::recommendation("zone-1", vec![unit.clone()], Severity::High));
    test.store
        .units
        .add_recommendation(factory::recommendation("zone-2", vec![unit], Severity::Low));
    test.store.units.remove_recommendation("zone-1");

    let zones: Vec<&str> = test
        .store
        .units
        .recommendations
        .iter()
        .map(|r| r.zone_id.as_str())
        .collect();
    assert_eq!(zones, vec!["zone-2"]);

    Ok(())
}

//! Tests for zone details and status updates.

use drishti::model::zone::ZoneStatus;

use super::*;

/// Tests fetching details for a known zone.
///
/// Expected: selected zone holds zone-1 with its nearby units
#[tokio::test]
async fn fetch_zone_details_selects_zone() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_fixtures().build().await?;

    test.store.fetch_zone_details(&test.source, "zone-1").await;

    let selected = test
        .store
        .zones
        .selected_zone
        .as_ref()
        .ok_or_else(|| TestError::Missing("selected zone".to_string()))?;
    assert_eq!(selected.zone.id, "zone-1");
    assert!(!selected.nearby_units.is_empty());
    assert!(!test.store.zones.is_loading());

    Ok(())
}

/// Tests fetching details for an unknown zone.
///
/// Expected: no selection with "Failed to fetch zone details"
#[tokio::test]
async fn fetch_zone_details_for_unknown_zone_fails() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_fixtures().build().await?;

    test.store.fetch_zone_details(&test.source, "zone-99").await;

    assert!(test.store.zones.selected_zone.is_none());
    assert_eq!(test.store.zones.error(), Some("Failed to fetch zone details"));

    Ok(())
}

/// Tests a status push for a loaded zone.
///
/// Expected: status and density replaced, density capped at 100
#[tokio::test]
async fn update_zone_status_caps_density() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_zones(vec![factory::zone("zone-a", ZoneStatus::Normal, 20)])
        .build()
        .await?;

    let updated = test
        .store
        .zones
        .update_zone_status("zone-a", ZoneStatus::Critical, Some(140));

    assert!(updated);
    let zone = test
        .store
        .zones
        .zone("zone-a")
        .ok_or_else(|| TestError::Missing("zone-a".to_string()))?;
    assert_eq!(zone.status, ZoneStatus::Critical);
    assert_eq!(zone.crowd_density, 100);

    Ok(())
}

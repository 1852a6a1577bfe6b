//! Tests for the event log and its filtered view.

use drishti::model::{
    event::{EventFilters, EventQuery, EventType},
    Severity,
};

use super::*;

fn ids(events: &[drishti::model::event::EventLogEntry]) -> Vec<&str> {
    events.iter().map(|e| e.id.as_str()).collect()
}

/// Tests fetching the fixture event log.
///
/// Expected: three events, all visible without filters
#[tokio::test]
async fn fetch_events_without_filters_shows_all() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;

    test.store
        .fetch_events(&test.source, &EventQuery::default())
        .await;

    assert_eq!(test.store.events.events().len(), 3);
    assert_eq!(test.store.events.filtered_events(), test.store.events.events());

    Ok(())
}

/// Tests the zone and limit query parameters.
///
/// Expected: only zone-2's event
#[tokio::test]
async fn fetch_events_honours_query() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;

    let query = EventQuery {
        limit: Some(1),
        zone_id: Some("zone-2".to_string()),
    };
    test.store.fetch_events(&test.source, &query).await;

    assert_eq!(ids(test.store.events.events()), vec!["event-2"]);

    Ok(())
}

/// Tests filtering by severity and resolution.
///
/// Expected: only event-1 is unresolved and high or critical
#[tokio::test]
async fn severity_and_resolved_filters_select_event_1() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    test.store
        .fetch_events(&test.source, &EventQuery::default())
        .await;

    test.store.events.set_filters(EventFilters {
        severity: vec![Severity::High, Severity::Critical],
        resolved: Some(false),
        ..EventFilters::default()
    });

    assert_eq!(ids(test.store.events.filtered_events()), vec!["event-1"]);

    Ok(())
}

/// Tests that refetching keeps the active filters applied.
///
/// Expected: filtered view recomputed against the new list
#[tokio::test]
async fn refetch_reapplies_filters() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    test.store.events.set_filters(EventFilters {
        event_type: vec![EventType::Anomaly],
        ..EventFilters::default()
    });

    test.store
        .fetch_events(&test.source, &EventQuery::default())
        .await;

    assert_eq!(ids(test.store.events.filtered_events()), vec!["event-3"]);

    test.store.events.clear_filters();
    assert_eq!(test.store.events.filtered_events().len(), 3);

    Ok(())
}

/// Tests resolving an event shown under an unresolved filter.
///
/// Expected: event resolved and dropped from the filtered view
#[tokio::test]
async fn resolve_event_updates_filtered_view() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    test.store
        .fetch_events(&test.source, &EventQuery::default())
        .await;
    test.store.events.set_filters(EventFilters {
        resolved: Some(false),
        ..EventFilters::default()
    });

    test.store.resolve_event(&test.source, "event-1").await;

    assert_eq!(ids(test.store.events.filtered_events()), vec!["event-2"]);
    let event = test
        .store
        .events
        .events()
        .iter()
        .find(|e| e.id == "event-1")
        .ok_or_else(|| TestError::Missing("event-1".to_string()))?;
    assert!(event.resolved);
    assert!(event.resolved_at.is_some());

    Ok(())
}

/// Tests filtering by a time range.
///
/// Expected: only events stamped inside the inclusive range
#[tokio::test]
async fn time_range_filter_is_inclusive() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_events(vec![
            factory::event("e-1", "zone-1", EventType::Alert, Severity::Low, "2024-06-01T10:00:00.000Z"),
            factory::event("e-2", "zone-1", EventType::Alert, Severity::Low, "2024-06-01T11:00:00.000Z"),
            factory::event("e-3", "zone-1", EventType::Alert, Severity::Low, "2024-06-01T12:00:00.000Z"),
        ])
        .build()
        .await?;

    test.store.events.set_filters(EventFilters {
        time_range: Some((
            "2024-06-01T11:00:00.000Z".to_string(),
            "2024-06-01T12:00:00.000Z".to_string(),
        )),
        ..EventFilters::default()
    });

    assert_eq!(ids(test.store.events.filtered_events()), vec!["e-2", "e-3"]);

    Ok(())
}

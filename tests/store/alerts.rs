//! Tests for the unacknowledged alert count across alert actions.

use drishti::{model::Severity, store::alerts::AlertsState};

use super::*;

fn counted(alerts: &AlertsState) -> usize {
    alerts.alerts().iter().filter(|a| !a.acknowledged).count()
}

/// Tests acknowledging an alert through the source.
///
/// Expected: alert acknowledged by the commander, count decremented
#[tokio::test]
async fn acknowledge_alert_records_commander() -> Result<(), TestError> {
    let mut test = TestBuilder::new().authenticated().with_fixtures().build().await?;

    test.store
        .acknowledge_alert(&test.source, "alert-1", "cmd-001")
        .await;

    let alert = test
        .store
        .alerts
        .alert("alert-1")
        .ok_or_else(|| TestError::Missing("alert-1".to_string()))?;
    assert!(alert.acknowledged);
    assert_eq!(alert.acknowledged_by.as_deref(), Some("cmd-001"));
    assert!(alert.acknowledged_at.is_some());
    assert_eq!(test.store.alerts.unacknowledged_count(), 1);

    Ok(())
}

/// Tests acknowledging the same alert twice.
///
/// Expected: count decremented once, first acknowledger kept
#[tokio::test]
async fn double_acknowledge_decrements_once() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_fixtures().build().await?;

    test.store
        .acknowledge_alert(&test.source, "alert-1", "cmd-001")
        .await;
    test.store
        .acknowledge_alert(&test.source, "alert-1", "cmd-002")
        .await;

    let alert = test
        .store
        .alerts
        .alert("alert-1")
        .ok_or_else(|| TestError::Missing("alert-1".to_string()))?;
    assert_eq!(alert.acknowledged_by.as_deref(), Some("cmd-001"));
    assert_eq!(test.store.alerts.unacknowledged_count(), 1);

    Ok(())
}

/// Tests the count invariant through a mixed sequence of alert actions.
///
/// Expected: count equals the number of unacknowledged alerts after every step
#[tokio::test]
async fn count_tracks_unacknowledged_alerts() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_alerts(vec![
            factory::alert("a-1", Severity::High, false),
            factory::alert("a-2", Severity::Low, true),
        ])
        .build()
        .await?;
    let alerts = &mut test.store.alerts;
    assert_eq!(alerts.unacknowledged_count(), counted(alerts));

    alerts.add_alert(factory::alert("a-3", Severity::Critical, false));
    assert_eq!(alerts.unacknowledged_count(), counted(alerts));
    assert_eq!(alerts.alerts()[0].id, "a-3");

    alerts.add_alert(factory::alert("a-4", Severity::Medium, true));
    assert_eq!(alerts.unacknowledged_count(), counted(alerts));

    let removed = alerts.remove_alert("a-1");
    assert!(removed.is_some());
    assert_eq!(alerts.unacknowledged_count(), counted(alerts));

    assert!(alerts.remove_alert("missing").is_none());
    assert_eq!(alerts.unacknowledged_count(), counted(alerts));

    test.store
        .acknowledge_alert(&test.source, "a-3", "cmd-001")
        .await;
    assert_eq!(test.store.alerts.unacknowledged_count(), 0);
    assert_eq!(
        test.store.alerts.unacknowledged_count(),
        counted(&test.store.alerts)
    );

    Ok(())
}

/// Tests a rejected acknowledgement.
///
/// Expected: alert still unacknowledged with "Failed to acknowledge alert"
#[tokio::test]
async fn rejected_acknowledge_keeps_alert_open() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_fixtures().build().await?;

    test.store
        .acknowledge_alert(&FailingSource, "alert-1", "cmd-001")
        .await;

    assert_eq!(test.store.alerts.unacknowledged_count(), 2);
    assert_eq!(test.store.alerts.error(), Some("Failed to acknowledge alert"));

    Ok(())
}

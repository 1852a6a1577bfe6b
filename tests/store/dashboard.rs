//! Tests for the dashboard sections.

use drishti::{
    model::dashboard::MetricsUpdate,
    store::{dashboard::MAX_SUMMARY_ENTRIES, AppStore},
};

use super::*;

/// Tests refreshing all three sections.
///
/// Expected: metrics, analytics and summary loaded, nothing loading
#[tokio::test]
async fn refresh_dashboard_loads_every_section() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;

    test.store.refresh_dashboard(&test.source).await;

    let dashboard = &test.store.dashboard;
    assert!(dashboard.metrics.is_some());
    assert!(dashboard.analytics.is_some());
    assert!(!dashboard.summary_feed().is_empty());
    assert!(!dashboard.is_loading());
    assert_eq!(dashboard.error(), None);

    Ok(())
}

/// Tests that each section fails on its own.
///
/// Expected: each section carries its own message
#[tokio::test]
async fn failed_sections_report_their_own_errors() -> Result<(), TestError> {
    let mut store = AppStore::new();

    store.refresh_dashboard(&FailingSource).await;

    let dashboard = &store.dashboard;
    assert_eq!(
        dashboard.metrics_status.error.as_deref(),
        Some("Failed to fetch dashboard metrics")
    );
    assert_eq!(
        dashboard.analytics_status.error.as_deref(),
        Some("Failed to fetch analytics data")
    );
    assert_eq!(
        dashboard.summary_status.error.as_deref(),
        Some("Failed to fetch summary feed")
    );
    assert!(!dashboard.is_loading());

    Ok(())
}

/// Tests a summary failure while metrics still succeed.
///
/// Expected: metrics loaded, summary error set, metrics status clean
#[tokio::test]
async fn summary_failure_does_not_clobber_metrics() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;

    test.store.fetch_metrics(&test.source).await;
    test.store.fetch_summary_feed(&FailingSource).await;

    let dashboard = &test.store.dashboard;
    assert!(dashboard.metrics.is_some());
    assert_eq!(dashboard.metrics_status.error, None);
    assert_eq!(dashboard.error(), Some("Failed to fetch summary feed"));

    Ok(())
}

/// Tests the summary feed cap with pushed entries.
///
/// Expected: never more than the cap, newest first
#[tokio::test]
async fn summary_feed_is_capped_newest_first() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;

    for i in 0..(MAX_SUMMARY_ENTRIES + 5) {
        test.store.dashboard.add_summary_entry(factory::summary_entry(
            &format!("s-{}", i),
            "zone-1",
            "2024-06-01T12:00:00.000Z",
        ));
    }

    let feed = test.store.dashboard.summary_feed();
    assert_eq!(feed.len(), MAX_SUMMARY_ENTRIES);
    assert_eq!(feed[0].id, format!("s-{}", MAX_SUMMARY_ENTRIES + 4));

    Ok(())
}

/// Tests merging a partial metrics update.
///
/// Expected: only the given counter changes
#[tokio::test]
async fn update_metrics_merges_fields() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    test.store.fetch_metrics(&test.source).await;
    let before = test
        .store
        .dashboard
        .metrics
        .clone()
        .ok_or_else(|| TestError::Missing("metrics".to_string()))?;

    test.store.dashboard.update_metrics(MetricsUpdate {
        active_alerts: Some(before.active_alerts + 1),
        ..MetricsUpdate::default()
    });

    let after = test
        .store
        .dashboard
        .metrics
        .clone()
        .ok_or_else(|| TestError::Missing("metrics".to_string()))?;
    assert_eq!(after.active_alerts, before.active_alerts + 1);
    assert_eq!(after.total_zones, before.total_zones);

    Ok(())
}

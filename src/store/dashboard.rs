//! Aggregate metrics, analytics trends and the summary feed.
//!
//! The three sections load independently, so each owns its own [`FetchStatus`]; one
//! section failing never masks another's loading state.

use crate::{
    model::dashboard::{AnalyticsData, DashboardMetrics, MetricsUpdate, SummaryEntry},
    store::{error::StoreError, status::FetchStatus},
    util::time::now_iso,
};

/// Upper bound on the summary feed length.
pub const MAX_SUMMARY_ENTRIES: usize = 100;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub metrics: Option<DashboardMetrics>,
    pub analytics: Option<AnalyticsData>,
    summary_feed: Vec<SummaryEntry>,
    pub metrics_status: FetchStatus,
    pub analytics_status: FetchStatus,
    pub summary_status: FetchStatus,
    pub last_updated: Option<String>,
}

impl DashboardState {
    /// Newest first.
    pub fn summary_feed(&self) -> &[SummaryEntry] {
        &self.summary_feed
    }

    /// True while any section is loading.
    pub fn is_loading(&self) -> bool {
        self.metrics_status.is_loading
            || self.analytics_status.is_loading
            || self.summary_status.is_loading
    }

    /// First failing section in display order: metrics, analytics, summary feed.
    pub fn error(&self) -> Option<&str> {
        self.metrics_status
            .error
            .as_deref()
            .or(self.analytics_status.error.as_deref())
            .or(self.summary_status.error.as_deref())
    }

    pub fn clear_error(&mut self) {
        self.metrics_status.clear_error();
        self.analytics_status.clear_error();
        self.summary_status.clear_error();
    }

    pub fn metrics_pending(&mut self) {
        self.metrics_status.begin();
    }

    pub fn metrics_settled(&mut self, result: Result<DashboardMetrics, StoreError>) {
        match result {
            Ok(metrics) => {
                self.metrics_status.succeed();
                self.metrics = Some(metrics);
                self.last_updated = Some(now_iso());
            }
            Err(err) => self.metrics_status.fail(&err),
        }
    }

    pub fn analytics_pending(&mut self) {
        self.analytics_status.begin();
    }

    pub fn analytics_settled(&mut self, result: Result<AnalyticsData, StoreError>) {
        match result {
            Ok(analytics) => {
                self.analytics_status.succeed();
                self.analytics = Some(analytics);
                self.last_updated = Some(now_iso());
            }
            Err(err) => self.analytics_status.fail(&err),
        }
    }

    pub fn summary_pending(&mut self) {
        self.summary_status.begin();
    }

    pub fn summary_settled(&mut self, result: Result<Vec<SummaryEntry>, StoreError>) {
        match result {
            Ok(mut feed) => {
                self.summary_status.succeed();
                feed.truncate(MAX_SUMMARY_ENTRIES);
                self.summary_feed = feed;
                self.last_updated = Some(now_iso());
            }
            Err(err) => self.summary_status.fail(&err),
        }
    }

    /// Prepends the entry and drops the oldest beyond the cap.
    pub fn add_summary_entry(&mut self, entry: SummaryEntry) {
        self.summary_feed.insert(0, entry);
        self.summary_feed.truncate(MAX_SUMMARY_ENTRIES);
    }

    /// Merges the present fields into the loaded metrics. Does nothing before the first
    /// successful metrics fetch.
    pub fn update_metrics(&mut self, update: MetricsUpdate) {
        if let Some(metrics) = self.metrics.as_mut() {
            metrics.merge(update);
        }
    }
}

//! Alert list with its unacknowledged counter.
//!
//! The counter is kept in lockstep with the list by every mutation below; the fields are
//! private so nothing else can desynchronise them.

use dioxus_logger::tracing;

use crate::{
    model::{
        alert::{AcknowledgeReceipt, Alert},
        Severity,
    },
    store::{error::StoreError, status::FetchStatus},
    util::time::now_iso,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertsState {
    alerts: Vec<Alert>,
    unacknowledged_count: usize,
    pub status: FetchStatus,
    pub last_updated: Option<String>,
}

impl AlertsState {
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn unacknowledged_count(&self) -> usize {
        self.unacknowledged_count
    }

    pub fn alert(&self, alert_id: &str) -> Option<&Alert> {
        self.alerts.iter().find(|a| a.id == alert_id)
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.status.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.status.clear_error();
    }

    pub fn fetch_pending(&mut self) {
        self.status.begin();
    }

    pub fn fetch_settled(&mut self, result: Result<Vec<Alert>, StoreError>) {
        match result {
            Ok(alerts) => {
                self.status.succeed();
                self.unacknowledged_count = alerts.iter().filter(|a| !a.acknowledged).count();
                self.alerts = alerts;
                self.last_updated = Some(now_iso());
            }
            Err(err) => self.status.fail(&err),
        }
    }

    /// Prepends the alert.
    pub fn add_alert(&mut self, alert: Alert) {
        if !alert.acknowledged {
            self.unacknowledged_count += 1;
        }
        self.alerts.insert(0, alert);
    }

    pub fn remove_alert(&mut self, alert_id: &str) -> Option<Alert> {
        let index = self.alerts.iter().position(|a| a.id == alert_id)?;
        let alert = self.alerts.remove(index);

        if !alert.acknowledged {
            self.unacknowledged_count -= 1;
        }

        Some(alert)
    }

    /// Marks the alert acknowledged by the commander in the receipt.
    ///
    /// Acknowledgement happens once: an alert that is already acknowledged keeps its
    /// original acknowledger and timestamp and the counter is not touched again.
    pub fn acknowledge_settled(&mut self, result: Result<AcknowledgeReceipt, StoreError>) {
        let receipt = match result {
            Ok(receipt) => receipt,
            Err(err) => return self.status.report(&err),
        };

        let Some(alert) = self.alerts.iter_mut().find(|a| a.id == receipt.alert_id) else {
            tracing::warn!(alert_id = %receipt.alert_id, "Ignored acknowledgement of unknown alert");
            return;
        };

        if alert.acknowledged {
            return;
        }

        tracing::debug!(
            alert_id = %alert.id,
            commander_id = %receipt.commander_id,
            "Acknowledged alert"
        );

        alert.acknowledged = true;
        alert.acknowledged_by = Some(receipt.commander_id);
        alert.acknowledged_at = Some(receipt.timestamp);
        self.unacknowledged_count -= 1;
    }

    pub fn update_alert_severity(&mut self, alert_id: &str, severity: Severity) -> bool {
        match self.alerts.iter_mut().find(|a| a.id == alert_id) {
            Some(alert) => {
                alert.severity = severity;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::{model::alert::AlertType, store::fixture};

    fn loaded() -> AlertsState {
        let mut alerts = AlertsState::default();
        alerts.fetch_settled(Ok(fixture::alerts(Utc::now())));
        alerts
    }

    fn counted(alerts: &AlertsState) -> usize {
        alerts.alerts().iter().filter(|a| !a.acknowledged).count()
    }

    fn receipt(alert_id: &str) -> AcknowledgeReceipt {
        AcknowledgeReceipt {
            alert_id: alert_id.to_string(),
            commander_id: "cmd-001".to_string(),
            timestamp: now_iso(),
        }
    }

    fn alert(id: &str, acknowledged: bool) -> Alert {
        Alert {
            id: id.to_string(),
            alert_type: AlertType::Technical,
            title: "Camera offline".to_string(),
            message: "Feed lost".to_string(),
            severity: Severity::Low,
            zone_id: None,
            timestamp: now_iso(),
            acknowledged,
            acknowledged_by: None,
            acknowledged_at: None,
        }
    }

    #[test]
    fn fetch_counts_unacknowledged_alerts() {
        let alerts = loaded();

        assert_eq!(alerts.unacknowledged_count(), 2);
    }

    #[test]
    fn acknowledging_twice_decrements_once() {
        let mut alerts = loaded();

        alerts.acknowledge_settled(Ok(receipt("alert-1")));
        let first = alerts.alert("alert-1").unwrap().clone();
        alerts.acknowledge_settled(Ok(AcknowledgeReceipt {
            commander_id: "cmd-002".to_string(),
            ..receipt("alert-1")
        }));

        assert_eq!(alerts.unacknowledged_count(), 1);
        assert_eq!(alerts.alert("alert-1"), Some(&first));
        assert_eq!(first.acknowledged_by.as_deref(), Some("cmd-001"));
        assert!(first.acknowledged_at.is_some());
    }

    #[test]
    fn counter_tracks_every_mutation() {
        let mut alerts = loaded();
        assert_eq!(alerts.unacknowledged_count(), counted(&alerts));

        alerts.add_alert(alert("alert-3", false));
        assert_eq!(alerts.unacknowledged_count(), counted(&alerts));
        assert_eq!(alerts.alerts()[0].id, "alert-3");

        alerts.add_alert(alert("alert-4", true));
        assert_eq!(alerts.unacknowledged_count(), counted(&alerts));

        alerts.acknowledge_settled(Ok(receipt("alert-2")));
        assert_eq!(alerts.unacknowledged_count(), counted(&alerts));

        alerts.remove_alert("alert-2");
        assert_eq!(alerts.unacknowledged_count(), counted(&alerts));

        alerts.remove_alert("alert-3");
        assert_eq!(alerts.unacknowledged_count(), counted(&alerts));

        assert!(alerts.remove_alert("alert-404").is_none());
        assert_eq!(alerts.unacknowledged_count(), counted(&alerts));
        assert_eq!(alerts.unacknowledged_count(), 1);
    }

    #[test]
    fn severity_update_leaves_counter_alone() {
        let mut alerts = loaded();

        assert!(alerts.update_alert_severity("alert-2", Severity::Critical));

        assert_eq!(alerts.alert("alert-2").unwrap().severity, Severity::Critical);
        assert_eq!(alerts.unacknowledged_count(), 2);
    }

    #[test]
    fn rejected_acknowledgement_changes_nothing_but_error() {
        let mut alerts = loaded();

        alerts.acknowledge_settled(Err(StoreError::AcknowledgeAlert));

        assert_eq!(alerts.unacknowledged_count(), 2);
        assert_eq!(alerts.error(), Some("Failed to acknowledge alert"));
    }
}

//! In-memory sample data and the [`DataSource`] that serves it.
//!
//! Relative timestamps ("five minutes ago") are computed from an anchor instant. The anchor
//! is the current time unless the source was pinned, which keeps fixtures reproducible
//! in tests.

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;

use crate::{
    model::{
        alert::{AcknowledgeReceipt, Alert, AlertType},
        commander::Commander,
        dashboard::{
            AnalyticsData, ChartDataPoint, DashboardMetrics, SummaryEntry, ZoneStatusDistribution,
        },
        event::{EventDetails, EventLogEntry, EventQuery, EventType, ResolveReceipt},
        unit::{DispatchReceipt, DispatchRecommendation, Unit, UnitStatus, UnitType},
        zone::{Zone, ZoneDetails, ZoneStatus},
        Severity,
    },
    store::{error::StoreError, source::DataSource},
    util::time::{iso, offset_iso},
};

/// The only credential pair the fixture backend accepts.
pub const COMMANDER_EMAIL: &str = "commander@drishti.com";
pub const COMMANDER_PASSWORD: &str = "password";

pub const COMMANDER_PERMISSIONS: [&str; 4] = [
    "VIEW_ALL",
    "DISPATCH_UNITS",
    "ACKNOWLEDGE_ALERTS",
    "EXPORT_DATA",
];

/// Serves fixture data with no latency, retry or failure.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixtureSource {
    anchor: Option<DateTime<Utc>>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self { anchor: None }
    }

    /// Source whose relative timestamps are computed from `anchor` instead of the clock.
    pub fn pinned(anchor: DateTime<Utc>) -> Self {
        Self {
            anchor: Some(anchor),
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.anchor.unwrap_or_else(Utc::now)
    }
}

impl DataSource for FixtureSource {
    async fn login(&self, email: &str, password: &str) -> Result<Commander, StoreError> {
        if email == COMMANDER_EMAIL && password == COMMANDER_PASSWORD {
            return Ok(commander(self.now()));
        }

        tracing::debug!(email = %email, "Rejected login with invalid credentials");

        Err(StoreError::AuthenticationFailed)
    }

    async fn logout(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn update_fcm_token(&self, token: &str) -> Result<String, StoreError> {
        Ok(token.to_string())
    }

    async fn fetch_zones(&self) -> Result<Vec<Zone>, StoreError> {
        Ok(zones(self.now()))
    }

    async fn fetch_zone_details(&self, zone_id: &str) -> Result<ZoneDetails, StoreError> {
        let now = self.now();

        let zone = zones(now)
            .into_iter()
            .find(|z| z.id == zone_id)
            .ok_or_else(|| StoreError::FetchZoneDetails(zone_id.to_string()))?;

        Ok(zone_details(zone, now))
    }

    async fn fetch_units(&self) -> Result<Vec<Unit>, StoreError> {
        Ok(units(self.now()))
    }

    async fn dispatch_unit(
        &self,
        unit_id: &str,
        zone_id: &str,
    ) -> Result<DispatchReceipt, StoreError> {
        Ok(DispatchReceipt {
            unit_id: unit_id.to_string(),
            zone_id: zone_id.to_string(),
            timestamp: iso(self.now()),
        })
    }

    async fn fetch_alerts(&self) -> Result<Vec<Alert>, StoreError> {
        Ok(alerts(self.now()))
    }

    async fn acknowledge_alert(
        &self,
        alert_id: &str,
        commander_id: &str,
    ) -> Result<AcknowledgeReceipt, StoreError> {
        Ok(AcknowledgeReceipt {
            alert_id: alert_id.to_string(),
            commander_id: commander_id.to_string(),
            timestamp: iso(self.now()),
        })
    }

    async fn fetch_events(&self, query: &EventQuery) -> Result<Vec<EventLogEntry>, StoreError> {
        let mut events = events(self.now());

        if let Some(zone_id) = query.zone_id.as_deref().filter(|z| !z.is_empty()) {
            events.retain(|e| e.zone_id == zone_id);
        }

        if let Some(limit) = query.limit {
            events.truncate(limit);
        }

        Ok(events)
    }

    async fn resolve_event(&self, event_id: &str) -> Result<ResolveReceipt, StoreError> {
        Ok(ResolveReceipt {
            event_id: event_id.to_string(),
            resolved_at: iso(self.now()),
        })
    }

    async fn fetch_metrics(&self) -> Result<DashboardMetrics, StoreError> {
        Ok(metrics(self.now()))
    }

    async fn fetch_analytics(&self) -> Result<AnalyticsData, StoreError> {
        Ok(analytics())
    }

    async fn fetch_summary_feed(&self) -> Result<Vec<SummaryEntry>, StoreError> {
        Ok(summary_feed(self.now()))
    }
}

pub fn commander(now: DateTime<Utc>) -> Commander {
    Commander {
        id: "cmd-001".to_string(),
        name: "Commander Sarah Johnson".to_string(),
        rank: "Senior Commander".to_string(),
        division: "Central Operations".to_string(),
        fcm_token: None,
        last_active: iso(now),
        permissions: COMMANDER_PERMISSIONS.iter().map(|p| p.to_string()).collect(),
    }
}

fn zone(
    id: &str,
    name: &str,
    coordinates: [f64; 2],
    status: ZoneStatus,
    crowd_density: u8,
    area: u32,
    now: DateTime<Utc>,
) -> Zone {
    Zone {
        id: id.to_string(),
        name: name.to_string(),
        coordinates,
        status,
        crowd_density,
        last_frame: None,
        last_updated: iso(now),
        area: Some(area),
    }
}

pub fn zones(now: DateTime<Utc>) -> Vec<Zone> {
    vec![
        zone("zone-1", "Central Plaza", [28.6139, 77.2090], ZoneStatus::Bottleneck, 85, 2500, now),
        zone("zone-2", "North Gate", [28.6180, 77.2100], ZoneStatus::Normal, 45, 1800, now),
        zone("zone-3", "South Entrance", [28.6100, 77.2080], ZoneStatus::Anomaly, 62, 2100, now),
        zone("zone-4", "West Corridor", [28.6120, 77.2050], ZoneStatus::Normal, 38, 1600, now),
        zone("zone-5", "East Wing", [28.6160, 77.2120], ZoneStatus::Anomaly, 71, 2200, now),
    ]
}

/// Synthesizes the details view of a zone: a status summary, one recent anomaly and the
/// closest available unit.
pub fn zone_details(zone: Zone, now: DateTime<Utc>) -> ZoneDetails {
    let summary = format!(
        "Zone {} is currently experiencing {} conditions with {}% capacity.",
        zone.name, zone.status, zone.crowd_density
    );

    let events = vec![EventLogEntry {
        id: "1".to_string(),
        timestamp: iso(now),
        zone_id: zone.id.clone(),
        event_type: EventType::Anomaly,
        severity: Severity::Medium,
        description: "Unusual crowd pattern detected".to_string(),
        details: None,
        unit_id: None,
        resolved: false,
        resolved_at: None,
    }];

    let nearby_units = vec![Unit {
        id: "unit-1".to_string(),
        unit_type: UnitType::Police,
        name: "Police Unit Alpha".to_string(),
        status: UnitStatus::Available,
        location: [zone.coordinates[0] + 0.001, zone.coordinates[1] + 0.001],
        estimated_arrival: None,
        assigned_zone: None,
        last_updated: iso(now),
    }];

    ZoneDetails {
        zone,
        summary,
        events,
        nearby_units,
    }
}

pub fn units(now: DateTime<Utc>) -> Vec<Unit> {
    vec![
        Unit {
            id: "unit-1".to_string(),
            unit_type: UnitType::Police,
            name: "Police Unit Alpha".to_string(),
            status: UnitStatus::Available,
            location: [28.6140, 77.2095],
            estimated_arrival: None,
            assigned_zone: None,
            last_updated: iso(now),
        },
        Unit {
            id: "unit-2".to_string(),
            unit_type: UnitType::Medical,
            name: "Medical Team Beta".to_string(),
            status: UnitStatus::Dispatched,
            location: [28.6150, 77.2080],
            estimated_arrival: Some(offset_iso(now, 8)),
            assigned_zone: Some("zone-1".to_string()),
            last_updated: iso(now),
        },
        Unit {
            id: "unit-3".to_string(),
            unit_type: UnitType::Fire,
            name: "Fire Unit Gamma".to_string(),
            status: UnitStatus::Available,
            location: [28.6110, 77.2110],
            estimated_arrival: None,
            assigned_zone: None,
            last_updated: iso(now),
        },
        Unit {
            id: "unit-4".to_string(),
            unit_type: UnitType::Security,
            name: "Security Team Delta".to_string(),
            status: UnitStatus::Busy,
            location: [28.6170, 77.2070],
            estimated_arrival: None,
            assigned_zone: Some("zone-3".to_string()),
            last_updated: iso(now),
        },
    ]
}

/// Standing advice shown on the dispatch console: send the medical team to the plaza.
pub fn recommendations(now: DateTime<Utc>) -> Vec<DispatchRecommendation> {
    let recommended_units = units(now)
        .into_iter()
        .filter(|u| u.id == "unit-2")
        .collect();

    vec![DispatchRecommendation {
        zone_id: "zone-1".to_string(),
        recommended_units,
        priority: Severity::High,
        reason: "Central Plaza bottleneck at 85% capacity".to_string(),
        estimated_response_time: 8,
    }]
}

pub fn alerts(now: DateTime<Utc>) -> Vec<Alert> {
    vec![
        Alert {
            id: "alert-1".to_string(),
            alert_type: AlertType::Crowd,
            title: "High Crowd Density Alert".to_string(),
            message: "Central Plaza is experiencing unusually high crowd density".to_string(),
            severity: Severity::High,
            zone_id: Some("zone-1".to_string()),
            timestamp: iso(now),
            acknowledged: false,
            acknowledged_by: None,
            acknowledged_at: None,
        },
        Alert {
            id: "alert-2".to_string(),
            alert_type: AlertType::Security,
            title: "Suspicious Activity".to_string(),
            message: "Unusual patterns detected in East Wing security cameras".to_string(),
            severity: Severity::Medium,
            zone_id: Some("zone-5".to_string()),
            timestamp: offset_iso(now, -2),
            acknowledged: false,
            acknowledged_by: None,
            acknowledged_at: None,
        },
    ]
}

pub fn events(now: DateTime<Utc>) -> Vec<EventLogEntry> {
    vec![
        EventLogEntry {
            id: "event-1".to_string(),
            timestamp: iso(now),
            zone_id: "zone-1".to_string(),
            event_type: EventType::Bottleneck,
            severity: Severity::High,
            description: "Crowd bottleneck detected at Central Plaza entrance".to_string(),
            details: Some(EventDetails::Bottleneck {
                crowd_density: 85,
                camera_id: "cam-001".to_string(),
            }),
            unit_id: None,
            resolved: false,
            resolved_at: None,
        },
        EventLogEntry {
            id: "event-2".to_string(),
            timestamp: offset_iso(now, -5),
            zone_id: "zone-2".to_string(),
            event_type: EventType::Dispatch,
            severity: Severity::Medium,
            description: "Medical unit dispatched to North Gate".to_string(),
            details: Some(EventDetails::Dispatch {
                unit_id: "unit-2".to_string(),
                eta: "8 minutes".to_string(),
            }),
            unit_id: Some("unit-2".to_string()),
            resolved: false,
            resolved_at: None,
        },
        EventLogEntry {
            id: "event-3".to_string(),
            timestamp: offset_iso(now, -10),
            zone_id: "zone-3".to_string(),
            event_type: EventType::Anomaly,
            severity: Severity::Medium,
            description: "Unusual crowd pattern detected in South Entrance".to_string(),
            details: Some(EventDetails::Anomaly {
                confidence: 0.85,
                pattern: "circular_movement".to_string(),
            }),
            unit_id: None,
            resolved: true,
            resolved_at: Some(offset_iso(now, -2)),
        },
    ]
}

pub fn metrics(now: DateTime<Utc>) -> DashboardMetrics {
    DashboardMetrics {
        total_zones: 12,
        bottlenecks: 3,
        anomalies: 5,
        units_dispatched: 8,
        active_alerts: 2,
        last_updated: iso(now),
    }
}

fn series(points: [(&str, f64); 5]) -> Vec<ChartDataPoint> {
    points
        .iter()
        .map(|(timestamp, value)| ChartDataPoint {
            timestamp: timestamp.to_string(),
            value: *value,
            label: None,
        })
        .collect()
}

pub fn analytics() -> AnalyticsData {
    AnalyticsData {
        crowd_density_trend: series([
            ("10:00", 45.0),
            ("10:30", 52.0),
            ("11:00", 68.0),
            ("11:30", 73.0),
            ("12:00", 85.0),
        ]),
        anomaly_trend: series([
            ("10:00", 2.0),
            ("10:30", 3.0),
            ("11:00", 5.0),
            ("11:30", 4.0),
            ("12:00", 6.0),
        ]),
        dispatch_trend: series([
            ("10:00", 1.0),
            ("10:30", 2.0),
            ("11:00", 3.0),
            ("11:30", 2.0),
            ("12:00", 4.0),
        ]),
        zone_status_distribution: ZoneStatusDistribution {
            normal: 7,
            anomaly: 3,
            bottleneck: 2,
            critical: 0,
        },
    }
}

pub fn summary_feed(now: DateTime<Utc>) -> Vec<SummaryEntry> {
    vec![
        SummaryEntry {
            id: "1".to_string(),
            timestamp: iso(now),
            zone_id: "zone-1".to_string(),
            zone_name: "Central Plaza".to_string(),
            combined_summary: "High crowd density detected with minor anomalies".to_string(),
            crowd_density: 85,
            anomaly_count: 2,
            severity: Severity::High,
            status: ZoneStatus::Bottleneck,
        },
        SummaryEntry {
            id: "2".to_string(),
            timestamp: offset_iso(now, -5),
            zone_id: "zone-2".to_string(),
            zone_name: "North Gate".to_string(),
            combined_summary: "Normal crowd flow, no incidents reported".to_string(),
            crowd_density: 45,
            anomaly_count: 0,
            severity: Severity::Low,
            status: ZoneStatus::Normal,
        },
    ]
}

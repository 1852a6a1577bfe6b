//! Factory functions for building entities with standard test values.
//!
//! Every entity is stamped with [`TEST_ANCHOR_RFC3339`](crate::constant::TEST_ANCHOR_RFC3339)
//! unless the function takes a timestamp, so comparisons in tests stay deterministic.

use drishti::model::{
    alert::{Alert, AlertType},
    commander::Commander,
    dashboard::SummaryEntry,
    event::{EventDetails, EventLogEntry, EventType},
    unit::{DispatchRecommendation, Unit, UnitStatus, UnitType},
    zone::{Zone, ZoneStatus},
    Severity,
};

use crate::constant::TEST_ANCHOR_RFC3339;

/// Create a commander with every permission the dashboard checks.
pub fn commander(id: &str) -> Commander {
    Commander {
        id: id.to_string(),
        name: "Test Commander".to_string(),
        rank: "Inspector".to_string(),
        division: "Test Division".to_string(),
        fcm_token: None,
        last_active: TEST_ANCHOR_RFC3339.to_string(),
        permissions: vec![
            "view_all".to_string(),
            "dispatch_units".to_string(),
            "manage_alerts".to_string(),
        ],
    }
}

/// Create a zone with the given status and crowd density.
///
/// # Arguments
/// - `id` - Zone identifier, also used to derive the name
/// - `status` - Current zone status
/// - `crowd_density` - Density percentage, 0..=100
pub fn zone(id: &str, status: ZoneStatus, crowd_density: u8) -> Zone {
    Zone {
        id: id.to_string(),
        name: format!("Zone {}", id),
        coordinates: [28.6139, 77.2090],
        status,
        crowd_density,
        last_frame: None,
        last_updated: TEST_ANCHOR_RFC3339.to_string(),
        area: Some(1000),
    }
}

/// Create a police unit with the given status.
pub fn unit(id: &str, status: UnitStatus) -> Unit {
    Unit {
        id: id.to_string(),
        unit_type: UnitType::Police,
        name: format!("Unit {}", id),
        status,
        location: [28.6129, 77.2295],
        estimated_arrival: None,
        assigned_zone: None,
        last_updated: TEST_ANCHOR_RFC3339.to_string(),
    }
}

pub fn recommendation(zone_id: &str, units: Vec<Unit>, priority: Severity) -> DispatchRecommendation {
    DispatchRecommendation {
        zone_id: zone_id.to_string(),
        recommended_units: units,
        priority,
        reason: "Crowd density rising".to_string(),
        estimated_response_time: 8,
    }
}

/// Create a crowd alert.
///
/// # Arguments
/// - `id` - Alert identifier
/// - `severity` - Alert severity
/// - `acknowledged` - Whether the alert starts acknowledged
pub fn alert(id: &str, severity: Severity, acknowledged: bool) -> Alert {
    Alert {
        id: id.to_string(),
        alert_type: AlertType::Crowd,
        title: format!("Alert {}", id),
        message: "Crowd density above threshold".to_string(),
        severity,
        zone_id: Some("zone-1".to_string()),
        timestamp: TEST_ANCHOR_RFC3339.to_string(),
        acknowledged,
        acknowledged_by: acknowledged.then(|| "cmd-001".to_string()),
        acknowledged_at: acknowledged.then(|| TEST_ANCHOR_RFC3339.to_string()),
    }
}

/// Create an event log entry whose details match its type.
///
/// # Arguments
/// - `id` - Event identifier
/// - `zone_id` - Zone the event happened in
/// - `event_type` - Kind of event; picks the details variant
/// - `severity` - Event severity
/// - `timestamp` - ISO 8601 timestamp used by time range filters
pub fn event(
    id: &str,
    zone_id: &str,
    event_type: EventType,
    severity: Severity,
    timestamp: &str,
) -> EventLogEntry {
    let details = match event_type {
        EventType::Bottleneck => EventDetails::Bottleneck {
            crowd_density: 85,
            camera_id: "CAM-1".to_string(),
        },
        EventType::Anomaly => EventDetails::Anomaly {
            confidence: 0.9,
            pattern: "sudden_dispersal".to_string(),
        },
        EventType::Dispatch => EventDetails::Dispatch {
            unit_id: "unit-1".to_string(),
            eta: "5 min".to_string(),
        },
        EventType::Alert => EventDetails::Alert {
            alert_id: "alert-1".to_string(),
        },
        EventType::Resolution => EventDetails::Resolution {
            resolved_by: "cmd-001".to_string(),
            note: "Cleared".to_string(),
        },
    };

    EventLogEntry {
        id: id.to_string(),
        timestamp: timestamp.to_string(),
        zone_id: zone_id.to_string(),
        event_type,
        severity,
        description: format!("Event {}", id),
        details: Some(details),
        unit_id: None,
        resolved: false,
        resolved_at: None,
    }
}

/// Create a summary feed entry for `zone_id`.
pub fn summary_entry(id: &str, zone_id: &str, timestamp: &str) -> SummaryEntry {
    SummaryEntry {
        id: id.to_string(),
        timestamp: timestamp.to_string(),
        zone_id: zone_id.to_string(),
        zone_name: format!("Zone {}", zone_id),
        combined_summary: "Steady flow".to_string(),
        crowd_density: 40,
        anomaly_count: 0,
        severity: Severity::Low,
        status: ZoneStatus::Normal,
    }
}

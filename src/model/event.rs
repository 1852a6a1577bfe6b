use serde::{Deserialize, Serialize};

use crate::model::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Bottleneck,
    Anomaly,
    Dispatch,
    Alert,
    Resolution,
}

impl EventType {
    pub const ALL: [EventType; 5] = [
        EventType::Bottleneck,
        EventType::Anomaly,
        EventType::Dispatch,
        EventType::Alert,
        EventType::Resolution,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bottleneck => "bottleneck",
            Self::Anomaly => "anomaly",
            Self::Dispatch => "dispatch",
            Self::Alert => "alert",
            Self::Resolution => "resolution",
        }
    }
}

/// Type-specific payload attached to an event log entry.
///
/// Serialized without a tag: the owning entry's `type` already names the variant and
/// every variant has a distinct set of required fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(untagged)]
pub enum EventDetails {
    Bottleneck {
        #[serde(rename = "crowdDensity")]
        crowd_density: u8,
        #[serde(rename = "cameraId")]
        camera_id: String,
    },
    Anomaly {
        confidence: f64,
        pattern: String,
    },
    Dispatch {
        #[serde(rename = "unitId")]
        unit_id: String,
        eta: String,
    },
    Alert {
        #[serde(rename = "alertId")]
        alert_id: String,
    },
    Resolution {
        #[serde(rename = "resolvedBy")]
        resolved_by: String,
        note: String,
    },
}

impl EventDetails {
    pub fn event_type(&self) -> EventType {
        match self {
            Self::Bottleneck { .. } => EventType::Bottleneck,
            Self::Anomaly { .. } => EventType::Anomaly,
            Self::Dispatch { .. } => EventType::Dispatch,
            Self::Alert { .. } => EventType::Alert,
            Self::Resolution { .. } => EventType::Resolution,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EventLogEntry {
    pub id: String,
    /// ISO-8601, compared lexicographically by the event filter
    pub timestamp: String,
    pub zone_id: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub severity: Severity,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<EventDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<String>,
    #[serde(default)]
    pub resolved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<String>,
}

impl EventLogEntry {
    /// Whether the attached details, if any, belong to this entry's event type.
    pub fn details_match_type(&self) -> bool {
        self.details
            .as_ref()
            .map_or(true, |details| details.event_type() == self.event_type)
    }
}

/// Optional narrowing applied when fetching the event log
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(
    feature = "server",
    derive(utoipa::IntoParams),
    into_params(parameter_in = Query)
)]
#[serde(rename_all = "camelCase")]
pub struct EventQuery {
    pub limit: Option<usize>,
    pub zone_id: Option<String>,
}

/// Criteria the events slice projects its list through.
///
/// Dimensions combine with AND; list dimensions match by membership and an empty list
/// places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFilters {
    pub zone_id: Option<String>,
    #[serde(default)]
    pub severity: Vec<Severity>,
    #[serde(default, rename = "type")]
    pub event_type: Vec<EventType>,
    /// Inclusive `(start, end)` bounds on the ISO-8601 timestamp
    pub time_range: Option<(String, String)>,
    pub resolved: Option<bool>,
}

impl EventFilters {
    pub fn is_empty(&self) -> bool {
        self.zone_id.as_deref().map_or(true, str::is_empty)
            && self.severity.is_empty()
            && self.event_type.is_empty()
            && self.time_range.is_none()
            && self.resolved.is_none()
    }
}

/// Confirmation returned when an event has been resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ResolveReceipt {
    pub event_id: String,
    pub resolved_at: String,
}

use serde::{Deserialize, Serialize};

use crate::model::{event::EventLogEntry, unit::Unit, Coordinates};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ZoneStatus {
    Normal,
    Anomaly,
    Bottleneck,
    Critical,
}

impl ZoneStatus {
    pub const ALL: [ZoneStatus; 4] = [
        ZoneStatus::Normal,
        ZoneStatus::Anomaly,
        ZoneStatus::Bottleneck,
        ZoneStatus::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Anomaly => "anomaly",
            Self::Bottleneck => "bottleneck",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for ZoneStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A monitored physical area with a crowd-density reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "server", schema(value_type = Vec<f64>))]
    pub coordinates: Coordinates,
    pub status: ZoneStatus,
    /// Percentage of capacity, 0 to 100.
    pub crowd_density: u8,
    /// URL of the last captured frame
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_frame: Option<String>,
    pub last_updated: String,
    /// Square meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ZoneDetails {
    #[serde(flatten)]
    pub zone: Zone,
    pub summary: String,
    pub events: Vec<EventLogEntry>,
    pub nearby_units: Vec<Unit>,
}

use serde::{Deserialize, Serialize};

use crate::model::{Coordinates, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    Police,
    Medical,
    Fire,
    Security,
}

impl UnitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Police => "police",
            Self::Medical => "medical",
            Self::Fire => "fire",
            Self::Security => "security",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum UnitStatus {
    Available,
    Dispatched,
    Busy,
    Offline,
}

impl UnitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Dispatched => "dispatched",
            Self::Busy => "busy",
            Self::Offline => "offline",
        }
    }
}

/// A deployable response team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: String,
    #[serde(rename = "type")]
    pub unit_type: UnitType,
    pub name: String,
    pub status: UnitStatus,
    #[cfg_attr(feature = "server", schema(value_type = Vec<f64>))]
    pub location: Coordinates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_arrival: Option<String>,
    /// Zone id the unit is bound to. Not checked against the zone collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_zone: Option<String>,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DispatchRecommendation {
    pub zone_id: String,
    pub recommended_units: Vec<Unit>,
    pub priority: Severity,
    pub reason: String,
    /// Minutes
    pub estimated_response_time: u32,
}

/// Confirmation returned when a unit has been dispatched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DispatchReceipt {
    pub unit_id: String,
    pub zone_id: String,
    pub timestamp: String,
}

use serde::{Deserialize, Serialize};

use crate::model::{zone::ZoneStatus, Coordinates, Severity};

/// Map centre used until the operator pans, New Delhi.
pub const DEFAULT_MAP_CENTER: Coordinates = [28.6139, 77.2090];
pub const DEFAULT_MAP_ZOOM: u8 = 12;
pub const MIN_MAP_ZOOM: u8 = 8;
pub const MAX_MAP_ZOOM: u8 = 18;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: Coordinates,
    pub zoom: u8,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: DEFAULT_MAP_CENTER,
            zoom: DEFAULT_MAP_ZOOM,
        }
    }
}

/// Filter selections mirrored in the UI controls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default)]
    pub severity: Vec<Severity>,
    #[serde(default)]
    pub status: Vec<ZoneStatus>,
    pub time_range: Option<(String, String)>,
}

//! Domain types shared by the store, the views and the JSON API.
//!
//! All types serialize with camelCase field names so that any backend serving the
//! dashboard honours the same entity shapes.

pub mod alert;
pub mod api;
pub mod commander;
pub mod dashboard;
pub mod event;
pub mod ui;
pub mod unit;
pub mod upload;
pub mod zone;

use serde::{Deserialize, Serialize};

/// Latitude and longitude pair, in that order.
pub type Coordinates = [f64; 2];

/// Severity shared by alerts, events, summaries and dispatch recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

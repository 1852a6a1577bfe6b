use serde::{Deserialize, Serialize};

use crate::model::{zone::ZoneStatus, Severity};

/// Per-zone status snapshot in the summary feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SummaryEntry {
    pub id: String,
    pub timestamp: String,
    pub zone_id: String,
    pub zone_name: String,
    pub combined_summary: String,
    pub crowd_density: u8,
    pub anomaly_count: u32,
    pub severity: Severity,
    pub status: ZoneStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_zones: u32,
    pub bottlenecks: u32,
    pub anomalies: u32,
    pub units_dispatched: u32,
    pub active_alerts: u32,
    pub last_updated: String,
}

/// Partial update merged into the current metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsUpdate {
    pub total_zones: Option<u32>,
    pub bottlenecks: Option<u32>,
    pub anomalies: Option<u32>,
    pub units_dispatched: Option<u32>,
    pub active_alerts: Option<u32>,
    pub last_updated: Option<String>,
}

impl DashboardMetrics {
    pub fn merge(&mut self, update: MetricsUpdate) {
        if let Some(total_zones) = update.total_zones {
            self.total_zones = total_zones;
        }
        if let Some(bottlenecks) = update.bottlenecks {
            self.bottlenecks = bottlenecks;
        }
        if let Some(anomalies) = update.anomalies {
            self.anomalies = anomalies;
        }
        if let Some(units_dispatched) = update.units_dispatched {
            self.units_dispatched = units_dispatched;
        }
        if let Some(active_alerts) = update.active_alerts {
            self.active_alerts = active_alerts;
        }
        if let Some(last_updated) = update.last_updated {
            self.last_updated = last_updated;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ChartDataPoint {
    pub timestamp: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ZoneStatusDistribution {
    pub normal: u32,
    pub anomaly: u32,
    pub bottleneck: u32,
    pub critical: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    pub crowd_density_trend: Vec<ChartDataPoint>,
    pub anomaly_trend: Vec<ChartDataPoint>,
    pub dispatch_trend: Vec<ChartDataPoint>,
    pub zone_status_distribution: ZoneStatusDistribution,
}

use chrono::Utc;
use dioxus_logger::tracing;

use crate::{
    model::{
        unit::{DispatchReceipt, DispatchRecommendation, Unit, UnitStatus},
        Coordinates,
    },
    store::{error::StoreError, status::FetchStatus},
    util::time::{now_iso, offset_iso, offset_timestamp},
};

/// Minutes between dispatch and the estimated arrival written on the unit.
pub const DISPATCH_ETA_MINUTES: i64 = 10;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitsState {
    pub units: Vec<Unit>,
    pub recommendations: Vec<DispatchRecommendation>,
    pub status: FetchStatus,
    pub last_updated: Option<String>,
}

impl UnitsState {
    pub fn is_loading(&self) -> bool {
        self.status.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.status.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.status.clear_error();
    }

    pub fn unit(&self, unit_id: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == unit_id)
    }

    pub fn count_with_status(&self, status: UnitStatus) -> usize {
        self.units.iter().filter(|u| u.status == status).count()
    }

    pub fn fetch_pending(&mut self) {
        self.status.begin();
    }

    pub fn fetch_settled(&mut self, result: Result<Vec<Unit>, StoreError>) {
        match result {
            Ok(units) => {
                self.status.succeed();
                self.units = units;
                self.last_updated = Some(now_iso());
            }
            Err(err) => self.status.fail(&err),
        }
    }

    /// Binds the unit to the zone and marks it dispatched.
    ///
    /// Applies regardless of the unit's prior status: a unit already dispatched elsewhere
    /// is re-bound to the new zone. The overwrite is logged, not prevented.
    pub fn dispatch_settled(&mut self, result: Result<DispatchReceipt, StoreError>) {
        let receipt = match result {
            Ok(receipt) => receipt,
            Err(err) => return self.status.report(&err),
        };

        let Some(unit) = self.units.iter_mut().find(|u| u.id == receipt.unit_id) else {
            tracing::warn!(unit_id = %receipt.unit_id, "Ignored dispatch of unknown unit");
            return;
        };

        if unit.status == UnitStatus::Dispatched {
            tracing::warn!(
                unit_id = %unit.id,
                previous_zone = ?unit.assigned_zone,
                zone_id = %receipt.zone_id,
                "Re-dispatching a unit that is already dispatched"
            );
        } else {
            tracing::debug!(unit_id = %unit.id, zone_id = %receipt.zone_id, "Dispatched unit");
        }

        // Arrival is measured from the dispatch time the source reported.
        let eta = offset_timestamp(&receipt.timestamp, DISPATCH_ETA_MINUTES).unwrap_or_else(|| {
            tracing::warn!(timestamp = %receipt.timestamp, "Dispatch receipt has an unreadable timestamp");
            offset_iso(Utc::now(), DISPATCH_ETA_MINUTES)
        });

        unit.status = UnitStatus::Dispatched;
        unit.assigned_zone = Some(receipt.zone_id);
        unit.estimated_arrival = Some(eta);
        unit.last_updated = now_iso();
    }

    pub fn update_unit_status(
        &mut self,
        unit_id: &str,
        status: UnitStatus,
        location: Option<Coordinates>,
    ) -> bool {
        let Some(unit) = self.units.iter_mut().find(|u| u.id == unit_id) else {
            return false;
        };

        unit.status = status;
        if let Some(location) = location {
            unit.location = location;
        }
        unit.last_updated = now_iso();

        true
    }

    pub fn add_recommendation(&mut self, recommendation: DispatchRecommendation) {
        self.recommendations.push(recommendation);
    }

    /// Drops every recommendation for the zone.
    pub fn remove_recommendation(&mut self, zone_id: &str) {
        self.recommendations.retain(|r| r.zone_id != zone_id);
    }
}

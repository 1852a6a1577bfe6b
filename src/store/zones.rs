use dioxus_logger::tracing;

use crate::{
    model::zone::{Zone, ZoneDetails, ZoneStatus},
    store::{error::StoreError, status::FetchStatus},
    util::time::now_iso,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZonesState {
    pub zones: Vec<Zone>,
    pub selected_zone: Option<ZoneDetails>,
    pub status: FetchStatus,
    pub last_updated: Option<String>,
}

impl ZonesState {
    pub fn is_loading(&self) -> bool {
        self.status.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.status.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.status.clear_error();
    }

    pub fn zone(&self, zone_id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == zone_id)
    }

    pub fn fetch_pending(&mut self) {
        self.status.begin();
    }

    /// Replaces the whole collection on success.
    pub fn fetch_settled(&mut self, result: Result<Vec<Zone>, StoreError>) {
        match result {
            Ok(zones) => {
                self.status.succeed();
                self.zones = zones;
                self.last_updated = Some(now_iso());
            }
            Err(err) => self.status.fail(&err),
        }
    }

    pub fn details_pending(&mut self) {
        self.status.begin();
    }

    pub fn details_settled(&mut self, result: Result<ZoneDetails, StoreError>) {
        match result {
            Ok(details) => {
                self.status.succeed();
                self.selected_zone = Some(details);
            }
            Err(err) => self.status.fail(&err),
        }
    }

    pub fn clear_selected_zone(&mut self) {
        self.selected_zone = None;
    }

    /// Updates a zone's status, and its density when given, in place.
    ///
    /// Density is capped at 100. Returns false when no zone has the id.
    pub fn update_zone_status(
        &mut self,
        zone_id: &str,
        status: ZoneStatus,
        crowd_density: Option<u8>,
    ) -> bool {
        let Some(zone) = self.zones.iter_mut().find(|z| z.id == zone_id) else {
            tracing::warn!(zone_id = %zone_id, "Ignored status update for unknown zone");
            return false;
        };

        zone.status = status;
        if let Some(crowd_density) = crowd_density {
            zone.crowd_density = crowd_density.min(100);
        }
        zone.last_updated = now_iso();

        true
    }
}

//! Projection of the event log through [`EventFilters`].

use crate::model::event::{EventFilters, EventLogEntry};

impl EventFilters {
    /// Whether `event` satisfies every constrained dimension.
    ///
    /// Timestamps are compared as strings; bounds are inclusive.
    pub fn matches(&self, event: &EventLogEntry) -> bool {
        if let Some(zone_id) = self.zone_id.as_deref().filter(|z| !z.is_empty()) {
            if event.zone_id != zone_id {
                return false;
            }
        }

        if !self.severity.is_empty() && !self.severity.contains(&event.severity) {
            return false;
        }

        if !self.event_type.is_empty() && !self.event_type.contains(&event.event_type) {
            return false;
        }

        if let Some(resolved) = self.resolved {
            if event.resolved != resolved {
                return false;
            }
        }

        if let Some((start, end)) = &self.time_range {
            if event.timestamp.as_str() < start.as_str() || event.timestamp.as_str() > end.as_str()
            {
                return false;
            }
        }

        true
    }
}

/// Returns the events matching `filters`, preserving their order. `events` is untouched.
pub fn apply_filters(events: &[EventLogEntry], filters: &EventFilters) -> Vec<EventLogEntry> {
    events
        .iter()
        .filter(|event| filters.matches(event))
        .cloned()
        .collect()
}

//! Event log and its filtered projection.
//!
//! `filtered_events` is recomputed from the full list and the current filters after every
//! mutation of either. It is never edited directly.

use dioxus_logger::tracing;

use crate::{
    model::event::{EventFilters, EventLogEntry, ResolveReceipt},
    store::{error::StoreError, filter::apply_filters, status::FetchStatus},
    util::time::now_iso,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventsState {
    events: Vec<EventLogEntry>,
    filtered_events: Vec<EventLogEntry>,
    filters: EventFilters,
    pub status: FetchStatus,
    pub last_updated: Option<String>,
}

impl EventsState {
    pub fn events(&self) -> &[EventLogEntry] {
        &self.events
    }

    pub fn filtered_events(&self) -> &[EventLogEntry] {
        &self.filtered_events
    }

    pub fn filters(&self) -> &EventFilters {
        &self.filters
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.status.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.status.clear_error();
    }

    fn refilter(&mut self) {
        self.filtered_events = apply_filters(&self.events, &self.filters);
    }

    pub fn fetch_pending(&mut self) {
        self.status.begin();
    }

    pub fn fetch_settled(&mut self, result: Result<Vec<EventLogEntry>, StoreError>) {
        match result {
            Ok(events) => {
                self.status.succeed();
                self.events = events;
                self.refilter();
                self.last_updated = Some(now_iso());
            }
            Err(err) => self.status.fail(&err),
        }
    }

    /// Marks the event resolved. An event that is already resolved keeps its first
    /// resolution time.
    pub fn resolve_settled(&mut self, result: Result<ResolveReceipt, StoreError>) {
        let receipt = match result {
            Ok(receipt) => receipt,
            Err(err) => return self.status.report(&err),
        };

        match self.events.iter_mut().find(|e| e.id == receipt.event_id) {
            Some(event) if !event.resolved => {
                event.resolved = true;
                event.resolved_at = Some(receipt.resolved_at);
            }
            Some(_) => {}
            None => {
                tracing::warn!(event_id = %receipt.event_id, "Ignored resolution of unknown event")
            }
        }

        self.refilter();
    }

    /// Prepends the entry.
    pub fn add_event(&mut self, event: EventLogEntry) {
        if !event.details_match_type() {
            tracing::warn!(event_id = %event.id, "Event details do not match its type");
        }

        self.events.insert(0, event);
        self.refilter();
    }

    pub fn set_filters(&mut self, filters: EventFilters) {
        self.filters = filters;
        self.refilter();
    }

    pub fn clear_filters(&mut self) {
        self.set_filters(EventFilters::default());
    }
}

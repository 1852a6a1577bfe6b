use dioxus_logger::tracing;

use crate::store::error::StoreError;

/// Progress of one asynchronous operation family within a slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchStatus {
    pub is_loading: bool,
    pub error: Option<String>,
}

impl FetchStatus {
    /// Marks the operation as in flight and clears the previous error.
    pub fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub fn succeed(&mut self) {
        self.is_loading = false;
    }

    /// Settles a rejected fetch.
    pub fn fail(&mut self, err: &StoreError) {
        tracing::warn!("{}", err);

        self.is_loading = false;
        self.error = Some(err.to_string());
    }

    /// Records a rejected mutation without touching the loading flag, which belongs to
    /// whichever fetch may still be in flight.
    pub fn report(&mut self, err: &StoreError) {
        tracing::warn!("{}", err);

        self.error = Some(err.to_string());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

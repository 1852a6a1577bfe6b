//! Commander session: anonymous until a login succeeds, anonymous again after logout.

use chrono::Utc;
use dioxus_logger::tracing;

use crate::{
    model::commander::Commander,
    store::{error::StoreError, status::FetchStatus},
    util::time::{now_iso, offset_iso},
};

/// Activity within this many minutes of the recorded `last_active` is not recorded again.
pub const ACTIVITY_RESOLUTION_MINUTES: i64 = 1;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub commander: Option<Commander>,
    pub status: FetchStatus,
}

impl AuthState {
    pub fn is_loading(&self) -> bool {
        self.status.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.status.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.status.clear_error();
    }

    pub fn login_pending(&mut self) {
        self.status.begin();
    }

    /// A rejected login leaves the session as it was.
    pub fn login_settled(&mut self, result: Result<Commander, StoreError>) {
        match result {
            Ok(commander) => {
                tracing::debug!(commander_id = %commander.id, "Commander logged in");

                self.status.succeed();
                self.is_authenticated = true;
                self.commander = Some(commander);
            }
            Err(err) => self.status.fail(&err),
        }
    }

    pub fn logout_settled(&mut self, result: Result<(), StoreError>) {
        match result {
            Ok(()) => {
                self.is_authenticated = false;
                self.commander = None;
                self.status = FetchStatus::default();
            }
            Err(err) => self.status.report(&err),
        }
    }

    /// Stores the push notification token on the current commander, if any.
    pub fn fcm_token_settled(&mut self, result: Result<String, StoreError>) {
        match result {
            Ok(token) => {
                if let Some(commander) = self.commander.as_mut() {
                    commander.fcm_token = Some(token);
                }
            }
            Err(err) => self.status.report(&err),
        }
    }

    pub fn update_last_active(&mut self) {
        if let Some(commander) = self.commander.as_mut() {
            commander.last_active = now_iso();
        }
    }

    /// Whether the signed-in commander's `last_active` is older than
    /// [`ACTIVITY_RESOLUTION_MINUTES`]. Always false while anonymous.
    pub fn last_active_is_stale(&self) -> bool {
        let cutoff = offset_iso(Utc::now(), -ACTIVITY_RESOLUTION_MINUTES);

        self.commander
            .as_ref()
            .is_some_and(|commander| commander.last_active < cutoff)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::store::fixture;

    #[test]
    fn login_then_logout_returns_to_anonymous() {
        let mut auth = AuthState::default();

        auth.login_pending();
        assert!(auth.is_loading());
        auth.login_settled(Ok(fixture::commander(Utc::now())));
        assert!(auth.is_authenticated);
        assert!(!auth.is_loading());

        auth.logout_settled(Ok(()));
        assert_eq!(auth, AuthState::default());
    }

    #[test]
    fn rejected_login_records_message_and_stays_anonymous() {
        let mut auth = AuthState::default();

        auth.login_pending();
        auth.login_settled(Err(StoreError::AuthenticationFailed));

        assert!(!auth.is_authenticated);
        assert!(auth.commander.is_none());
        assert_eq!(auth.error(), Some("Authentication failed"));

        auth.clear_error();
        assert_eq!(auth.error(), None);
    }

    #[test]
    fn fcm_token_is_ignored_while_anonymous() {
        let mut auth = AuthState::default();

        auth.fcm_token_settled(Ok("token".to_string()));

        assert!(auth.commander.is_none());
        assert_eq!(auth.error(), None);
    }

    #[test]
    fn activity_refreshes_a_stale_last_active() {
        let mut auth = AuthState::default();
        let mut commander = fixture::commander(Utc::now());
        commander.last_active = "2024-06-01T12:00:00.000Z".to_string();
        auth.login_settled(Ok(commander));
        assert!(auth.last_active_is_stale());

        auth.update_last_active();

        assert!(!auth.last_active_is_stale());
        let last_active = &auth.commander.as_ref().unwrap().last_active;
        assert!(last_active.as_str() > "2024-06-01T12:00:00.000Z");
    }

    #[test]
    fn activity_is_ignored_while_anonymous() {
        let mut auth = AuthState::default();

        auth.update_last_active();

        assert!(!auth.last_active_is_stale());
        assert_eq!(auth, AuthState::default());
    }
}

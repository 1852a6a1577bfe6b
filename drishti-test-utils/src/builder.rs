//! Declarative test builder for store setup.
//!
//! Configuration methods queue data; `build()` drives it into a fresh [`AppStore`] through
//! the same reducers and drivers the views use, so the resulting store upholds every
//! invariant a real session would.

use chrono::{DateTime, Utc};
use drishti::{
    model::{alert::Alert, commander::Commander, event::EventLogEntry, unit::Unit, zone::Zone},
    store::{
        fixture::{COMMANDER_EMAIL, COMMANDER_PASSWORD},
        AppStore, FixtureSource, StoreError,
    },
};

use crate::{constant::test_anchor, error::TestError};

/// Builder for declarative store initialization.
pub struct TestBuilder {
    anchor: DateTime<Utc>,
    authenticated: bool,
    commander: Option<Commander>,
    load_fixtures: bool,

    zones: Vec<Zone>,
    units: Vec<Unit>,
    alerts: Vec<Alert>,
    events: Vec<EventLogEntry>,
}

/// Store and fixture source produced by [`TestBuilder::build`].
pub struct TestContext {
    pub store: AppStore,
    /// Source pinned to the builder's anchor
    pub source: FixtureSource,
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// # Returns
    /// - `TestBuilder` - Empty, signed-out store pinned to [`test_anchor`]
    pub fn new() -> Self {
        Self {
            anchor: test_anchor(),
            authenticated: false,
            commander: None,
            load_fixtures: false,
            zones: Vec::new(),
            units: Vec::new(),
            alerts: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Pin the fixture clock to `anchor` instead of [`test_anchor`].
    pub fn with_anchor(mut self, anchor: DateTime<Utc>) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sign in with the fixture commander's credentials during `build()`.
    pub fn authenticated(mut self) -> Self {
        self.authenticated = true;
        self
    }

    /// Sign in as `commander` without going through the fixture credentials.
    pub fn authenticated_as(mut self, commander: Commander) -> Self {
        self.commander = Some(commander);
        self
    }

    /// Load zones, units and alerts from the fixture source as a real session does after
    /// signing in. Entities queued with the other `with_*` methods replace the fetched ones.
    pub fn with_fixtures(mut self) -> Self {
        self.load_fixtures = true;
        self
    }

    pub fn with_zones(mut self, zones: Vec<Zone>) -> Self {
        self.zones = zones;
        self
    }

    pub fn with_units(mut self, units: Vec<Unit>) -> Self {
        self.units = units;
        self
    }

    pub fn with_alerts(mut self, alerts: Vec<Alert>) -> Self {
        self.alerts = alerts;
        self
    }

    pub fn with_events(mut self, events: Vec<EventLogEntry>) -> Self {
        self.events = events;
        self
    }

    /// Build the configured store.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Store with every queued step applied
    /// - `Err(TestError::StoreError)` - Signing in with the fixture credentials failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let source = FixtureSource::pinned(self.anchor);
        let mut store = AppStore::new();

        if self.authenticated {
            store.login(&source, COMMANDER_EMAIL, COMMANDER_PASSWORD).await;

            if !store.auth.is_authenticated {
                return Err(StoreError::AuthenticationFailed.into());
            }
        }

        if let Some(commander) = self.commander {
            store.auth.login_pending();
            store.auth.login_settled(Ok(commander));
        }

        if self.load_fixtures {
            store.on_authenticated(&source).await;
        }

        if !self.zones.is_empty() {
            store.zones.fetch_pending();
            store.zones.fetch_settled(Ok(self.zones));
        }

        if !self.units.is_empty() {
            store.units.fetch_pending();
            store.units.fetch_settled(Ok(self.units));
        }

        if !self.alerts.is_empty() {
            store.alerts.fetch_pending();
            store.alerts.fetch_settled(Ok(self.alerts));
        }

        if !self.events.is_empty() {
            store.events.fetch_pending();
            store.events.fetch_settled(Ok(self.events));
        }

        Ok(TestContext { store, source })
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

use crate::{server::config::Config, store::FixtureSource};

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Backend the API serves from
    pub source: FixtureSource,
}

impl AppState {
    /// Builds the state, pinning fixture timestamps when the configuration asks for it.
    pub fn new(config: &Config) -> Self {
        let source = match config.fixture_anchor {
            Some(anchor) => FixtureSource::pinned(anchor),
            None => FixtureSource::new(),
        };

        Self { source }
    }
}

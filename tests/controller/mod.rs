//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted arguments and checked on the status code
//! of their response; `router` exercises routing and the OpenAPI document end to end.

mod alert;
mod auth;
mod dashboard;
mod event;
mod router;
mod unit;
mod zone;

use drishti::server::{config::Config, model::app::AppState};
use drishti_test_utils::{constant::test_anchor, prelude::*};

fn test_config() -> Config {
    Config {
        contact_email: "ops@drishti.test".to_string(),
        fixture_anchor: Some(test_anchor()),
    }
}

fn app_state() -> AppState {
    AppState::new(&test_config())
}

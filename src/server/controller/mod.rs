//! HTTP controller endpoints for the Drishti web API.
//!
//! Each handler resolves one store operation against the [`FixtureSource`] held in
//! [`AppState`] and answers with JSON. Rejections propagate through
//! [`Error`](crate::server::error::Error), which picks the status code.
//!
//! [`FixtureSource`]: crate::store::FixtureSource
//! [`AppState`]: crate::server::model::app::AppState

pub mod alert;
pub mod auth;
pub mod dashboard;
pub mod event;
pub mod unit;
pub mod zone;

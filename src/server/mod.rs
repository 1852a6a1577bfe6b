//! Server application core modules.
//!
//! This module contains the server-side half of the Drishti dashboard: configuration from
//! the environment, a JSON API over the fixture data source with OpenAPI documentation, and
//! the error type mapping store rejections to HTTP responses. The Dioxus client is served
//! alongside these routes.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;

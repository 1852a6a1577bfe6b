//! Drishti operations dashboard.
//!
//! Crowd-density zones, response unit dispatch and alert review. The [`store`] module holds
//! the client-side state the views render; the `server` feature adds a JSON API serving the
//! same fixture data.

pub mod model;
pub mod store;
pub mod util;

#[cfg(feature = "server")]
pub mod server;

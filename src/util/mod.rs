//! Shared helpers used by the store, the views and the server.

pub mod time;

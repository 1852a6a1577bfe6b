//! Tests for the client store driven through its data sources.
//!
//! These run the same pending/settled sequences the views run, against the pinned fixture
//! source and the rejecting [`FailingSource`], and check the state the slices end up in.

mod alerts;
mod auth;
mod dashboard;
mod events;
mod session;
mod units;
mod zones;

use drishti_test_utils::prelude::*;

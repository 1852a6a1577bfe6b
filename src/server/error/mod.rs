//! Error types for the Drishti server.
//!
//! Store rejections and configuration problems are aggregated into a single [`Error`] that
//! implements `IntoResponse`, so controllers can use `?` and still answer with the right
//! status code and a JSON [`ErrorDto`] body.

pub mod config;
pub mod store;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError, store::StoreError};

/// Main error type for the Drishti server.
///
/// Uses `thiserror`'s `#[from]` so domain errors convert with the `?` operator.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Rejected store operation (authentication, unknown zone, failed fetch).
    #[error(transparent)]
    StoreError(#[from] StoreError),
}

/// Converts application errors into HTTP responses by delegating to the wrapped error.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::StoreError(err) => err.into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;

use crate::{model::api::ErrorDto, server::error::InternalServerError, store::StoreError};

/// Maps store rejections to HTTP responses.
///
/// # Returns
/// - 401 Unauthorized - Login with invalid credentials
/// - 404 Not Found - Zone details requested for an unknown zone
/// - 500 Internal Server Error - Any other rejection (logged)
impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthenticationFailed => {
                tracing::debug!("{}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::FetchZoneDetails(ref zone_id) => {
                tracing::debug!(zone_id = %zone_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

//! Error types for the demo server.
//!
//! Domain errors (authentication, configuration, SSO provider) are split into their own
//! enums and aggregated by [`Error`]. All errors implement `IntoResponse` so controllers can
//! return them directly, and use `thiserror` for their `Display` and `Error` implementations.

pub mod auth;
pub mod config;
pub mod sso;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, sso::SsoErrorResponse},
};

/// Main error type for the demo server.
///
/// Uses `thiserror`'s `#[from]` attribute so underlying errors convert with the `?`
/// operator. The `IntoResponse` implementation maps each error to an HTTP response.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (invalid login input, unusable SSO result).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// SSOReady API error (unknown organization, invalid access code, provider outage).
    #[error(transparent)]
    SsoError(#[from] ssoready_client::Error),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Invalid email, or SSOReady rejected the organization or access code
/// - 502 Bad Gateway - SSOReady failed or returned an unusable result
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::SsoError(err) => SsoErrorResponse(err).into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
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

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

/// Response mapping for errors returned by the SSOReady client.
///
/// Requests SSOReady rejects, such as an email domain with no SAML connection or an expired
/// access code, are the user's to retry and map to 400. Provider outages map to 502.
pub struct SsoErrorResponse(pub ssoready_client::Error);

impl IntoResponse for SsoErrorResponse {
    fn into_response(self) -> Response {
        let err = self.0;

        if let ssoready_client::Error::MissingApiKey = err {
            return InternalServerError(err).into_response();
        }

        if err.is_client_error() {
            tracing::debug!("{}", err);

            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "There was an issue logging you in, please try again.".to_string(),
                }),
            )
                .into_response();
        }

        tracing::error!("{}", err);

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorDto {
                error: "The single sign-on provider is unavailable, please try again later."
                    .to_string(),
            }),
        )
            .into_response()
    }
}

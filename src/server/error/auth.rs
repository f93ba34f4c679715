use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Cannot derive an organization from email address {0:?}")]
    InvalidEmail(String),
    #[error("SSOReady redeemed the SAML access code but did not return an email address")]
    MissingEmail,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidEmail(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "Please enter a valid email address.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::MissingEmail => {
                tracing::error!("{}", self);

                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto {
                        error: "There was an issue logging you in, please try again.".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

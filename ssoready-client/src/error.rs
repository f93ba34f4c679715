use std::fmt::Display;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "Missing SSOReady API key: set one on the client builder or through the SSOREADY_API_KEY environment variable"
    )]
    MissingApiKey,
    /// The API answered with a non-success status code.
    #[error("SSOReady API request failed with status {status}: {message}")]
    Api { status: StatusCode, message: String },
    /// Transport failure or a response body that could not be decoded.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

impl Error {
    /// Status code returned by the API, if the request got that far.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Request(err) => err.status(),
            Self::MissingApiKey => None,
        }
    }

    /// Whether the API rejected the request itself, e.g. an unknown organization or an
    /// expired access code, rather than failing to serve it.
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|status| status.is_client_error())
    }
}

/// Error body returned by the API alongside non-success status codes.
#[derive(Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Extracts the API's error message, falling back to the raw body.
    pub(crate) fn message_from(body: String) -> String {
        serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|parsed| parsed.message)
            .unwrap_or(body)
    }

    /// Like [`message_from`](Self::message_from), keeping the cause when the body itself
    /// could not be read.
    pub(crate) fn message_from_read<E: Display>(body: Result<String, E>) -> String {
        match body {
            Ok(body) => Self::message_from(body),
            Err(e) => format!("<unreadable body: {}>", e),
        }
    }
}

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use dioxus_logger::tracing;
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::api::ErrorDto,
    server::{
        error::Error,
        model::{app::AppState, session::user::SessionUserEmail},
        service::auth::{callback::callback_service, login::login_service},
    },
};

pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SamlRedirectParams {
    /// Work email of the user logging in, e.g. `john.doe@example.com`
    pub email: String,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CallbackParams {
    /// One-time access code issued by SSOReady after a successful SAML login
    pub saml_access_code: String,
}

/// Login route to initiate a SAML login
///
/// Uses the domain of the submitted email as the organization external ID, asks SSOReady for
/// that organization's identity provider URL, and redirects the user there.
///
/// # Responses
/// - 307 (Temporary Redirect): Redirects user to their identity provider to log in
/// - 400 (Bad Request): Missing or invalid email, or no SAML connection for the email's domain
/// - 502 (Bad Gateway): SSOReady could not be reached
#[utoipa::path(
    get,
    path = "/saml-redirect",
    tag = AUTH_TAG,
    params(SamlRedirectParams),
    responses(
        (status = 307, description = "Redirect to the user's identity provider"),
        (status = 400, description = "Invalid email or unknown organization", body = ErrorDto),
        (status = 502, description = "SSO provider unavailable", body = ErrorDto)
    ),
)]
pub async fn saml_redirect(
    State(state): State<AppState>,
    params: Query<SamlRedirectParams>,
) -> Result<impl IntoResponse, Error> {
    let redirect_url = login_service(&state.sso_client, &params.0.email).await?;

    Ok(Redirect::temporary(&redirect_url))
}

/// Callback route SSOReady redirects the user to after a successful SAML login
///
/// Redeems the SAML access code for the user's email, logs the user in as that email, and
/// redirects to the home page.
///
/// # Responses
/// - 307 (Temporary Redirect): Successful login, redirect to the home page
/// - 400 (Bad Request): Missing, invalid or expired SAML access code
/// - 502 (Bad Gateway): SSOReady could not be reached or returned no email
/// - 500 (Internal Server Error): Session could not be updated
#[utoipa::path(
    get,
    path = "/ssoready-callback",
    tag = AUTH_TAG,
    params(CallbackParams),
    responses(
        (status = 307, description = "Logged in, redirect to the home page"),
        (status = 400, description = "Invalid SAML access code", body = ErrorDto),
        (status = 502, description = "SSO provider unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn ssoready_callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, Error> {
    let email = callback_service(&state.sso_client, &params.0.saml_access_code).await?;

    // Rotate the session ID on login
    session.cycle_id().await?;
    SessionUserEmail::insert(&session, &email).await?;

    tracing::debug!(email = %email, "User logged in");

    Ok(Redirect::temporary("/"))
}

/// Logs the user out by clearing their session
///
/// Logging out without a logged in user is not an error.
///
/// # Responses
/// - 307 (Temporary Redirect): Logged out, redirect to the home page
/// - 500 (Internal Server Error): There was an issue clearing the session
#[utoipa::path(
    get,
    path = "/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Logged out, redirect to the home page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    // Only flush when a user was in session, there is nothing to delete from the store otherwise
    if let Some(email) = SessionUserEmail::remove(&session).await? {
        session.flush().await?;

        tracing::debug!(email = %email, "User logged out");
    }

    Ok(Redirect::temporary("/"))
}

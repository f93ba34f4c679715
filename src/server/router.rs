//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates their OpenAPI document
//! using utoipa.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{controller, model::app::AppState};

/// Path the OpenAPI document is served at.
pub const OPENAPI_PATH: &str = "/api/docs/openapi.json";

/// Builds the application's HTTP router.
///
/// # Registered Endpoints
/// - `GET /` - Home page showing the logged in user
/// - `GET /logout` - Logout current user
/// - `GET /saml-redirect` - Initiate a SAML login for an email's organization
/// - `GET /ssoready-callback` - SAML login callback redeeming the access code
/// - `GET /api/docs/openapi.json` - OpenAPI document for the routes above
///
/// Handlers extract a tower-sessions `Session`, so the returned router must be layered with a
/// `SessionManagerLayer` before serving.
///
/// # Example
/// ```ignore
/// let router = routes()
///     .with_state(AppState::from(sso_client))
///     .layer(startup::session_layer());
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "SSOReady demo", description = "SAML single sign-on demo app"),
        tags(
            (name = controller::home::HOME_TAG, description = "Home page"),
            (name = controller::auth::AUTH_TAG, description = "SAML login routes"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::home::home))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::saml_redirect))
        .routes(routes!(controller::auth::ssoready_callback))
        .split_for_parts();

    routes.route(OPENAPI_PATH, get(move || async move { Json(api) }))
}

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::api::ErrorDto,
    server::{error::Error, model::session::user::SessionUserEmail},
};

pub static HOME_TAG: &str = "home";

const LOGGED_OUT_NAME: &str = "logged-out user";

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate<'a> {
    name: &'a str,
}

impl IntoResponse for HomeTemplate<'_> {
    fn into_response(self) -> Response {
        match self.render() {
            Ok(html) => Html(html).into_response(),
            Err(e) => {
                tracing::error!("Failed to render home page: {}", e);

                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

/// Home page greeting the logged in user
///
/// Renders the email of the logged in user, or "logged-out user", along with a logout link and
/// a form to start a SAML login.
#[utoipa::path(
    get,
    path = "/",
    tag = HOME_TAG,
    responses(
        (status = 200, description = "Home page", content_type = "text/html", body = String),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn home(session: Session) -> Result<impl IntoResponse, Error> {
    let email = SessionUserEmail::get(&session).await?;

    let page = HomeTemplate {
        name: email.as_deref().unwrap_or(LOGGED_OUT_NAME),
    }
    .into_response();

    Ok(page)
}

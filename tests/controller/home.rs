use axum::{http::StatusCode, response::IntoResponse};
use ssoready_demo::server::{controller::home::home, model::session::user::SessionUserEmail};
use ssoready_demo_test_utils::prelude::*;

use super::body_string;

#[tokio::test]
/// Expect the logged-out greeting when no user is in session
async fn renders_logged_out_user() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = home(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_string(resp).await;
    assert!(body.contains("Hello, logged-out user!"));
    assert!(body.contains(r#"action="/saml-redirect""#));
    assert!(body.contains(r#"href="/logout""#));

    Ok(())
}

#[tokio::test]
/// Expect the logged in user's email in the greeting
async fn renders_email_in_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    SessionUserEmail::insert(&test.session, TEST_EMAIL)
        .await
        .unwrap();

    let result = home(test.session.clone()).await;

    let body = body_string(result.unwrap().into_response()).await;
    assert!(body.contains(&format!("Hello, {}!", TEST_EMAIL)));
    assert!(!body.contains("logged-out user"));

    Ok(())
}

#[tokio::test]
/// Expect the email to be HTML escaped when rendered
async fn escapes_email() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    SessionUserEmail::insert(&test.session, "<b>@example.com")
        .await
        .unwrap();

    let result = home(test.session.clone()).await;

    let body = body_string(result.unwrap().into_response()).await;
    assert!(body.contains("&#60;b&#62;@example.com"));
    assert!(!body.contains("<b>"));

    Ok(())
}

use axum::{
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
};
use ssoready_demo::server::{controller::auth::logout, model::session::user::SessionUserEmail};
use ssoready_demo_test_utils::prelude::*;

#[tokio::test]
/// Expect 307 temporary redirect home with the email cleared from session
async fn clears_email_on_logout() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    SessionUserEmail::insert(&test.session, TEST_EMAIL)
        .await
        .unwrap();

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers()[LOCATION], "/");

    let email = SessionUserEmail::get(&test.session).await.unwrap();
    assert!(email.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 307 temporary redirect home even without a user in session
async fn redirects_without_user_in_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    Ok(())
}

#[tokio::test]
/// Expect logging out twice to succeed both times
async fn logout_is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    SessionUserEmail::insert(&test.session, TEST_EMAIL)
        .await
        .unwrap();

    let first = logout(test.session.clone()).await;
    let second = logout(test.session.clone()).await;

    assert!(first.is_ok());
    assert!(second.is_ok());
    assert_eq!(
        second.unwrap().into_response().status(),
        StatusCode::TEMPORARY_REDIRECT
    );

    Ok(())
}

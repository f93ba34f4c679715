//! End-to-end tests driving the full router, session layer included.
//!
//! Requests go through `tower::ServiceExt::oneshot`; the session cookie from one response is
//! sent with the next request to follow a browser through the login flow.

use axum::{
    body::Body,
    http::{
        header::{COOKIE, LOCATION, SET_COOKIE},
        Request, Response, StatusCode,
    },
    Router,
};
use ssoready_demo::server::{model::app::AppState, router::routes};
use ssoready_demo_test_utils::prelude::*;
use tower::ServiceExt;

fn app(test: &TestContext) -> Router {
    routes()
        .with_state(test.to_app_state::<AppState>())
        .layer(TestContext::session_layer())
}

async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut request = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(COOKIE, cookie);
    }

    app.clone()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_string(resp: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();

    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Extracts the `name=value` pair of the session cookie set by a response.
fn session_cookie(resp: &Response<Body>) -> String {
    let set_cookie = resp.headers()[SET_COOKIE].to_str().unwrap();

    set_cookie.split(';').next().unwrap().to_string()
}

#[tokio::test]
/// Expect login through the callback to show the redeemed email until logout
async fn login_and_logout_round_trip() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_redeem_endpoint(TEST_SAML_ACCESS_CODE, TEST_EMAIL, 1)
        .build()
        .await?;
    let app = app(&test);

    let resp = get(
        &app,
        &format!("/ssoready-callback?saml_access_code={}", TEST_SAML_ACCESS_CODE),
        None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers()[LOCATION], "/");
    let cookie = session_cookie(&resp);

    let resp = get(&app, "/", Some(&cookie)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp)
        .await
        .contains(&format!("Hello, {}!", TEST_EMAIL)));

    let resp = get(&app, "/logout", Some(&cookie)).await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers()[LOCATION], "/");

    let resp = get(&app, "/", Some(&cookie)).await;
    assert!(body_string(resp).await.contains("Hello, logged-out user!"));

    // Logging out again is not an error
    let resp = get(&app, "/logout", Some(&cookie)).await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect logging in over an existing session to issue a new session ID
async fn login_rotates_session_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_redeem_endpoint(TEST_SAML_ACCESS_CODE, TEST_EMAIL, 2)
        .build()
        .await?;
    let app = app(&test);
    let callback = format!("/ssoready-callback?saml_access_code={}", TEST_SAML_ACCESS_CODE);

    let resp = get(&app, &callback, None).await;
    let first_cookie = session_cookie(&resp);

    let resp = get(&app, &callback, Some(&first_cookie)).await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    let second_cookie = session_cookie(&resp);
    assert_ne!(first_cookie, second_cookie);

    // The previous session ID no longer carries the login
    let resp = get(&app, "/", Some(&first_cookie)).await;
    assert!(body_string(resp).await.contains("Hello, logged-out user!"));

    let resp = get(&app, "/", Some(&second_cookie)).await;
    assert!(body_string(resp)
        .await
        .contains(&format!("Hello, {}!", TEST_EMAIL)));

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a fresh visitor to see the logged-out page
async fn home_renders_logged_out_user() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = app(&test);

    let resp = get(&app, "/", None).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.contains("Hello, logged-out user!"));

    Ok(())
}

#[tokio::test]
/// Expect the form's query string to drive the redirect to the identity provider
async fn saml_redirect_follows_email_domain() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_redirect_endpoint(TEST_ORGANIZATION_EXTERNAL_ID, TEST_REDIRECT_URL, 1)
        .build()
        .await?;
    let app = app(&test);

    let resp = get(&app, "/saml-redirect?email=john.doe%40example.com", None).await;

    test.assert_mocks();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers()[LOCATION], TEST_REDIRECT_URL);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request and no redirect when the email parameter is missing
async fn saml_redirect_requires_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint("/v1/saml/redirect", 500, 0)
        .build()
        .await?;
    let app = app(&test);

    let resp = get(&app, "/saml-redirect", None).await;

    test.assert_mocks();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(resp.headers().get(LOCATION).is_none());

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request and no session when the access code parameter is missing
async fn callback_requires_access_code() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint("/v1/saml/redeem", 500, 0)
        .build()
        .await?;
    let app = app(&test);

    let resp = get(&app, "/ssoready-callback", None).await;

    test.assert_mocks();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(resp.headers().get(SET_COOKIE).is_none());

    Ok(())
}

#[tokio::test]
/// Expect the OpenAPI document to describe all four routes
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = app(&test);

    let resp = get(&app, "/api/docs/openapi.json", None).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    for path in ["/", "/logout", "/saml-redirect", "/ssoready-callback"] {
        assert!(doc["paths"].get(path).is_some(), "missing path {}", path);
    }

    Ok(())
}

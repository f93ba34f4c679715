//! Tests for HTTP controller endpoints.
//!
//! These tests call the Axum handlers directly with extractors built from a `TestContext`,
//! verifying status codes, redirects, rendered pages and session changes.

mod auth;
mod home;

/// Reads a response body into a string.
async fn body_string(resp: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();

    String::from_utf8(bytes.to_vec()).unwrap()
}

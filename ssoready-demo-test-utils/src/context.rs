//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context includes a
//! mock SSOReady API server, an SSO client configured to use it, and an in-memory session.

use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use tower_sessions::{MemoryStore, Session, SessionManagerLayer};

use crate::{constant::TEST_API_KEY, error::TestError};

/// Test context structure returned by `TestBuilder`
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_redirect_endpoint(TEST_ORGANIZATION_EXTERNAL_ID, TEST_REDIRECT_URL, 1)
///     .build()
///     .await?;
///
/// let state: AppState = test.to_app_state();
///
/// // Assert all mocks were called
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// SSO client configured to use the mock server
    pub sso_client: ssoready_client::Client,
    /// Session backed by an in-memory store
    pub session: Session,

    /// Mock HTTP server standing in for the SSOReady API
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Convert the SSO client into any type that can be constructed from it
    ///
    /// This allows conversion to `AppState` without the test utilities depending on the
    /// application crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<ssoready_client::Client>,
    {
        T::from(self.sso_client.clone())
    }

    /// Session layer over a fresh in-memory store, for tests that drive a full router.
    ///
    /// Cookies are not marked `Secure` so they round trip over plain HTTP test requests.
    pub fn session_layer() -> SessionManagerLayer<MemoryStore> {
        SessionManagerLayer::new(MemoryStore::default()).with_secure(false)
    }
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context without any mock endpoints
    /// - `Err(TestError::SsoError)` - SSO client initialization failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;

        let sso_client = ssoready_client::Client::builder()
            .api_key(TEST_API_KEY)
            .base_url(mock_server.url())
            .build()?;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        Ok(TestContext {
            sso_client,
            session,
            server: mock_server,
            mocks: Vec::new(),
        })
    }

    /// Point the SSO client at a local port nothing listens on, so every request fails
    /// to connect.
    pub(crate) fn use_unreachable_api(&mut self) -> Result<(), TestError> {
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
            listener.local_addr()?
        };

        self.sso_client = ssoready_client::Client::builder()
            .api_key(TEST_API_KEY)
            .base_url(format!("http://{}", addr))
            .build()?;

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Configuration methods are chained together and all mock endpoints are created during the
//! final `build()` call.

use mockito::Mock;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Custom mock endpoints
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    redirect_endpoints: Vec<(String, String, usize)>, // (organization_external_id, redirect_url, expected_requests)
    redeem_endpoints: Vec<(String, String, usize)>, // (saml_access_code, email, expected_requests)
    error_endpoints: Vec<(String, usize, usize)>,   // (path, status, expected_requests)

    unreachable_api: bool,
}

impl TestBuilder {
    /// Create a new TestBuilder with no mock endpoints configured.
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
            redirect_endpoints: Vec::new(),
            redeem_endpoints: Vec::new(),
            error_endpoints: Vec::new(),
            unreachable_api: false,
        }
    }

    /// Add a mock redirect URL endpoint to the test server.
    ///
    /// # Arguments
    /// - `organization_external_id` - Organization the endpoint answers for
    /// - `redirect_url` - Identity provider URL returned for that organization
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_redirect_endpoint(
        mut self,
        organization_external_id: impl Into<String>,
        redirect_url: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        self.redirect_endpoints.push((
            organization_external_id.into(),
            redirect_url.into(),
            expected_requests,
        ));
        self
    }

    /// Add a mock access code redemption endpoint to the test server.
    ///
    /// # Arguments
    /// - `saml_access_code` - Access code the endpoint accepts
    /// - `email` - Email returned for that access code
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_redeem_endpoint(
        mut self,
        saml_access_code: impl Into<String>,
        email: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        self.redeem_endpoints
            .push((saml_access_code.into(), email.into(), expected_requests));
        self
    }

    /// Add a mock endpoint at `path` that fails with `status`.
    pub fn with_error_endpoint(
        mut self,
        path: impl Into<String>,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.error_endpoints
            .push((path.into(), status, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control over the mock server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Point the SSO client at a closed port instead of the mock server, so every SSOReady
    /// request fails at the transport level.
    pub fn with_unreachable_api(mut self) -> Self {
        self.unreachable_api = true;
        self
    }

    /// Build the test context and create all configured mock endpoints.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test environment ready for use
    /// - `Err(TestError::SsoError)` - SSO client initialization failed
    /// - `Err(TestError::IoError)` - No free local port for an unreachable API
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        if self.unreachable_api {
            setup.use_unreachable_api()?;
        }

        // Custom endpoints are created first so tests can layer specific mocks over the
        // shortcuts below for the same path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (organization_external_id, redirect_url, expected) in self.redirect_endpoints {
            mocks.push(setup.saml().create_redirect_endpoint(
                &organization_external_id,
                &redirect_url,
                expected,
            ));
        }

        for (saml_access_code, email, expected) in self.redeem_endpoints {
            mocks.push(
                setup
                    .saml()
                    .create_redeem_endpoint(&saml_access_code, &email, expected),
            );
        }

        for (path, status, expected) in self.error_endpoints {
            mocks.push(setup.saml().create_error_endpoint(&path, status, expected));
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

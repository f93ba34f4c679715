//! SAML API mock endpoint creation utilities.
//!
//! Each endpoint matches on the request body so a test only gets a successful response
//! for the exact organization or access code it configured.

use mockito::{Matcher, Mock};
use serde_json::json;
use ssoready_client::model::saml::{GetSamlRedirectUrlResponse, RedeemSamlAccessCodeResponse};

use crate::{constant::TEST_API_KEY, fixtures::SamlFixtures};

impl<'a> SamlFixtures<'a> {
    /// Create mock `POST /v1/saml/redirect` endpoint returning `redirect_url` for
    /// `organization_external_id`.
    ///
    /// # Arguments
    /// - `organization_external_id` - Organization external ID the request body must carry
    /// - `redirect_url` - Identity provider URL to return
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_redirect_endpoint(
        &mut self,
        organization_external_id: &str,
        redirect_url: &str,
        expected_requests: usize,
    ) -> Mock {
        let body = GetSamlRedirectUrlResponse {
            redirect_url: redirect_url.to_string(),
        };

        self.setup
            .server
            .mock("POST", "/v1/saml/redirect")
            .match_header("authorization", format!("Bearer {}", TEST_API_KEY).as_str())
            .match_body(Matcher::PartialJson(json!({
                "organizationExternalId": organization_external_id
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&body).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create mock `POST /v1/saml/redeem` endpoint redeeming `saml_access_code` for `email`.
    ///
    /// # Arguments
    /// - `saml_access_code` - Access code the request body must carry
    /// - `email` - Email of the logged in user to return
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_redeem_endpoint(
        &mut self,
        saml_access_code: &str,
        email: &str,
        expected_requests: usize,
    ) -> Mock {
        let organization_external_id = email.split('@').nth(1).map(str::to_string);
        let body = RedeemSamlAccessCodeResponse {
            email: Some(email.to_string()),
            organization_external_id,
            ..Default::default()
        };

        self.redeem_endpoint_with_body(
            saml_access_code,
            serde_json::to_string(&body).unwrap(),
            expected_requests,
        )
    }

    /// Create mock `POST /v1/saml/redeem` endpoint whose response carries no email.
    pub fn create_redeem_without_email_endpoint(
        &mut self,
        saml_access_code: &str,
        expected_requests: usize,
    ) -> Mock {
        let body = RedeemSamlAccessCodeResponse::default();

        self.redeem_endpoint_with_body(
            saml_access_code,
            serde_json::to_string(&body).unwrap(),
            expected_requests,
        )
    }

    /// Create mock endpoint at `path` failing every request with `status`.
    ///
    /// # Arguments
    /// - `path` - Either `/v1/saml/redirect` or `/v1/saml/redeem`
    /// - `status` - HTTP status code to respond with
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_error_endpoint(
        &mut self,
        path: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(json!({ "message": "mock SSOReady API error" }).to_string())
            .expect(expected_requests)
            .create()
    }

    fn redeem_endpoint_with_body(
        &mut self,
        saml_access_code: &str,
        body: String,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", "/v1/saml/redeem")
            .match_header("authorization", format!("Bearer {}", TEST_API_KEY).as_str())
            .match_body(Matcher::Json(json!({
                "samlAccessCode": saml_access_code
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }
}

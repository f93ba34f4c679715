//! Placeholder values shared across tests. None of these are real credentials.

/// API key the test SSO client authenticates with.
pub static TEST_API_KEY: &str = "ssoready_sk_test";

/// Email address of the user logging in.
pub static TEST_EMAIL: &str = "john.doe@example.com";

/// Organization external ID derived from [`TEST_EMAIL`].
pub static TEST_ORGANIZATION_EXTERNAL_ID: &str = "example.com";

/// Identity provider URL the mock API hands out for [`TEST_ORGANIZATION_EXTERNAL_ID`].
pub static TEST_REDIRECT_URL: &str = "https://idp.example.com/saml/sso?SAMLRequest=test";

/// One-time access code the mock API redeems for [`TEST_EMAIL`].
pub static TEST_SAML_ACCESS_CODE: &str = "saml_access_code_test";

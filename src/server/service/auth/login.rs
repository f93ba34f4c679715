use dioxus_logger::tracing;
use ssoready_client::model::saml::GetSamlRedirectUrlRequest;

use crate::server::error::{auth::AuthError, Error};

/// Derives the organization external ID from a user's email address.
///
/// Organizations are identified by their email domain, so `john.doe@example.com` belongs to
/// `example.com`. The domain is the segment following the first `@`.
///
/// # Returns
/// - `Ok(&str)` - The email's domain
/// - `Err(AuthError::InvalidEmail)` - The email has no `@` or nothing after it
pub fn organization_external_id(email: &str) -> Result<&str, AuthError> {
    email
        .split('@')
        .nth(1)
        .filter(|domain| !domain.is_empty())
        .ok_or_else(|| AuthError::InvalidEmail(email.to_string()))
}

/// Gets the identity provider URL to redirect the user with `email` to.
///
/// # Returns
/// - `Ok(String)` - URL that starts the SAML login at the user's identity provider
/// - `Err(Error::AuthError)` - No organization could be derived from `email`
/// - `Err(Error::SsoError)` - SSOReady rejected the organization or could not be reached
pub async fn login_service(
    sso_client: &ssoready_client::Client,
    email: &str,
) -> Result<String, Error> {
    let organization_external_id = organization_external_id(email)?;

    let response = sso_client
        .saml()
        .get_redirect_url(&GetSamlRedirectUrlRequest::for_organization_external_id(
            organization_external_id,
        ))
        .await?;

    tracing::debug!(
        organization_external_id = %organization_external_id,
        "Starting SAML login"
    );

    Ok(response.redirect_url)
}

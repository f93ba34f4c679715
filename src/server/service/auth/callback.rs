use dioxus_logger::tracing;
use ssoready_client::model::saml::RedeemSamlAccessCodeRequest;

use crate::server::error::{auth::AuthError, Error};

/// Redeems the one-time SAML access code from the login callback.
///
/// # Returns
/// - `Ok(String)` - Email of the user who logged in
/// - `Err(Error::SsoError)` - SSOReady rejected the code (invalid, expired, already used) or
///   could not be reached
/// - `Err(Error::AuthError(AuthError::MissingEmail))` - SSOReady accepted the code but did not
///   return an email
pub async fn callback_service(
    sso_client: &ssoready_client::Client,
    saml_access_code: &str,
) -> Result<String, Error> {
    let response = sso_client
        .saml()
        .redeem_access_code(&RedeemSamlAccessCodeRequest::new(saml_access_code))
        .await?;

    let email = response
        .email
        .filter(|email| !email.is_empty())
        .ok_or(AuthError::MissingEmail)?;

    tracing::debug!(
        email = %email,
        organization_external_id = ?response.organization_external_id,
        "Redeemed SAML access code"
    );

    Ok(email)
}

//! SAML endpoints of the SSOReady API.

use crate::{
    model::saml::{
        GetSamlRedirectUrlRequest, GetSamlRedirectUrlResponse, RedeemSamlAccessCodeRequest,
        RedeemSamlAccessCodeResponse,
    },
    Client, Error,
};

/// SAML endpoint group, obtained through [`Client::saml`].
pub struct Saml<'a> {
    client: &'a Client,
}

impl<'a> Saml<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Gets the URL to redirect a user to in order to start a SAML login.
    ///
    /// # Returns
    /// - `Ok(GetSamlRedirectUrlResponse)` - Identity provider URL for the requested connection
    /// - `Err(Error::Api)` - The API rejected the request, e.g. no organization matches the
    ///   given external ID
    /// - `Err(Error::Request)` - The request could not be sent or the response not decoded
    pub async fn get_redirect_url(
        &self,
        request: &GetSamlRedirectUrlRequest,
    ) -> Result<GetSamlRedirectUrlResponse, Error> {
        self.client.post("/v1/saml/redirect", request).await
    }

    /// Exchanges the one-time access code from the login callback for details about the
    /// user who logged in.
    ///
    /// Access codes are single use and short lived; redeeming an expired or already
    /// redeemed code fails with `Error::Api`.
    pub async fn redeem_access_code(
        &self,
        request: &RedeemSamlAccessCodeRequest,
    ) -> Result<RedeemSamlAccessCodeResponse, Error> {
        self.client.post("/v1/saml/redeem", request).await
    }
}

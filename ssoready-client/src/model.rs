//! Request and response bodies for the SSOReady API.

pub mod saml {
    use std::collections::HashMap;

    use serde::{Deserialize, Serialize};

    /// Body of `POST /v1/saml/redirect`.
    ///
    /// Identify the SAML connection with exactly one of `saml_connection_id`,
    /// `organization_id` or `organization_external_id`.
    #[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct GetSamlRedirectUrlRequest {
        /// Opaque value returned unchanged when the access code is redeemed.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub state: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub organization_id: Option<String>,
        /// The application's own identifier for the organization.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub organization_external_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub saml_connection_id: Option<String>,
    }

    impl GetSamlRedirectUrlRequest {
        pub fn for_organization_external_id(organization_external_id: impl Into<String>) -> Self {
            Self {
                organization_external_id: Some(organization_external_id.into()),
                ..Default::default()
            }
        }
    }

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct GetSamlRedirectUrlResponse {
        /// Identity provider URL to send the user's browser to.
        pub redirect_url: String,
    }

    /// Body of `POST /v1/saml/redeem`.
    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct RedeemSamlAccessCodeRequest {
        pub saml_access_code: String,
    }

    impl RedeemSamlAccessCodeRequest {
        pub fn new(saml_access_code: impl Into<String>) -> Self {
            Self {
                saml_access_code: saml_access_code.into(),
            }
        }
    }

    #[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct RedeemSamlAccessCodeResponse {
        pub state: Option<String>,
        /// Email address of the user who logged in.
        pub email: Option<String>,
        /// Extra SAML assertion attributes forwarded by the identity provider.
        #[serde(default)]
        pub attributes: HashMap<String, String>,
        pub organization_id: Option<String>,
        pub organization_external_id: Option<String>,
        pub saml_flow_id: Option<String>,
    }
}

//! Async client for the SSOReady SAML API.
//!
//! SSOReady hosts the SAML service provider side of single sign-on: it talks to each
//! customer's identity provider, validates assertions and hands the application a
//! one-time access code. This crate covers the two calls a relying party needs:
//!
//! - [`Saml::get_redirect_url`]: where to send a user to start a SAML login
//! - [`Saml::redeem_access_code`]: exchange the callback's access code for the user's email
//!
//! ```no_run
//! # async fn example() -> Result<(), ssoready_client::Error> {
//! use ssoready_client::{model::saml::GetSamlRedirectUrlRequest, Client};
//!
//! let client = Client::builder().api_key("ssoready_sk_...").build()?;
//!
//! let response = client
//!     .saml()
//!     .get_redirect_url(&GetSamlRedirectUrlRequest::for_organization_external_id(
//!         "example.com",
//!     ))
//!     .await?;
//!
//! println!("redirect to {}", response.redirect_url);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod model;
pub mod saml;

pub use client::{Client, ClientBuilder, API_KEY_ENV, DEFAULT_BASE_URL};
pub use error::Error;
pub use saml::Saml;

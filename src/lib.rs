//! Demo relying-party web app for SAML single sign-on through SSOReady.
//!
//! Users enter their work email, get redirected to their employer's identity provider by
//! way of SSOReady, and land back on the home page logged in as that email. SAML itself is
//! handled entirely by SSOReady; this app only builds the redirect, redeems the callback's
//! one-time access code and keeps the resulting email in a cookie session.

pub mod model;
pub mod server;

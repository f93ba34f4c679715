//! Tests for the SAML login controller endpoints.

mod logout;

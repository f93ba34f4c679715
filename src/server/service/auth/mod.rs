//! Authentication service layer.
//!
//! This module contains the SAML login logic built on SSOReady: working out which
//! organization's identity provider to send a user to, and redeeming the one-time access
//! code SSOReady hands back after the user logs in.

pub mod callback;
pub mod login;

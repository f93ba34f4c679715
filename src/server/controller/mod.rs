//! HTTP controller endpoints.
//!
//! This module contains the Axum handlers for the home page and the SAML login flow.
//! Controllers extract request inputs, call into the auth services, and keep the logged in
//! user's email in the tower-sessions session.

pub mod auth;
pub mod home;

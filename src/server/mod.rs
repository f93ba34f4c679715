//! Server application core modules.
//!
//! This module contains the HTTP side of the app: configuration, startup helpers, routing,
//! controllers, the SSO login services and the session models they share.

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;

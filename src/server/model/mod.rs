//! Server application models.
//!
//! This module contains the application state shared by handlers and the typed wrappers
//! for data kept in the user's session.

pub mod app;
pub mod session;

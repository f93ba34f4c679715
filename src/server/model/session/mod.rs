//! Session data models and utilities.
//!
//! This module provides type-safe wrappers for session data storage and retrieval using
//! tower-sessions. The only piece of session state is the email of the logged in user.

pub mod user;

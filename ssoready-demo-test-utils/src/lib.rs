//! Test utilities for the SSOReady demo app.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares the mock SSOReady API
//! endpoints a test needs, then [`TestBuilder::build`] returns a [`TestContext`] holding a
//! mock server, an SSO client pointed at it and an in-memory session.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{constant::*, TestBuilder, TestContext, TestError};
}

//! Mock SSOReady API endpoints.

pub mod saml;

use crate::TestContext;

impl TestContext {
    pub fn saml<'a>(&'a mut self) -> SamlFixtures<'a> {
        SamlFixtures { setup: self }
    }
}

pub struct SamlFixtures<'a> {
    setup: &'a mut TestContext,
}

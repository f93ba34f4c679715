use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

/// Session key for the logged in user's email.
///
/// Only ever written after SSOReady redeems a SAML access code, so its presence means the
/// user completed a SAML login.
pub const SESSION_USER_EMAIL_KEY: &str = "ssoready-demo:user:email";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionUserEmail(pub String);

impl SessionUserEmail {
    /// Insert the logged in user's email into session
    pub async fn insert(session: &Session, email: &str) -> Result<(), Error> {
        session
            .insert(SESSION_USER_EMAIL_KEY, SessionUserEmail(email.to_string()))
            .await?;

        Ok(())
    }

    /// Get the logged in user's email from session
    pub async fn get(session: &Session) -> Result<Option<String>, Error> {
        Ok(session
            .get::<SessionUserEmail>(SESSION_USER_EMAIL_KEY)
            .await?
            .map(|SessionUserEmail(email)| email))
    }

    /// Remove the logged in user's email from session, returning it if present
    pub async fn remove(session: &Session) -> Result<Option<String>, Error> {
        Ok(session
            .remove::<SessionUserEmail>(SESSION_USER_EMAIL_KEY)
            .await?
            .map(|SessionUserEmail(email)| email))
    }
}

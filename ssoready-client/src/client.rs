//! Client construction and the shared request path.

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use crate::{error::ApiErrorBody, saml::Saml, Error};

/// Production SSOReady API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.ssoready.com";

/// Environment variable the builder reads the API key from when none is set explicitly.
pub const API_KEY_ENV: &str = "SSOREADY_API_KEY";

const DEFAULT_USER_AGENT: &str = concat!("ssoready-client/", env!("CARGO_PKG_VERSION"));

/// SSOReady API client.
///
/// Cheap to clone; clones share the underlying HTTP connection pool.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientRef>,
}

struct ClientRef {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// SAML endpoints.
    pub fn saml(&self) -> Saml<'_> {
        Saml::new(self)
    }

    /// Base URL requests are sent to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Sends an authenticated JSON `POST` to `path` and decodes the JSON response.
    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.inner.base_url, path);

        let resp = self
            .inner
            .http
            .post(&url)
            .bearer_auth(&self.inner.api_key)
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Api {
                status,
                message: ApiErrorBody::message_from_read(resp.text().await),
            });
        }

        Ok(resp.json::<T>().await?)
    }
}

/// Builder for [`Client`].
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: String,
    user_agent: String,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// API key used as the bearer token for every request.
    ///
    /// When unset, [`build`](Self::build) falls back to the `SSOREADY_API_KEY` environment
    /// variable.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Overrides the API endpoint, e.g. for self-hosted deployments or mock servers.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Builds the client.
    ///
    /// # Returns
    /// - `Ok(Client)` - Client ready to send requests
    /// - `Err(Error::MissingApiKey)` - No API key was set and `SSOREADY_API_KEY` is unset or empty
    /// - `Err(Error::Request)` - The HTTP client could not be initialised
    pub fn build(self) -> Result<Client, Error> {
        self.build_with_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the client, reading the fallback API key through `lookup` instead of the
    /// process environment.
    pub fn build_with_lookup<F>(self, lookup: F) -> Result<Client, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = self
            .api_key
            .or_else(|| lookup(API_KEY_ENV))
            .filter(|key| !key.is_empty())
            .ok_or(Error::MissingApiKey)?;

        let http = reqwest::Client::builder()
            .user_agent(self.user_agent)
            .build()?;

        Ok(Client {
            inner: Arc::new(ClientRef {
                http,
                api_key,
                base_url: self.base_url,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

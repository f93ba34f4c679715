use crate::server::error::config::ConfigError;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;

pub struct Config {
    pub ssoready_api_key: String,
    pub ssoready_base_url: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Loads configuration through `lookup`, which returns the value of an environment
    /// variable if it is set.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `SSOREADY_API_KEY` is unset or empty
    /// - `Err(ConfigError::InvalidEnvValue)` - `PORT` is not a valid port number
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let ssoready_api_key = lookup(ssoready_client::API_KEY_ENV)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(ssoready_client::API_KEY_ENV.to_string()))?;

        let ssoready_base_url = lookup("SSOREADY_BASE_URL")
            .unwrap_or_else(|| ssoready_client::DEFAULT_BASE_URL.to_string());

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "PORT".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            ssoready_api_key,
            ssoready_base_url,
            host,
            port,
        })
    }

    /// Socket address the server listens on.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

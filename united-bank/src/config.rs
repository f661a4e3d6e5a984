//! Gateway configuration

use crate::{Error, Result, DEFAULT_REQUEST_TIMEOUT_SECONDS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Settings the wire mapper needs from configuration storage
pub trait GatewayConfig: Send + Sync {
    /// Base URL of the gateway (trailing slash optional)
    fn url(&self) -> &str;

    /// Bearer token sent in the `Authorization` header
    fn token(&self) -> &str;

    /// Vendor client id
    fn client_id(&self) -> &str;

    /// Vendor client name
    fn client_name(&self) -> &str;

    /// Login placed in the `Security` block
    fn username(&self) -> &str;

    /// Password placed in the `Security` block
    fn password(&self) -> &str;
}

/// Gateway configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL, e.g. `https://api.example/`
    pub base_url: String,

    /// Bearer token
    pub bearer_token: String,

    /// Vendor client id
    pub client_id: String,

    /// Vendor client name
    pub client_name: String,

    /// Gateway login
    pub username: String,

    /// Gateway password
    pub password: String,

    /// Transport timeout, only used by [`ReqwestHttpClient`](crate::ReqwestHttpClient)
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECONDS
}

impl Config {
    /// Create config with the default transport timeout
    pub fn new(
        base_url: impl Into<String>,
        bearer_token: impl Into<String>,
        client_id: impl Into<String>,
        client_name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            bearer_token: bearer_token.into(),
            client_id: client_id.into(),
            client_name: client_name.into(),
            username: username.into(),
            password: password.into(),
            timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
        }
    }

    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Parse TOML content
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load from environment variables (a `.env` file is honoured)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::new(
            required_var("UNITED_BANK_URL")?,
            required_var("UNITED_BANK_TOKEN")?,
            required_var("UNITED_BANK_CLIENT_ID")?,
            required_var("UNITED_BANK_CLIENT_NAME")?,
            required_var("UNITED_BANK_USERNAME")?,
            required_var("UNITED_BANK_PASSWORD")?,
        );

        if let Ok(timeout) = std::env::var("UNITED_BANK_TIMEOUT_SECONDS") {
            config.timeout_seconds = timeout.parse().map_err(|_| {
                Error::Config(format!(
                    "UNITED_BANK_TIMEOUT_SECONDS must be a number of seconds, got {:?}",
                    timeout
                ))
            })?;
        }

        Ok(config)
    }
}

fn required_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|e| Error::Config(format!("{}: {}", key, e)))
}

impl GatewayConfig for Config {
    fn url(&self) -> &str {
        &self.base_url
    }

    fn token(&self) -> &str {
        &self.bearer_token
    }

    fn client_id(&self) -> &str {
        &self.client_id
    }

    fn client_name(&self) -> &str {
        &self.client_name
    }

    fn username(&self) -> &str {
        &self.username
    }

    fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("bearer_token", &"<redacted>")
            .field("client_id", &self.client_id)
            .field("client_name", &self.client_name)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// How recommendations are fetched: through the trusted proxy (default)
    /// or directly against the generation service (development builds only)
    #[serde(default)]
    pub mode: FetchMode,
    /// Trusted proxy endpoint; the proxy injects the service credential
    /// server-side
    #[serde(default)]
    pub proxy_url: Option<String>,
    /// Generation service settings for the direct variant
    #[serde(default)]
    pub endpoint: EndpointConfig,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

/// Which transport path the client takes
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FetchMode {
    #[default]
    Proxy,
    Direct,
}

/// Settings for talking to the generation service itself
#[derive(Debug, Deserialize, Clone, Default)]
pub struct EndpointConfig {
    /// Base URL of the generation service
    #[serde(default)]
    pub base_url: Option<String>,
    /// Bearer token for the direct variant. Never set in deployed builds;
    /// the proxy holds the production credential.
    #[serde(default)]
    pub bearer_token: Option<String>,
}

fn default_timeout() -> u64 {
    30
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with ACTIV__ prefix
    /// 2. activ.toml file in the current directory
    /// 3. Default values
    ///
    /// Environment variable format: ACTIV__ENDPOINT__BEARER_TOKEN
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("activ").required(false))
            // Use double underscore for nested keys: ACTIV__ENDPOINT__BASE_URL
            .add_source(
                Environment::with_prefix("ACTIV")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

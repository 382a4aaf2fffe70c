use thiserror::Error;

/// Errors that can occur while requesting recommendations
#[derive(Error, Debug)]
pub enum RecoError {
    /// Network-level failure reaching the proxy or the generation service
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("Service returned HTTP {status}")]
    Status { status: u16 },

    /// Response body present but not a usable recommendation
    #[error("Unusable service response: {0}")]
    Shape(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A required configuration value is absent
    #[error("Missing configuration value: {0}")]
    MissingConfig(&'static str),
}

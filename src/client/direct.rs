use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;

use crate::client::RecommendationEndpoint;
use crate::config::AppConfig;
use crate::error::RecoError;
use crate::model::SubmissionPayload;

/// Development-only variant that talks to the generation service itself.
///
/// The bearer token comes from local configuration
/// (`ACTIV__ENDPOINT__BEARER_TOKEN`). Deployed builds compile without this
/// module and can only reach the service through the trusted proxy.
pub struct DirectEndpoint {
    client: Client,
    base_url: String,
    bearer_token: String,
}

impl DirectEndpoint {
    pub fn new(
        base_url: String,
        bearer_token: String,
        timeout: Duration,
    ) -> Result<Self, RecoError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(DirectEndpoint {
            client,
            base_url,
            bearer_token,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, RecoError> {
        let base_url = config
            .endpoint
            .base_url
            .clone()
            .ok_or(RecoError::MissingConfig("endpoint.base_url"))?;
        let bearer_token = config
            .endpoint
            .bearer_token
            .clone()
            .ok_or(RecoError::MissingConfig("endpoint.bearer_token"))?;

        warn!("Using the direct endpoint; this path is for local development only");
        Self::new(base_url, bearer_token, Duration::from_secs(config.timeout))
    }
}

#[async_trait]
impl RecommendationEndpoint for DirectEndpoint {
    fn endpoint_name(&self) -> &str {
        "direct"
    }

    async fn post_submission(&self, payload: &SubmissionPayload) -> Result<String, RecoError> {
        let response = self
            .client
            .post(format!("{}/submission", self.base_url))
            .header("Authorization", format!("Bearer {}", self.bearer_token))
            .header("Accept", "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        debug!("Generation service answered {status}");
        if !status.is_success() {
            return Err(RecoError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

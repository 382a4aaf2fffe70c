use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::client::RecommendationEndpoint;
use crate::config::AppConfig;
use crate::error::RecoError;
use crate::model::SubmissionPayload;

/// Same-origin trusted proxy in front of the generation service.
///
/// The proxy injects the service credential server-side and forwards the
/// upstream status and body verbatim; nothing secret travels with this
/// request.
#[derive(Debug)]
pub struct ProxyEndpoint {
    client: Client,
    url: String,
}

impl ProxyEndpoint {
    pub fn new(url: String, timeout: Duration) -> Result<Self, RecoError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(ProxyEndpoint { client, url })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, RecoError> {
        let url = config
            .proxy_url
            .clone()
            .ok_or(RecoError::MissingConfig("proxy_url"))?;
        Self::new(url, Duration::from_secs(config.timeout))
    }
}

#[async_trait]
impl RecommendationEndpoint for ProxyEndpoint {
    fn endpoint_name(&self) -> &str {
        "proxy"
    }

    async fn post_submission(&self, payload: &SubmissionPayload) -> Result<String, RecoError> {
        let response = self.client.post(&self.url).json(payload).send().await?;

        let status = response.status();
        debug!("Proxy answered {status}");
        if !status.is_success() {
            return Err(RecoError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

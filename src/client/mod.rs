//! HTTP client for the recommendation generation service.
//!
//! The client builds the submission payload, posts it through a
//! [`RecommendationEndpoint`], validates the reply envelope and hands the
//! result to the store. It performs no retries; callers decide whether to
//! fall back to the canonical default recommendations.

#[cfg(feature = "direct-endpoint")]
mod direct;
mod payload;
mod proxy;

#[cfg(feature = "direct-endpoint")]
pub use direct::DirectEndpoint;
pub use payload::build_payload;
pub use proxy::ProxyEndpoint;

use async_trait::async_trait;
use log::{debug, warn};
use serde::Deserialize;

use crate::config::{AppConfig, FetchMode};
use crate::error::RecoError;
use crate::model::{Answer, Question, RecommendationResponse, Submission, SubmissionPayload};
use crate::store::RecoStore;

/// Transport seam for the generation service.
///
/// Implementations return the raw body of a successful response; transport
/// and status problems surface as typed errors.
#[async_trait]
pub trait RecommendationEndpoint: Send + Sync {
    /// Short name used in logs (e.g. "proxy", "direct")
    fn endpoint_name(&self) -> &str;

    /// POST one submission payload, returning the raw response body
    async fn post_submission(&self, payload: &SubmissionPayload) -> Result<String, RecoError>;
}

/// Reply shapes the generation service is known to produce: an envelope
/// with `success`/`data`, or the recommendation payload directly at the
/// top level
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ServiceReply {
    Envelope {
        success: bool,
        data: Option<RecommendationResponse>,
        error: Option<ServiceError>,
    },
    Direct(RecommendationResponse),
}

#[derive(Debug, Deserialize)]
struct ServiceError {
    message: Option<String>,
}

fn parse_reply(body: &str) -> Result<RecommendationResponse, RecoError> {
    let reply: ServiceReply = serde_json::from_str(body)
        .map_err(|err| RecoError::Shape(format!("undecodable response body: {err}")))?;

    match reply {
        ServiceReply::Envelope {
            success: true,
            data: Some(data),
            ..
        } => Ok(data),
        ServiceReply::Envelope { error, .. } => {
            let message = error
                .and_then(|e| e.message)
                .unwrap_or_else(|| "recommendation generation failed".to_string());
            Err(RecoError::Shape(message))
        }
        ServiceReply::Direct(data) => Ok(data),
    }
}

/// Fetches recommendations and feeds the store
pub struct RecommendationClient {
    endpoint: Box<dyn RecommendationEndpoint>,
}

impl RecommendationClient {
    pub fn new(endpoint: Box<dyn RecommendationEndpoint>) -> Self {
        RecommendationClient { endpoint }
    }

    /// Build a client from configuration.
    ///
    /// Proxy mode is the deployed path. Direct mode only exists when the
    /// `direct-endpoint` feature is compiled in.
    pub fn from_config(config: &AppConfig) -> Result<Self, RecoError> {
        match config.mode {
            FetchMode::Proxy => Ok(Self::new(Box::new(ProxyEndpoint::from_config(config)?))),
            #[cfg(feature = "direct-endpoint")]
            FetchMode::Direct => Ok(Self::new(Box::new(DirectEndpoint::from_config(config)?))),
            #[cfg(not(feature = "direct-endpoint"))]
            FetchMode::Direct => Err(RecoError::MissingConfig(
                "direct mode requires the direct-endpoint feature",
            )),
        }
    }

    /// One fetch: join answers to their questions, post, validate the reply
    pub async fn fetch_recommendations(
        &self,
        submission: &Submission,
        answers: &[Answer],
        questions: &[Question],
    ) -> Result<RecommendationResponse, RecoError> {
        let payload = build_payload(submission, answers, questions);
        debug!(
            "Posting {} answers for submission {} via {} endpoint",
            payload.answers_count,
            payload.submission_id,
            self.endpoint.endpoint_name()
        );

        let body = self.endpoint.post_submission(&payload).await?;
        parse_reply(&body)
    }

    /// Fetch and publish into the store.
    ///
    /// The store drops the completion if a later fetch was started in the
    /// meantime, so overlapping calls resolve last-issued-wins.
    pub async fn fetch_into_store(
        &self,
        store: &RecoStore,
        submission: &Submission,
        answers: &[Answer],
        questions: &[Question],
    ) {
        let token = store.begin_request();
        match self.fetch_recommendations(submission, answers, questions).await {
            Ok(raw) => {
                store.complete(token, Ok(raw));
            }
            Err(err) => {
                warn!("Recommendation fetch failed: {err}");
                store.complete(token, Err(err.to_string()));
            }
        }
    }
}

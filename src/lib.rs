//! activ-reco turns a medical questionnaire's answers into a structured
//! exercise recommendation document, rendered as two views: a prescription
//! page and an advice page.
//!
//! The generation service returns best-effort JSON whose string fields
//! embed free text and pipe-delimited tables. The normalization pipeline
//! ([`parsers`] + [`normalizer`]) projects that into strongly-typed view
//! models, degrading gracefully on anything missing or malformed. The
//! [`client`] fetches raw responses, the [`store`] holds the latest one and
//! its derived views for subscribers, and [`defaults`] provides the single
//! fallback document shown when the service cannot be reached.

pub mod client;
pub mod config;
pub mod defaults;
pub mod error;
pub mod model;
pub mod normalizer;
pub mod parsers;
pub mod store;
pub mod viewmodel;

pub use client::{build_payload, RecommendationClient, RecommendationEndpoint};
pub use config::AppConfig;
pub use defaults::default_recommendation;
pub use error::RecoError;
pub use model::{Answer, Question, RecommendationResponse, Submission};
pub use normalizer::split_recommendation;
pub use parsers::{parse_planification_table, parse_programme_block};
pub use store::{RecoEvent, RecoSnapshot, RecoStore, RequestToken};
pub use viewmodel::{ConseilsVM, PlanifRow, PrescriptionVM, ProgrammeBlock, SplitRecommendation};

use log::warn;

/// Fetch recommendations, substituting the canonical defaults when the
/// service cannot produce a usable response.
///
/// The substitution is a product decision: the user is never shown a dead
/// page. The underlying failure is logged, not surfaced.
pub async fn fetch_or_default(
    client: &RecommendationClient,
    submission: &Submission,
    answers: &[Answer],
    questions: &[Question],
) -> RecommendationResponse {
    match client
        .fetch_recommendations(submission, answers, questions)
        .await
    {
        Ok(raw) => raw,
        Err(err) => {
            warn!("Falling back to default recommendations: {err}");
            defaults::default_recommendation()
        }
    }
}

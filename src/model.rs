use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw recommendation payload returned by the generation service.
///
/// Every field is optional on the wire: the service emits best-effort JSON
/// and a missing section must never prevent the pages from rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    #[serde(default)]
    pub conseils: Vec<String>,
    #[serde(default)]
    pub objectifs: Vec<String>,
    #[serde(default)]
    pub benefices: Vec<String>,
    #[serde(default)]
    pub programme_perso: ProgrammePerso,
    /// Weekly plan encoded as a pipe-delimited pseudo-table in one string
    #[serde(default)]
    pub planification: String,
    #[serde(default)]
    pub orientation: Vec<String>,
    #[serde(default)]
    pub contraindications: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medicaments: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precautions: Option<Vec<String>>,
}

/// The four training dimensions, each described as semi-structured free text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgrammePerso {
    #[serde(default)]
    pub endurance: String,
    #[serde(default)]
    pub renforcement: String,
    #[serde(default)]
    pub etirements: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equilibre: Option<String>,
}

/// One questionnaire submission, as handed over by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    #[serde(default)]
    pub secure_key: Option<String>,
}

/// One recorded answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: i64,
    pub value: String,
}

/// One question definition from the questionnaire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: String,
    #[serde(default)]
    pub section_id: Option<i64>,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub is_required: bool,
}

/// One answer joined to its question definition, in the shape the
/// generation service expects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerDetail {
    pub question_id: i64,
    pub question_text: String,
    pub question_type: String,
    pub answer: String,
    pub section_id: Option<i64>,
    pub parent_id: Option<i64>,
    pub is_required: bool,
}

/// Request body posted to the generation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub submission_id: String,
    pub secure_key: String,
    pub submitted_at: DateTime<Utc>,
    pub answers_count: usize,
    /// Answers keyed by stringified question id. A `BTreeMap` keeps the
    /// serialized order stable across runs.
    pub answers: BTreeMap<String, AnswerDetail>,
}

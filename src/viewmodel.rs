//! Display-ready projections of a raw recommendation response.
//!
//! These are derived values: recomputed from the raw response whenever it
//! changes, never mutated in place.

use serde::Serialize;

/// One training dimension split into its labeled sub-fields.
///
/// A block parsed from empty text has every field absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProgrammeBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensite: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temps: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exemples: Option<String>,
}

/// The four programme dimensions of the prescription page
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProgrammeVM {
    pub endurance: ProgrammeBlock,
    pub renforcement: ProgrammeBlock,
    pub etirements: ProgrammeBlock,
    pub equilibre: ProgrammeBlock,
}

/// One row of the weekly plan table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanifRow {
    pub jour: String,
    pub seance: String,
    pub duree: String,
    pub details: String,
}

/// Everything the prescription page renders
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PrescriptionVM {
    pub programme: ProgrammeVM,
    pub planification: Vec<PlanifRow>,
    pub objectifs: Vec<String>,
    pub contraindications: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precautions: Option<Vec<String>>,
    pub orientation: Vec<String>,
}

/// Everything the advice page renders
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConseilsVM {
    pub conseils: Vec<String>,
    pub benefices: Vec<String>,
}

/// The two page-ready projections of one raw response
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SplitRecommendation {
    pub prescription: PrescriptionVM,
    pub conseils: ConseilsVM,
}

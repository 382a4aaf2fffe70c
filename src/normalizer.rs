//! Projection of a raw service response into the two page view models.

use crate::model::RecommendationResponse;
use crate::parsers::{parse_planification_table, parse_programme_block};
use crate::viewmodel::{ConseilsVM, PrescriptionVM, ProgrammeVM, SplitRecommendation};

/// Split a raw recommendation into the prescription and advice views.
///
/// Total over any response: absent sections come out as empty sequences or
/// empty blocks, never as an error. Pure, so calling it twice on the same
/// input yields structurally equal output.
pub fn split_recommendation(data: &RecommendationResponse) -> SplitRecommendation {
    let programme = ProgrammeVM {
        endurance: parse_programme_block(&data.programme_perso.endurance),
        renforcement: parse_programme_block(&data.programme_perso.renforcement),
        etirements: parse_programme_block(&data.programme_perso.etirements),
        equilibre: parse_programme_block(data.programme_perso.equilibre.as_deref().unwrap_or("")),
    };

    SplitRecommendation {
        prescription: PrescriptionVM {
            programme,
            planification: parse_planification_table(&data.planification),
            objectifs: data.objectifs.clone(),
            contraindications: data.contraindications.clone(),
            precautions: data.precautions.clone(),
            orientation: data.orientation.clone(),
        },
        conseils: ConseilsVM {
            conseils: data.conseils.clone(),
            benefices: data.benefices.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProgrammePerso;
    use crate::viewmodel::ProgrammeBlock;

    fn populated_response() -> RecommendationResponse {
        RecommendationResponse {
            conseils: vec!["Marcher tous les jours".to_string()],
            objectifs: vec!["Améliorer l'endurance".to_string()],
            benefices: vec!["Meilleur sommeil".to_string()],
            programme_perso: ProgrammePerso {
                endurance: "• Fréquence: 3x/semaine\n• Intensité: modérée\n• Temps: 30 min"
                    .to_string(),
                renforcement: "• Fréquence: 2x/semaine".to_string(),
                etirements: "• Temps: 10 min".to_string(),
                equilibre: None,
            },
            planification: "Jour | Séance | Durée | Détails\nLundi | Cardio | 30min | Marche"
                .to_string(),
            orientation: vec!["Kinésithérapeute".to_string()],
            contraindications: vec!["Éviter les sauts".to_string()],
            medicaments: None,
            precautions: Some(vec!["Surveiller la fréquence cardiaque".to_string()]),
        }
    }

    #[test]
    fn splits_into_both_views() {
        let split = split_recommendation(&populated_response());

        let endurance = &split.prescription.programme.endurance;
        assert_eq!(endurance.frequence.as_deref(), Some("3x/semaine"));
        assert_eq!(endurance.intensite.as_deref(), Some("modérée"));
        assert_eq!(endurance.temps.as_deref(), Some("30 min"));

        assert_eq!(split.prescription.planification.len(), 1);
        assert_eq!(split.prescription.objectifs.len(), 1);
        assert_eq!(split.prescription.contraindications.len(), 1);
        assert!(split.prescription.precautions.is_some());
        assert_eq!(split.conseils.conseils.len(), 1);
        assert_eq!(split.conseils.benefices.len(), 1);
    }

    #[test]
    fn absent_equilibre_becomes_empty_block() {
        let split = split_recommendation(&populated_response());
        assert_eq!(
            split.prescription.programme.equilibre,
            ProgrammeBlock::default()
        );
    }

    #[test]
    fn total_on_all_absent_input() {
        let split = split_recommendation(&RecommendationResponse::default());

        assert_eq!(split.prescription.programme, Default::default());
        assert!(split.prescription.planification.is_empty());
        assert!(split.prescription.objectifs.is_empty());
        assert!(split.prescription.contraindications.is_empty());
        assert!(split.prescription.precautions.is_none());
        assert!(split.prescription.orientation.is_empty());
        assert!(split.conseils.conseils.is_empty());
        assert!(split.conseils.benefices.is_empty());
    }

    #[test]
    fn is_idempotent() {
        let response = populated_response();
        assert_eq!(
            split_recommendation(&response),
            split_recommendation(&response)
        );
    }
}

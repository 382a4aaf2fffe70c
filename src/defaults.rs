//! Canonical fallback recommendations.
//!
//! When the generation service cannot produce a usable response, callers
//! substitute this payload instead of showing a dead page. Every call site
//! must use this one definition so the user always sees the same document.

use crate::model::{ProgrammePerso, RecommendationResponse};

/// The single fallback `RecommendationResponse`.
///
/// The text is shaped like a well-formed service response (labeled bullet
/// lines, a four-column weekly table) so it projects into fully populated
/// views through the normalizer.
pub fn default_recommendation() -> RecommendationResponse {
    RecommendationResponse {
        conseils: vec![
            "🚶 Commencer par des activités douces comme la marche 30 min/jour".to_string(),
            "💧 Maintenir une hydratation adéquate (1.5-2L d'eau par jour)".to_string(),
            "📈 Augmenter progressivement l'intensité sur 4 semaines".to_string(),
            "🔄 Maintenir une régularité dans la pratique (minimum 3x/semaine)".to_string(),
            "🍎 Adapter l'alimentation à l'activité physique".to_string(),
            "😴 Respecter les temps de récupération entre les séances".to_string(),
            "📝 Tenir un journal de progression".to_string(),
            "👥 Envisager des activités en groupe pour la motivation".to_string(),
            "🎯 Se fixer des objectifs réalistes et progressifs".to_string(),
            "🩺 Consulter régulièrement pour un suivi médical".to_string(),
        ],
        objectifs: vec![
            "Améliorer la condition cardiovasculaire en 3 mois".to_string(),
            "Renforcer la masse musculaire de façon progressive".to_string(),
            "Réduire le stress quotidien par l'activité physique".to_string(),
            "Améliorer la qualité de sommeil".to_string(),
            "Maintenir un poids santé sur le long terme".to_string(),
        ],
        benefices: vec![
            "Réduction du risque cardiovasculaire de 30%".to_string(),
            "Amélioration de la qualité de sommeil".to_string(),
            "Augmentation de l'énergie quotidienne".to_string(),
            "Meilleure régulation de la glycémie".to_string(),
            "Renforcement du système immunitaire".to_string(),
            "Amélioration de l'humeur et réduction de l'anxiété".to_string(),
            "Augmentation de la densité osseuse".to_string(),
        ],
        programme_perso: ProgrammePerso {
            endurance: "• Fréquence: 3 séances par semaine\n\
                        • Intensité: modérée (essoufflement léger)\n\
                        • Temps: 30-45 minutes\n\
                        • Type: activité aérobie (marche rapide, natation, vélo)\n\
                        • Exemples guidés: commencer par 20 minutes et augmenter progressivement"
                .to_string(),
            renforcement: "• Fréquence: 2 séances par semaine\n\
                           • Intensité: légère à modérée\n\
                           • Temps: 20-30 minutes\n\
                           • Type: tous les groupes musculaires majeurs\n\
                           • Exemples guidés: poids du corps ou élastiques"
                .to_string(),
            etirements: "• Fréquence: après chaque séance\n\
                         • Intensité: sans douleur\n\
                         • Temps: 10-15 minutes\n\
                         • Type: souplesse générale\n\
                         • Exemples guidés: tenir chaque position 20-30 secondes"
                .to_string(),
            equilibre: Some(
                "• Fréquence: 2 fois par semaine\n\
                 • Intensité: progressive\n\
                 • Temps: 10 minutes\n\
                 • Type: équilibre statique et dynamique\n\
                 • Exemples guidés: tenir sur une jambe, marche talon-pointe"
                    .to_string(),
            ),
        },
        planification: "Jour | Séance | Durée | Détails\n\
                        Lundi | Cardio léger | 30 min | Marche ou natation\n\
                        Mardi | Repos actif | 15 min | Étirements\n\
                        Mercredi | Renforcement musculaire | 30 min | Poids du corps\n\
                        Jeudi | Repos | - | Récupération\n\
                        Vendredi | Activité mixte | 45 min | Cardio et renforcement\n\
                        Samedi | Activité récréative | Libre | Au choix\n\
                        Dimanche | Repos ou activité douce | - | Marche tranquille"
            .to_string(),
        orientation: vec![
            "Consultation avec un kinésithérapeute pour l'évaluation initiale et programme personnalisé".to_string(),
            "Suivi médical régulier tous les 3 mois pour ajuster le programme".to_string(),
            "Possibilité de rejoindre un club sportif ou association sportive adaptée".to_string(),
            "Éducateur sportif spécialisé en activité physique adaptée si besoin".to_string(),
            "Nutritionniste pour adapter l'alimentation aux objectifs".to_string(),
        ],
        contraindications: Vec::new(),
        medicaments: None,
        precautions: None,
    }
}

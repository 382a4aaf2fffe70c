use std::env;
use std::fs;

use serde::Deserialize;

use activ_reco::viewmodel::{ConseilsVM, PrescriptionVM, ProgrammeBlock};
use activ_reco::{
    fetch_or_default, split_recommendation, Answer, AppConfig, Question, RecommendationClient,
    Submission,
};

/// Submission bundle as exported by the questionnaire backend
#[derive(Debug, Deserialize)]
struct Bundle {
    submission: Submission,
    answers: Vec<Answer>,
    questions: Vec<Question>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let path = args
        .get(1)
        .ok_or("Please provide a submission bundle JSON file as an argument")?;
    let bundle: Bundle = serde_json::from_str(&fs::read_to_string(path)?)?;

    let config = AppConfig::load()?;
    let client = RecommendationClient::from_config(&config)?;

    let raw = fetch_or_default(
        &client,
        &bundle.submission,
        &bundle.answers,
        &bundle.questions,
    )
    .await;
    let views = split_recommendation(&raw);

    print_prescription(&views.prescription);
    print_conseils(&views.conseils);

    Ok(())
}

fn print_prescription(prescription: &PrescriptionVM) {
    println!("=== Prescription d'activité physique ===\n");

    print_block("Endurance", &prescription.programme.endurance);
    print_block("Renforcement", &prescription.programme.renforcement);
    print_block("Étirements", &prescription.programme.etirements);
    print_block("Équilibre", &prescription.programme.equilibre);

    if !prescription.planification.is_empty() {
        println!("Planification hebdomadaire:");
        for row in &prescription.planification {
            println!(
                "  {} — {} ({}) : {}",
                row.jour, row.seance, row.duree, row.details
            );
        }
        println!();
    }

    print_list("Objectifs", &prescription.objectifs);
    print_list("Contre-indications", &prescription.contraindications);
    if let Some(precautions) = &prescription.precautions {
        print_list("Précautions", precautions);
    }
    print_list("Orientation", &prescription.orientation);
}

fn print_conseils(conseils: &ConseilsVM) {
    println!("=== Conseils ===\n");
    print_list("Conseils", &conseils.conseils);
    print_list("Bénéfices attendus", &conseils.benefices);
}

fn print_block(title: &str, block: &ProgrammeBlock) {
    let fields = [
        ("Fréquence", &block.frequence),
        ("Intensité", &block.intensite),
        ("Temps", &block.temps),
        ("Type", &block.type_),
        ("Exemples", &block.exemples),
    ];
    if fields.iter().all(|(_, value)| value.is_none()) {
        return;
    }

    println!("{title}:");
    for (label, value) in fields {
        if let Some(value) = value {
            println!("  {label}: {value}");
        }
    }
    println!();
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("{title}:");
    for item in items {
        println!("  - {item}");
    }
    println!();
}

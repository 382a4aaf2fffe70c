use std::time::Duration;

use mockito::Server;

use activ_reco::client::ProxyEndpoint;
use activ_reco::{
    default_recommendation, fetch_or_default, split_recommendation, RecommendationClient,
    Submission,
};

fn empty_submission() -> Submission {
    Submission {
        id: "sub-fallback".to_string(),
        secure_key: Some("key".to_string()),
    }
}

#[tokio::test]
async fn client_failure_substitutes_the_canonical_defaults() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/ai-proxy")
        .with_status(500)
        .create_async()
        .await;

    let endpoint = ProxyEndpoint::new(
        format!("{}/api/ai-proxy", server.url()),
        Duration::from_secs(5),
    )
    .expect("proxy endpoint");
    let client = RecommendationClient::new(Box::new(endpoint));

    let response = fetch_or_default(&client, &empty_submission(), &[], &[]).await;
    assert_eq!(response, default_recommendation());
}

#[test]
fn the_default_payload_round_trips_through_the_normalizer() {
    let split = split_recommendation(&default_recommendation());

    assert!(!split.conseils.conseils.is_empty());
    assert!(!split.prescription.objectifs.is_empty());
    assert!(!split.prescription.planification.is_empty());

    // Labeled bullet lines in the default programme blocks must survive
    // block parsing, not degrade to empty records
    assert!(split
        .prescription
        .programme
        .endurance
        .frequence
        .is_some());
    assert!(split.prescription.programme.equilibre.exemples.is_some());
}

// libs/symptom-cell/tests/handlers_test.rs

use std::sync::Arc;

use assert_matches::assert_matches;
use axum::{
    extract::{Path, State},
    Json,
};
use tokio_test::assert_ok;

use shared_config::AppConfig;
use shared_models::{error::AppError, specialty::Specialty};
use shared_utils::test_utils::TestConfig;

use symptom_cell::handlers::*;
use symptom_cell::models::AnalyzeRequest;

fn create_test_state() -> Arc<AppConfig> {
    TestConfig::default().to_arc()
}

fn request(symptoms: &[&str]) -> Json<AnalyzeRequest> {
    Json(AnalyzeRequest {
        symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
    })
}

#[tokio::test]
async fn test_vocabulary_lists_known_symptoms() {
    let Json(body) = get_vocabulary().await;

    let symptoms = body["symptoms"].as_array().unwrap();
    assert_eq!(body["total"].as_u64().unwrap() as usize, symptoms.len());
    assert!(symptoms.iter().any(|s| s == "Wheezing"));
}

#[tokio::test]
async fn test_analyze_returns_ranked_matches_and_recommendation() {
    let result = analyze_symptoms(
        State(create_test_state()),
        request(&["Sneezing", "Runny Nose", "Itchy Eyes", "Nasal Congestion"]),
    )
    .await;

    let Json(response) = assert_ok!(result);
    assert_eq!(response.diseases[0].name(), "Allergic Rhinitis");
    assert_eq!(response.diseases[0].match_percentage, 100);
    assert_eq!(response.recommendation.specialty, Specialty::Allergist);
    assert!(response.warning.is_none());
    assert!(response.unrecognized_symptoms.is_empty());
}

#[tokio::test]
async fn test_analyze_with_single_symptom_warns_and_returns_empty() {
    let result = analyze_symptoms(State(create_test_state()), request(&["Fever"])).await;

    let Json(response) = assert_ok!(result);
    assert!(response.diseases.is_empty());
    assert_eq!(response.warning.as_deref(), Some("Please select at least 2 symptoms"));
    assert!(response.recommendation.is_fallback);
}

#[tokio::test]
async fn test_analyze_warning_and_matches_agree_on_unknown_labels() {
    // A low threshold would let a single known symptom match several diseases
    let config = Arc::new(AppConfig {
        match_threshold_percent: 20,
        ..TestConfig::default().to_app_config()
    });

    let result = analyze_symptoms(State(config), request(&["Fever", "not-a-symptom"])).await;

    let Json(response) = assert_ok!(result);
    assert!(response.diseases.is_empty());
    assert_eq!(response.warning.as_deref(), Some("Please select at least 2 symptoms"));
    assert_eq!(response.unrecognized_symptoms, vec!["not-a-symptom".to_string()]);
    assert!(response.recommendation.is_fallback);
}

#[tokio::test]
async fn test_analyze_reports_unrecognized_symptoms() {
    let result = analyze_symptoms(
        State(create_test_state()),
        request(&["Heartburn", "Bloating", "Hiccups"]),
    )
    .await;

    let Json(response) = assert_ok!(result);
    assert_eq!(response.unrecognized_symptoms, vec!["Hiccups".to_string()]);
    assert_eq!(response.diseases[0].name(), "Acid Reflux (GERD)");
    assert_eq!(response.recommendation.specialty, Specialty::Gastroenterologist);
}

#[tokio::test]
async fn test_analyze_response_serializes_disease_fields_inline() {
    let Json(response) = analyze_symptoms(
        State(create_test_state()),
        request(&["Frequent Urination", "Excessive Thirst", "Weight Loss"]),
    )
    .await
    .unwrap();

    let body = serde_json::to_value(&response).unwrap();
    let first = &body["diseases"][0];
    assert_eq!(first["name"], "Type 2 Diabetes");
    assert_eq!(first["match_percentage"], 60);
    assert_eq!(first["severity"], "Varies");
    assert!(first["medications"][0]["dosage"].is_string());
    assert_eq!(body["recommendation"]["specialty"], "Endocrinologist");
}

#[tokio::test]
async fn test_get_disease_found_and_missing() {
    let Json(body) = get_disease(Path("Sinusitis".to_string())).await.unwrap();
    assert_eq!(body["disease"]["name"], "Sinusitis");
    assert_eq!(body["specialty"], "ENT Specialist");

    let missing = get_disease(Path("Scurvy".to_string())).await;
    assert_matches!(missing, Err(AppError::NotFound(_)));
}

#[tokio::test]
async fn test_get_specialty_reports_miss_with_fallback() {
    let Json(body) = get_specialty(Path("Dengue Fever".to_string())).await;

    assert_eq!(body.specialty, None);
    assert_eq!(body.fallback, Specialty::GeneralPhysician);
}

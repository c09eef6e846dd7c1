use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use tracing::warn;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{AnalyzeRequest, AnalyzeResponse, SpecialtyLookupResponse, SymptomError};
use crate::services::{
    analysis::SymptomAnalysisService,
    knowledge,
    specialty::{specialty_for, SpecialtyRoutingService, FALLBACK_SPECIALTY},
};

#[axum::debug_handler]
pub async fn get_vocabulary() -> Json<Value> {
    let symptoms = knowledge::vocabulary();

    Json(json!({
        "symptoms": symptoms,
        "total": symptoms.len()
    }))
}

#[axum::debug_handler]
pub async fn analyze_symptoms(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let analysis_service = SymptomAnalysisService::new(&state);
    let routing_service = SpecialtyRoutingService::new();

    let unrecognized = knowledge::unrecognized(request.symptoms.iter().map(String::as_str));
    if !unrecognized.is_empty() {
        warn!("Ignoring unrecognized symptoms: {:?}", unrecognized);
    }

    let recognized = analysis_service.recognized(request.symptoms.iter().map(String::as_str));

    let warning = (!analysis_service.has_enough_symptoms(&recognized)).then(|| {
        format!(
            "Please select at least {} symptoms",
            analysis_service.min_selected_symptoms()
        )
    });

    let result = analysis_service.analyze(recognized.iter().copied());
    let recommendation = routing_service.route(&result);

    Ok(Json(AnalyzeResponse {
        diseases: result.diseases,
        unrecognized_symptoms: unrecognized,
        warning,
        recommendation,
    }))
}

#[axum::debug_handler]
pub async fn get_disease(Path(name): Path<String>) -> Result<Json<Value>, AppError> {
    let disease = knowledge::find_disease(&name)
        .ok_or_else(|| SymptomError::DiseaseNotFound(name.clone()))?;

    Ok(Json(json!({
        "disease": disease,
        "specialty": specialty_for(disease.name)
    })))
}

#[axum::debug_handler]
pub async fn get_specialty(Path(disease): Path<String>) -> Json<SpecialtyLookupResponse> {
    let specialty = specialty_for(&disease);

    Json(SpecialtyLookupResponse {
        disease,
        specialty,
        fallback: FALLBACK_SPECIALTY,
    })
}

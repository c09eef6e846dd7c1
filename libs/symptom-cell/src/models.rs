use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::error::AppError;
use shared_models::specialty::Specialty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Mild,
    Moderate,
    Varies,
}

#[derive(Debug, Serialize)]
pub struct Medication {
    pub name: &'static str,
    pub dosage: &'static str,
    pub purpose: &'static str,
}

/// Knowledge base record. All diseases are compiled into the binary and never change.
#[derive(Debug, Serialize)]
pub struct Disease {
    pub name: &'static str,
    pub symptoms: &'static [&'static str],
    pub severity: Severity,
    pub medications: &'static [Medication],
    pub duration: &'static str,
    pub precautions: &'static [&'static str],
}

impl Disease {
    pub fn has_symptom(&self, symptom: &str) -> bool {
        self.symptoms.iter().any(|known| *known == symptom)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DiseaseMatch {
    #[serde(flatten)]
    pub disease: &'static Disease,
    pub match_percentage: u8,
}

impl DiseaseMatch {
    pub fn name(&self) -> &'static str {
        self.disease.name
    }
}

/// Candidate conditions ordered by descending match percentage.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalysisResult {
    pub diseases: Vec<DiseaseMatch>,
}

impl AnalysisResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.diseases.is_empty()
    }

    pub fn top(&self) -> Option<&DiseaseMatch> {
        self.diseases.first()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.diseases.iter().map(DiseaseMatch::name).collect()
    }
}

/// Where the patient should be sent after an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecialtyRoute {
    pub disease: Option<String>,
    pub specialty: Specialty,
    pub is_fallback: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub symptoms: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    pub diseases: Vec<DiseaseMatch>,
    pub unrecognized_symptoms: Vec<String>,
    pub warning: Option<String>,
    pub recommendation: SpecialtyRoute,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpecialtyLookupResponse {
    pub disease: String,
    pub specialty: Option<Specialty>,
    pub fallback: Specialty,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymptomError {
    #[error("Disease not found: {0}")]
    DiseaseNotFound(String),
}

impl From<SymptomError> for AppError {
    fn from(err: SymptomError) -> Self {
        match err {
            SymptomError::DiseaseNotFound(_) => AppError::NotFound(err.to_string()),
        }
    }
}

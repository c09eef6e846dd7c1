// libs/symptom-cell/src/services/specialty.rs
use tracing::debug;

use shared_models::specialty::Specialty;

use crate::models::{AnalysisResult, SpecialtyRoute};

/// Specialty used when a condition has no curated mapping.
pub const FALLBACK_SPECIALTY: Specialty = Specialty::GeneralPhysician;

// Food Poisoning and Dengue Fever have no mapping.
static SPECIALTY_MAP: &[(&str, Specialty)] = &[
    ("Common Cold", Specialty::GeneralPhysician),
    ("Influenza", Specialty::GeneralPhysician),
    ("COVID-19", Specialty::Pulmonologist),
    ("Migraine", Specialty::Neurologist),
    ("Gastroenteritis", Specialty::Gastroenterologist),
    ("Asthma", Specialty::Pulmonologist),
    ("Allergic Rhinitis", Specialty::Allergist),
    ("Sinusitis", Specialty::EntSpecialist),
    ("Hypertension", Specialty::Cardiologist),
    ("Type 2 Diabetes", Specialty::Endocrinologist),
    ("Urinary Tract Infection", Specialty::Urologist),
    ("Acid Reflux (GERD)", Specialty::Gastroenterologist),
    ("Anxiety Disorder", Specialty::Psychiatrist),
    ("Arthritis", Specialty::Rheumatologist),
];

/// Looks up the specialty for a disease. A miss is a normal outcome.
pub fn specialty_for(disease_name: &str) -> Option<Specialty> {
    SPECIALTY_MAP
        .iter()
        .find(|(name, _)| *name == disease_name)
        .map(|(_, specialty)| *specialty)
}

pub struct SpecialtyRoutingService;

impl SpecialtyRoutingService {
    pub fn new() -> Self {
        Self
    }

    /// Routes on the top-ranked disease, falling back to general consultation.
    pub fn route(&self, result: &AnalysisResult) -> SpecialtyRoute {
        let Some(top) = result.top() else {
            debug!("No matching disease, routing to {}", FALLBACK_SPECIALTY);
            return SpecialtyRoute {
                disease: None,
                specialty: FALLBACK_SPECIALTY,
                is_fallback: true,
            };
        };

        match specialty_for(top.name()) {
            Some(specialty) => SpecialtyRoute {
                disease: Some(top.name().to_string()),
                specialty,
                is_fallback: false,
            },
            None => {
                debug!("No specialty mapped for {}, routing to {}", top.name(), FALLBACK_SPECIALTY);
                SpecialtyRoute {
                    disease: Some(top.name().to_string()),
                    specialty: FALLBACK_SPECIALTY,
                    is_fallback: true,
                }
            }
        }
    }
}

impl Default for SpecialtyRoutingService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::knowledge::find_disease;

    #[test]
    fn every_mapped_name_exists_in_knowledge_base() {
        for (name, _) in SPECIALTY_MAP {
            assert!(find_disease(name).is_some(), "{} is not a known disease", name);
        }
    }

    #[test]
    fn lookup_hits_and_misses() {
        assert_eq!(specialty_for("Hypertension"), Some(Specialty::Cardiologist));
        assert_eq!(specialty_for("Dengue Fever"), None);
        assert_eq!(specialty_for("hypertension"), None);
        assert_eq!(specialty_for(""), None);
    }
}

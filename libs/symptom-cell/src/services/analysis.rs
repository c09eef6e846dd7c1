// libs/symptom-cell/src/services/analysis.rs
use std::collections::HashSet;

use tracing::{debug, info};

use shared_config::AppConfig;

use crate::models::{AnalysisResult, DiseaseMatch};
use crate::services::knowledge::{self, DISEASES};

/// `round(100 * matching / total)` with halves rounded up.
///
/// The denominator is the disease's own symptom count, not the size of the
/// caller's selection.
pub fn match_percentage(matching: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let matching = matching.min(total);
    ((200 * matching + total) / (2 * total)) as u8
}

pub struct SymptomAnalysisService {
    match_threshold_percent: u8,
    min_selected_symptoms: usize,
}

impl SymptomAnalysisService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            match_threshold_percent: config.match_threshold_percent,
            min_selected_symptoms: config.min_selected_symptoms,
        }
    }

    pub fn min_selected_symptoms(&self) -> usize {
        self.min_selected_symptoms
    }

    /// Distinct selected labels that belong to the vocabulary.
    pub fn recognized<'a, I>(&self, selected: I) -> HashSet<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        selected
            .into_iter()
            .filter(|symptom| knowledge::is_known_symptom(symptom))
            .collect()
    }

    pub fn has_enough_symptoms(&self, recognized: &HashSet<&str>) -> bool {
        recognized.len() >= self.min_selected_symptoms
    }

    /// Rank knowledge base diseases against the selected symptoms.
    ///
    /// Duplicate labels count once and labels outside the vocabulary are
    /// ignored. When fewer distinct known symptoms than the configured
    /// minimum are given the result is empty rather than an error.
    pub fn analyze<'a, I>(&self, selected: I) -> AnalysisResult
    where
        I: IntoIterator<Item = &'a str>,
    {
        let selected = self.recognized(selected);

        if !self.has_enough_symptoms(&selected) {
            debug!(
                "Skipping analysis: {} symptoms selected, at least {} required",
                selected.len(),
                self.min_selected_symptoms
            );
            return AnalysisResult::empty();
        }

        let mut diseases: Vec<DiseaseMatch> = DISEASES
            .iter()
            .filter_map(|disease| {
                let matching = disease
                    .symptoms
                    .iter()
                    .filter(|symptom| selected.contains(**symptom))
                    .count();

                if matching == 0 {
                    return None;
                }

                let percentage = match_percentage(matching, disease.symptoms.len());
                (percentage >= self.match_threshold_percent).then_some(DiseaseMatch {
                    disease,
                    match_percentage: percentage,
                })
            })
            .collect();

        // sort_by is stable, so ties keep table order
        diseases.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));

        info!(
            "Symptom analysis matched {} diseases from {} symptoms",
            diseases.len(),
            selected.len()
        );

        AnalysisResult { diseases }
    }
}

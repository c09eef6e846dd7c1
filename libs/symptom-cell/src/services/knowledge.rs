// libs/symptom-cell/src/services/knowledge.rs
use std::collections::BTreeSet;

use crate::models::{Disease, Medication, Severity};

/// Static disease table. Table order is the tie-break order for analysis results.
pub static DISEASES: &[Disease] = &[
    Disease {
        name: "Common Cold",
        symptoms: &["Runny Nose", "Sneezing", "Sore Throat", "Cough", "Nasal Congestion"],
        severity: Severity::Mild,
        medications: &[
            Medication { name: "Paracetamol", dosage: "500mg every 6 hours as needed", purpose: "Relieves aches and mild fever" },
            Medication { name: "Cetirizine", dosage: "10mg once daily", purpose: "Reduces sneezing and runny nose" },
        ],
        duration: "7-10 days",
        precautions: &["Rest and stay hydrated", "Wash hands frequently", "Avoid close contact with others"],
    },
    Disease {
        name: "Influenza",
        symptoms: &["Fever", "Chills", "Body Aches", "Fatigue", "Cough", "Headache"],
        severity: Severity::Moderate,
        medications: &[
            Medication { name: "Oseltamivir", dosage: "75mg twice daily for 5 days", purpose: "Antiviral treatment when started early" },
            Medication { name: "Ibuprofen", dosage: "400mg every 8 hours with food", purpose: "Reduces fever and body aches" },
        ],
        duration: "1-2 weeks",
        precautions: &["Stay home until fever-free for 24 hours", "Drink plenty of fluids", "Get an annual flu vaccine"],
    },
    Disease {
        name: "COVID-19",
        symptoms: &["Fever", "Cough", "Fatigue", "Loss of Taste or Smell", "Shortness of Breath", "Body Aches", "Sore Throat"],
        severity: Severity::Varies,
        medications: &[
            Medication { name: "Paracetamol", dosage: "500mg every 6 hours as needed", purpose: "Controls fever and pain" },
        ],
        duration: "1-3 weeks",
        precautions: &["Isolate and get tested", "Monitor oxygen levels", "Seek urgent care if breathing worsens"],
    },
    Disease {
        name: "Migraine",
        symptoms: &["Headache", "Nausea", "Sensitivity to Light", "Blurred Vision", "Dizziness"],
        severity: Severity::Moderate,
        medications: &[
            Medication { name: "Sumatriptan", dosage: "50mg at onset, may repeat after 2 hours", purpose: "Stops migraine attacks" },
            Medication { name: "Naproxen", dosage: "500mg at onset", purpose: "Relieves headache pain" },
        ],
        duration: "4-72 hours per episode",
        precautions: &["Rest in a dark, quiet room", "Keep a headache diary", "Avoid known triggers"],
    },
    Disease {
        name: "Gastroenteritis",
        symptoms: &["Nausea", "Vomiting", "Diarrhea", "Abdominal Pain", "Fever"],
        severity: Severity::Moderate,
        medications: &[
            Medication { name: "Oral Rehydration Salts", dosage: "200ml after each loose stool", purpose: "Prevents dehydration" },
            Medication { name: "Ondansetron", dosage: "4mg every 8 hours as needed", purpose: "Controls nausea and vomiting" },
        ],
        duration: "1-3 days",
        precautions: &["Sip fluids frequently", "Eat bland foods", "Wash hands after using the toilet"],
    },
    Disease {
        name: "Food Poisoning",
        symptoms: &["Nausea", "Vomiting", "Diarrhea", "Abdominal Pain"],
        severity: Severity::Mild,
        medications: &[
            Medication { name: "Oral Rehydration Salts", dosage: "200ml after each loose stool", purpose: "Replaces lost fluids and salts" },
        ],
        duration: "1-2 days",
        precautions: &["Avoid solid food until vomiting stops", "Discard suspect food", "Seek care if symptoms last over 3 days"],
    },
    Disease {
        name: "Asthma",
        symptoms: &["Shortness of Breath", "Wheezing", "Cough", "Chest Tightness"],
        severity: Severity::Varies,
        medications: &[
            Medication { name: "Salbutamol Inhaler", dosage: "1-2 puffs every 4-6 hours as needed", purpose: "Quick relief of bronchospasm" },
            Medication { name: "Budesonide Inhaler", dosage: "200mcg twice daily", purpose: "Long-term airway inflammation control" },
        ],
        duration: "Chronic",
        precautions: &["Carry a rescue inhaler", "Avoid smoke and allergens", "Follow an asthma action plan"],
    },
    Disease {
        name: "Allergic Rhinitis",
        symptoms: &["Sneezing", "Runny Nose", "Itchy Eyes", "Nasal Congestion"],
        severity: Severity::Mild,
        medications: &[
            Medication { name: "Loratadine", dosage: "10mg once daily", purpose: "Relieves allergy symptoms" },
            Medication { name: "Fluticasone Nasal Spray", dosage: "2 sprays per nostril once daily", purpose: "Reduces nasal inflammation" },
        ],
        duration: "Seasonal or year-round",
        precautions: &["Limit exposure to allergens", "Keep windows closed during high pollen days"],
    },
    Disease {
        name: "Sinusitis",
        symptoms: &["Facial Pain", "Nasal Congestion", "Headache", "Runny Nose", "Fever"],
        severity: Severity::Mild,
        medications: &[
            Medication { name: "Saline Nasal Rinse", dosage: "Twice daily", purpose: "Clears nasal passages" },
            Medication { name: "Amoxicillin", dosage: "500mg three times daily for 7 days", purpose: "Treats bacterial sinusitis when prescribed" },
        ],
        duration: "2-4 weeks",
        precautions: &["Use steam inhalation", "Stay hydrated", "See a doctor if symptoms last over 10 days"],
    },
    Disease {
        name: "Hypertension",
        symptoms: &["Headache", "Dizziness", "Blurred Vision", "Chest Pain", "Palpitations"],
        severity: Severity::Varies,
        medications: &[
            Medication { name: "Amlodipine", dosage: "5mg once daily", purpose: "Lowers blood pressure" },
            Medication { name: "Losartan", dosage: "50mg once daily", purpose: "Lowers blood pressure and protects kidneys" },
        ],
        duration: "Chronic",
        precautions: &["Reduce salt intake", "Exercise regularly", "Monitor blood pressure at home"],
    },
    Disease {
        name: "Type 2 Diabetes",
        symptoms: &["Frequent Urination", "Excessive Thirst", "Fatigue", "Blurred Vision", "Weight Loss"],
        severity: Severity::Varies,
        medications: &[
            Medication { name: "Metformin", dosage: "500mg twice daily with meals", purpose: "Improves blood sugar control" },
        ],
        duration: "Chronic",
        precautions: &["Monitor blood glucose", "Follow a balanced diet", "Have regular eye and foot checks"],
    },
    Disease {
        name: "Urinary Tract Infection",
        symptoms: &["Burning Urination", "Frequent Urination", "Abdominal Pain", "Fever"],
        severity: Severity::Moderate,
        medications: &[
            Medication { name: "Nitrofurantoin", dosage: "100mg twice daily for 5 days", purpose: "Treats bacterial infection" },
        ],
        duration: "3-7 days with treatment",
        precautions: &["Drink plenty of water", "Do not delay urination", "Complete the full antibiotic course"],
    },
    Disease {
        name: "Acid Reflux (GERD)",
        symptoms: &["Heartburn", "Chest Pain", "Bloating", "Nausea"],
        severity: Severity::Mild,
        medications: &[
            Medication { name: "Omeprazole", dosage: "20mg once daily before breakfast", purpose: "Reduces stomach acid" },
            Medication { name: "Antacid", dosage: "10ml after meals as needed", purpose: "Neutralizes stomach acid" },
        ],
        duration: "Chronic or recurring",
        precautions: &["Avoid late meals", "Raise the head of the bed", "Limit spicy and fatty foods"],
    },
    Disease {
        name: "Dengue Fever",
        symptoms: &["Fever", "Headache", "Joint Pain", "Rash", "Fatigue", "Nausea"],
        severity: Severity::Moderate,
        medications: &[
            Medication { name: "Paracetamol", dosage: "500mg every 6 hours, max 4g per day", purpose: "Controls fever; avoid NSAIDs" },
        ],
        duration: "1-2 weeks",
        precautions: &["Avoid aspirin and ibuprofen", "Monitor platelet count", "Use mosquito protection"],
    },
    Disease {
        name: "Anxiety Disorder",
        symptoms: &["Anxiety", "Palpitations", "Insomnia", "Fatigue", "Dizziness"],
        severity: Severity::Varies,
        medications: &[
            Medication { name: "Sertraline", dosage: "50mg once daily", purpose: "Long-term anxiety management" },
        ],
        duration: "Varies",
        precautions: &["Practice breathing exercises", "Limit caffeine", "Seek counselling support"],
    },
    Disease {
        name: "Arthritis",
        symptoms: &["Joint Pain", "Muscle Stiffness", "Swelling", "Fatigue"],
        severity: Severity::Varies,
        medications: &[
            Medication { name: "Diclofenac Gel", dosage: "Apply to affected joints 3-4 times daily", purpose: "Local pain relief" },
            Medication { name: "Ibuprofen", dosage: "400mg every 8 hours with food", purpose: "Reduces pain and inflammation" },
        ],
        duration: "Chronic",
        precautions: &["Stay physically active", "Maintain a healthy weight", "Use joint protection techniques"],
    },
];

/// Sorted, de-duplicated union of every disease's symptom set.
pub fn vocabulary() -> Vec<&'static str> {
    DISEASES
        .iter()
        .flat_map(|disease| disease.symptoms.iter().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn is_known_symptom(symptom: &str) -> bool {
    DISEASES.iter().any(|disease| disease.has_symptom(symptom))
}

/// Labels that are not part of the vocabulary, in input order.
pub fn unrecognized<'a, I>(selected: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = BTreeSet::new();
    selected
        .into_iter()
        .filter(|symptom| !is_known_symptom(symptom))
        .filter(|symptom| seen.insert(*symptom))
        .map(str::to_string)
        .collect()
}

pub fn find_disease(name: &str) -> Option<&'static Disease> {
    DISEASES.iter().find(|disease| disease.name == name)
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Medical specialization used to route a patient toward a category of doctor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialty {
    #[serde(rename = "General Physician")]
    GeneralPhysician,
    Cardiologist,
    Neurologist,
    Pulmonologist,
    Gastroenterologist,
    Endocrinologist,
    Urologist,
    Psychiatrist,
    Rheumatologist,
    #[serde(rename = "ENT Specialist")]
    EntSpecialist,
    Allergist,
    Dermatologist,
}

impl Specialty {
    pub const ALL: [Specialty; 12] = [
        Specialty::GeneralPhysician,
        Specialty::Cardiologist,
        Specialty::Neurologist,
        Specialty::Pulmonologist,
        Specialty::Gastroenterologist,
        Specialty::Endocrinologist,
        Specialty::Urologist,
        Specialty::Psychiatrist,
        Specialty::Rheumatologist,
        Specialty::EntSpecialist,
        Specialty::Allergist,
        Specialty::Dermatologist,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Specialty::GeneralPhysician => "General Physician",
            Specialty::Cardiologist => "Cardiologist",
            Specialty::Neurologist => "Neurologist",
            Specialty::Pulmonologist => "Pulmonologist",
            Specialty::Gastroenterologist => "Gastroenterologist",
            Specialty::Endocrinologist => "Endocrinologist",
            Specialty::Urologist => "Urologist",
            Specialty::Psychiatrist => "Psychiatrist",
            Specialty::Rheumatologist => "Rheumatologist",
            Specialty::EntSpecialist => "ENT Specialist",
            Specialty::Allergist => "Allergist",
            Specialty::Dermatologist => "Dermatologist",
        }
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSpecialty(pub String);

impl fmt::Display for UnknownSpecialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown specialty: {}", self.0)
    }
}

impl std::error::Error for UnknownSpecialty {}

impl FromStr for Specialty {
    type Err = UnknownSpecialty;

    // Case-insensitive match against the display label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Specialty::ALL
            .iter()
            .copied()
            .find(|specialty| specialty.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownSpecialty(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!("cardiologist".parse::<Specialty>(), Ok(Specialty::Cardiologist));
        assert_eq!("ENT specialist".parse::<Specialty>(), Ok(Specialty::EntSpecialist));
        assert_eq!(" General Physician ".parse::<Specialty>(), Ok(Specialty::GeneralPhysician));
    }

    #[test]
    fn rejects_unknown_labels() {
        assert!("Astrologer".parse::<Specialty>().is_err());
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&Specialty::EntSpecialist).unwrap();
        assert_eq!(json, "\"ENT Specialist\"");
    }
}

// libs/doctor-cell/src/services/doctor.rs
use tracing::debug;

use shared_models::specialty::Specialty;

use crate::models::{Doctor, DoctorError, Hospital};

static HOSPITALS: &[Hospital] = &[
    Hospital {
        id: "hosp-001",
        name: "City Care Multispeciality Hospital",
        city: "Mumbai",
        address: "12 Marine Drive, Mumbai",
        phone: "+91 22 4000 1100",
        specialties: &[
            Specialty::GeneralPhysician,
            Specialty::Cardiologist,
            Specialty::Neurologist,
            Specialty::Gastroenterologist,
        ],
    },
    Hospital {
        id: "hosp-002",
        name: "Green Valley Medical Centre",
        city: "Bengaluru",
        address: "45 MG Road, Bengaluru",
        phone: "+91 80 4100 2200",
        specialties: &[
            Specialty::Pulmonologist,
            Specialty::Endocrinologist,
            Specialty::Urologist,
            Specialty::GeneralPhysician,
        ],
    },
    Hospital {
        id: "hosp-003",
        name: "Sunrise Clinic",
        city: "Delhi",
        address: "8 Connaught Place, New Delhi",
        phone: "+91 11 4200 3300",
        specialties: &[
            Specialty::Psychiatrist,
            Specialty::Rheumatologist,
            Specialty::Dermatologist,
        ],
    },
    Hospital {
        id: "hosp-004",
        name: "Lakeside ENT & Allergy Institute",
        city: "Mumbai",
        address: "3 Powai Lake Road, Mumbai",
        phone: "+91 22 4300 4400",
        specialties: &[Specialty::EntSpecialist, Specialty::Allergist],
    },
];

static DOCTORS: &[Doctor] = &[
    Doctor {
        id: "doc-001",
        name: "Dr. Ananya Rao",
        specialty: Specialty::GeneralPhysician,
        hospital_id: "hosp-001",
        experience_years: 12,
        rating: 4.7,
        consultation_fee: 500,
        working_hours: "9:00 AM - 5:00 PM",
    },
    Doctor {
        id: "doc-002",
        name: "Dr. Vikram Mehta",
        specialty: Specialty::Cardiologist,
        hospital_id: "hosp-001",
        experience_years: 18,
        rating: 4.9,
        consultation_fee: 1200,
        working_hours: "10:00 AM - 6:00 PM",
    },
    Doctor {
        id: "doc-003",
        name: "Dr. Priya Nair",
        specialty: Specialty::Neurologist,
        hospital_id: "hosp-001",
        experience_years: 14,
        rating: 4.8,
        consultation_fee: 1000,
        working_hours: "11:00 AM - 7:00 PM",
    },
    Doctor {
        id: "doc-004",
        name: "Dr. Rahul Sharma",
        specialty: Specialty::Pulmonologist,
        hospital_id: "hosp-002",
        experience_years: 10,
        rating: 4.6,
        consultation_fee: 900,
        working_hours: "8:30 AM - 2:30 PM",
    },
    Doctor {
        id: "doc-005",
        name: "Dr. Meera Iyer",
        specialty: Specialty::Gastroenterologist,
        hospital_id: "hosp-001",
        experience_years: 16,
        rating: 4.7,
        consultation_fee: 1100,
        working_hours: "9:30 AM - 4:30 PM",
    },
    Doctor {
        id: "doc-006",
        name: "Dr. Arjun Kapoor",
        specialty: Specialty::Endocrinologist,
        hospital_id: "hosp-002",
        experience_years: 11,
        rating: 4.5,
        consultation_fee: 950,
        working_hours: "12:00 PM - 8:00 PM",
    },
    Doctor {
        id: "doc-007",
        name: "Dr. Sneha Kulkarni",
        specialty: Specialty::Urologist,
        hospital_id: "hosp-002",
        experience_years: 9,
        rating: 4.4,
        consultation_fee: 850,
        working_hours: "10:00 AM - 4:00 PM",
    },
    Doctor {
        id: "doc-008",
        name: "Dr. Kabir Singh",
        specialty: Specialty::Psychiatrist,
        hospital_id: "hosp-003",
        experience_years: 13,
        rating: 4.8,
        consultation_fee: 1300,
        working_hours: "1:00 PM - 9:00 PM",
    },
    Doctor {
        id: "doc-009",
        name: "Dr. Fatima Sheikh",
        specialty: Specialty::Rheumatologist,
        hospital_id: "hosp-003",
        experience_years: 15,
        rating: 4.6,
        consultation_fee: 1000,
        working_hours: "9:00 AM - 3:00 PM",
    },
    Doctor {
        id: "doc-010",
        name: "Dr. Rohan Das",
        specialty: Specialty::EntSpecialist,
        hospital_id: "hosp-004",
        experience_years: 8,
        rating: 4.5,
        consultation_fee: 700,
        working_hours: "10:30 AM - 5:30 PM",
    },
    Doctor {
        id: "doc-011",
        name: "Dr. Kavya Menon",
        specialty: Specialty::Allergist,
        hospital_id: "hosp-004",
        experience_years: 7,
        rating: 4.3,
        consultation_fee: 650,
        working_hours: "9:00 AM - 1:00 PM",
    },
    Doctor {
        id: "doc-012",
        name: "Dr. Nikhil Joshi",
        specialty: Specialty::Dermatologist,
        hospital_id: "hosp-003",
        experience_years: 10,
        rating: 4.6,
        consultation_fee: 800,
        working_hours: "11:00 AM - 6:00 PM",
    },
    Doctor {
        id: "doc-013",
        name: "Dr. Isha Verma",
        specialty: Specialty::GeneralPhysician,
        hospital_id: "hosp-002",
        experience_years: 6,
        rating: 4.4,
        consultation_fee: 400,
        working_hours: "7:00 AM - 1:00 PM",
    },
];

/// Read-only doctor and hospital directory backed by mock data.
pub struct DoctorService;

impl DoctorService {
    pub fn new() -> Self {
        Self
    }

    /// Doctors in directory order, optionally restricted to one specialty.
    pub fn list_doctors(&self, specialty: Option<Specialty>) -> Vec<&'static Doctor> {
        debug!("Listing doctors with specialty filter: {:?}", specialty);

        DOCTORS
            .iter()
            .filter(|doctor| specialty.map_or(true, |wanted| doctor.specialty == wanted))
            .collect()
    }

    pub fn get_doctor(&self, doctor_id: &str) -> Result<&'static Doctor, DoctorError> {
        DOCTORS
            .iter()
            .find(|doctor| doctor.id == doctor_id)
            .ok_or_else(|| DoctorError::NotFound(doctor_id.to_string()))
    }

    /// Hospitals, optionally filtered by city (case-insensitive).
    pub fn list_hospitals(&self, city: Option<&str>) -> Vec<&'static Hospital> {
        HOSPITALS
            .iter()
            .filter(|hospital| {
                city.map_or(true, |wanted| hospital.city.eq_ignore_ascii_case(wanted.trim()))
            })
            .collect()
    }

    pub fn get_hospital(&self, hospital_id: &str) -> Result<&'static Hospital, DoctorError> {
        HOSPITALS
            .iter()
            .find(|hospital| hospital.id == hospital_id)
            .ok_or_else(|| DoctorError::HospitalNotFound(hospital_id.to_string()))
    }
}

impl Default for DoctorService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_doctor_references_a_known_hospital() {
        let service = DoctorService::new();
        for doctor in DOCTORS {
            assert!(service.get_hospital(doctor.hospital_id).is_ok(), "{}", doctor.id);
        }
    }

    #[test]
    fn every_specialty_has_a_doctor() {
        let covered: HashSet<_> = DOCTORS.iter().map(|d| d.specialty).collect();
        for specialty in Specialty::ALL {
            assert!(covered.contains(&specialty), "{} has no doctor", specialty);
        }
    }

    #[test]
    fn doctor_ids_are_unique() {
        let ids: HashSet<_> = DOCTORS.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), DOCTORS.len());
    }
}

use std::fmt;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_config::AppConfig;
use shared_models::error::AppError;
use shared_models::specialty::Specialty;

use crate::services::mask::MaskRegistry;

#[derive(Debug, Serialize)]
pub struct Doctor {
    pub id: &'static str,
    pub name: &'static str,
    pub specialty: Specialty,
    pub hospital_id: &'static str,
    pub experience_years: u8,
    pub rating: f32,
    pub consultation_fee: u32,
    pub working_hours: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Hospital {
    pub id: &'static str,
    pub name: &'static str,
    pub city: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub specialties: &'static [Specialty],
}

/// A doctor's daily consultation window, parsed from "H:MM AM - H:MM PM".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingHours {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Canonical string for one calendar date, e.g. "Mon Oct 19 2026".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DayKey(String);

impl DayKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format("%a %b %d %Y").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: u32,
    pub time: String,
    pub available: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DoctorSearchQuery {
    pub specialty: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HospitalSearchQuery {
    pub city: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlotsQuery {
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct SlotsResponse {
    pub doctor_id: String,
    pub date: NaiveDate,
    pub day_key: DayKey,
    pub working_hours: String,
    pub slots: Vec<TimeSlot>,
}

/// Shared state for the doctor routes.
#[derive(Clone)]
pub struct DoctorState {
    pub config: Arc<AppConfig>,
    pub masks: Arc<MaskRegistry>,
}

impl DoctorState {
    pub fn new(config: Arc<AppConfig>) -> Self {
        let masks = Arc::new(MaskRegistry::new(&config));
        Self { config, masks }
    }

    pub fn with_masks(config: Arc<AppConfig>, masks: Arc<MaskRegistry>) -> Self {
        Self { config, masks }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DoctorError {
    #[error("Doctor not found: {0}")]
    NotFound(String),

    #[error("Hospital not found: {0}")]
    HospitalNotFound(String),

    #[error("Malformed working hours: {0}")]
    MalformedWorkingHours(String),

    #[error("Unknown specialty: {0}")]
    UnknownSpecialty(String),

    #[error("Date {0} is in the past")]
    PastDate(NaiveDate),
}

impl From<DoctorError> for AppError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::NotFound(_) | DoctorError::HospitalNotFound(_) => {
                AppError::NotFound(err.to_string())
            }
            DoctorError::MalformedWorkingHours(_) => AppError::Internal(err.to_string()),
            DoctorError::UnknownSpecialty(_) | DoctorError::PastDate(_) => {
                AppError::BadRequest(err.to_string())
            }
        }
    }
}

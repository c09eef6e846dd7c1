// libs/appointment-cell/src/models.rs
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use doctor_cell::services::MaskRegistry;
use shared_config::AppConfig;
use shared_models::error::AppError;
use shared_models::specialty::Specialty;

use crate::services::booking::BookingService;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: Uuid,
    pub doctor_id: String,
    pub doctor_name: String,
    pub specialty: Specialty,
    pub date: NaiveDate,
    pub slot_id: u32,
    pub time: String,
    pub patient_name: String,
    pub patient_phone: String,
    pub patient_email: Option<String>,
    pub reason: Option<String>,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    /// Whether this appointment holds its slot.
    pub fn occupies_slot(&self) -> bool {
        self.status != AppointmentStatus::Cancelled
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Upcoming,
    Completed,
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Upcoming => write!(f, "upcoming"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub doctor_id: String,
    pub date: NaiveDate,
    pub slot_id: u32,
    pub patient_name: String,
    pub patient_phone: String,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: AppointmentStatus,
}

// ==============================================================================
// STATE
// ==============================================================================

#[derive(Clone)]
pub struct AppointmentState {
    pub masks: Arc<MaskRegistry>,
    pub bookings: Arc<BookingService>,
}

impl AppointmentState {
    pub fn new(config: &AppConfig, masks: Arc<MaskRegistry>) -> Self {
        Self {
            masks,
            bookings: Arc::new(BookingService::new(config)),
        }
    }
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppointmentError {
    #[error("Appointment not found: {0}")]
    NotFound(Uuid),

    #[error("Doctor not found: {0}")]
    DoctorNotFound(String),

    #[error("Slot {slot_id} does not exist on {date}")]
    SlotNotFound { slot_id: u32, date: NaiveDate },

    #[error("Slot {slot_id} on {date} is not available")]
    SlotNotAvailable { slot_id: u32, date: NaiveDate },

    #[error("Slot {slot_id} on {date} is already booked")]
    SlotAlreadyBooked { slot_id: u32, date: NaiveDate },

    #[error("Cannot book a date in the past: {0}")]
    PastDate(NaiveDate),

    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::NotFound(_)
            | AppointmentError::DoctorNotFound(_)
            | AppointmentError::SlotNotFound { .. } => AppError::NotFound(err.to_string()),
            AppointmentError::SlotNotAvailable { .. }
            | AppointmentError::SlotAlreadyBooked { .. } => AppError::Conflict(err.to_string()),
            AppointmentError::InvalidStatusTransition { .. } => {
                AppError::Unprocessable(err.to_string())
            }
            AppointmentError::PastDate(_) | AppointmentError::ValidationError(_) => {
                AppError::ValidationError(err.to_string())
            }
        }
    }
}

// libs/appointment-cell/src/services/booking.rs
use std::collections::HashMap;

use chrono::{Local, NaiveDateTime, Utc};
use regex::Regex;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use doctor_cell::services::{AvailabilityService, DoctorService, MaskRegistry};
use shared_config::AppConfig;
use shared_models::session::Session;

use crate::models::{Appointment, AppointmentError, AppointmentStatus, BookAppointmentRequest};
use crate::services::lifecycle::AppointmentLifecycleService;

const PHONE_PATTERN: &str = r"^\+?[0-9][0-9\s\-().]{5,18}[0-9]$";

/// In-memory appointment book, keyed by the owning session.
///
/// Nothing here survives a restart; appointments are never deleted, only
/// moved through their lifecycle.
pub struct BookingService {
    appointments: RwLock<HashMap<String, Vec<Appointment>>>,
    availability_service: AvailabilityService,
    doctor_service: DoctorService,
    lifecycle_service: AppointmentLifecycleService,
    phone_regex: Regex,
}

impl BookingService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            appointments: RwLock::new(HashMap::new()),
            availability_service: AvailabilityService::new(config),
            doctor_service: DoctorService::new(),
            lifecycle_service: AppointmentLifecycleService::new(),
            phone_regex: Regex::new(PHONE_PATTERN).expect("phone pattern is a valid regex"),
        }
    }

    pub async fn book(
        &self,
        session: &Session,
        request: BookAppointmentRequest,
        masks: &MaskRegistry,
    ) -> Result<Appointment, AppointmentError> {
        self.book_at(session, request, masks, Local::now().naive_local()).await
    }

    /// Book a slot as seen at `now`.
    #[instrument(skip(self, session, request, masks), fields(doctor_id = %request.doctor_id, date = %request.date, slot_id = request.slot_id))]
    pub async fn book_at(
        &self,
        session: &Session,
        request: BookAppointmentRequest,
        masks: &MaskRegistry,
        now: NaiveDateTime,
    ) -> Result<Appointment, AppointmentError> {
        self.validate_request(&request)?;

        let doctor = self
            .doctor_service
            .get_doctor(&request.doctor_id)
            .map_err(|_| AppointmentError::DoctorNotFound(request.doctor_id.clone()))?;

        if request.date < now.date() {
            return Err(AppointmentError::PastDate(request.date));
        }

        let mask = masks.for_doctor(doctor.id);
        let slots = self
            .availability_service
            .generate_slots_at(doctor.working_hours, request.date, &mask, now);

        let slot = slots
            .into_iter()
            .find(|slot| slot.id == request.slot_id)
            .ok_or(AppointmentError::SlotNotFound {
                slot_id: request.slot_id,
                date: request.date,
            })?;

        if !slot.available {
            return Err(AppointmentError::SlotNotAvailable {
                slot_id: slot.id,
                date: request.date,
            });
        }

        // Check and insert under one write lock so a slot is never booked twice
        let mut appointments = self.appointments.write().await;

        let taken = appointments.values().flatten().any(|existing| {
            existing.doctor_id == doctor.id
                && existing.date == request.date
                && existing.slot_id == slot.id
                && existing.occupies_slot()
        });
        if taken {
            return Err(AppointmentError::SlotAlreadyBooked {
                slot_id: slot.id,
                date: request.date,
            });
        }

        let timestamp = Utc::now();
        let appointment = Appointment {
            id: Uuid::new_v4(),
            doctor_id: doctor.id.to_string(),
            doctor_name: doctor.name.to_string(),
            specialty: doctor.specialty,
            date: request.date,
            slot_id: slot.id,
            time: slot.time,
            patient_name: request.patient_name.trim().to_string(),
            patient_phone: request.patient_phone.trim().to_string(),
            patient_email: session.email.clone(),
            reason: request
                .reason
                .map(|reason| reason.trim().to_string())
                .filter(|reason| !reason.is_empty()),
            status: AppointmentStatus::Upcoming,
            created_at: timestamp,
            updated_at: timestamp,
        };

        appointments
            .entry(session.owner_key().to_string())
            .or_default()
            .push(appointment.clone());

        info!("Appointment {} booked with {} at {}", appointment.id, doctor.name, appointment.time);
        Ok(appointment)
    }

    /// The session's appointments, latest date first, then by slot.
    pub async fn list(&self, session: &Session) -> Vec<Appointment> {
        let appointments = self.appointments.read().await;

        let mut owned = appointments
            .get(session.owner_key())
            .cloned()
            .unwrap_or_default();

        owned.sort_by(|a, b| b.date.cmp(&a.date).then(a.slot_id.cmp(&b.slot_id)));
        owned
    }

    pub async fn get(&self, session: &Session, id: Uuid) -> Result<Appointment, AppointmentError> {
        let appointments = self.appointments.read().await;

        appointments
            .get(session.owner_key())
            .and_then(|owned| owned.iter().find(|appointment| appointment.id == id))
            .cloned()
            .ok_or(AppointmentError::NotFound(id))
    }

    pub async fn update_status(
        &self,
        session: &Session,
        id: Uuid,
        new_status: AppointmentStatus,
    ) -> Result<Appointment, AppointmentError> {
        let mut appointments = self.appointments.write().await;

        let appointment = appointments
            .get_mut(session.owner_key())
            .and_then(|owned| owned.iter_mut().find(|appointment| appointment.id == id))
            .ok_or(AppointmentError::NotFound(id))?;

        self.lifecycle_service
            .validate_status_transition(appointment.status, new_status)?;

        appointment.status = new_status;
        appointment.updated_at = Utc::now();

        debug!("Appointment {} is now {}", id, new_status);
        Ok(appointment.clone())
    }

    fn validate_request(&self, request: &BookAppointmentRequest) -> Result<(), AppointmentError> {
        if request.patient_name.trim().is_empty() {
            return Err(AppointmentError::ValidationError(
                "Patient name is required".to_string(),
            ));
        }

        if !self.phone_regex.is_match(request.patient_phone.trim()) {
            return Err(AppointmentError::ValidationError(format!(
                "Invalid phone number: {}",
                request.patient_phone
            )));
        }

        Ok(())
    }
}

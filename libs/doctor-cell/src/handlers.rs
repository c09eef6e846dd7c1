use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Local;
use serde_json::{json, Value};

use shared_models::error::AppError;
use shared_models::specialty::Specialty;

use crate::models::{
    DayKey, DoctorError, DoctorSearchQuery, DoctorState, HospitalSearchQuery, SlotsQuery,
    SlotsResponse,
};
use crate::services::{availability::AvailabilityService, doctor::DoctorService};

#[axum::debug_handler(state = DoctorState)]
pub async fn list_doctors(
    Query(query): Query<DoctorSearchQuery>,
) -> Result<Json<Value>, AppError> {
    let doctor_service = DoctorService::new();

    let specialty = query
        .specialty
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| {
            raw.parse::<Specialty>()
                .map_err(|_| DoctorError::UnknownSpecialty(raw.to_string()))
        })
        .transpose()?;

    let doctors = doctor_service.list_doctors(specialty);

    Ok(Json(json!({
        "doctors": doctors,
        "total": doctors.len()
    })))
}

#[axum::debug_handler(state = DoctorState)]
pub async fn get_doctor(Path(doctor_id): Path<String>) -> Result<Json<Value>, AppError> {
    let doctor_service = DoctorService::new();

    let doctor = doctor_service.get_doctor(&doctor_id)?;
    let hospital = doctor_service.get_hospital(doctor.hospital_id).ok();

    Ok(Json(json!({
        "doctor": doctor,
        "hospital": hospital
    })))
}

#[axum::debug_handler(state = DoctorState)]
pub async fn get_available_slots(
    State(state): State<DoctorState>,
    Path(doctor_id): Path<String>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<SlotsResponse>, AppError> {
    let doctor = DoctorService::new().get_doctor(&doctor_id)?;

    if query.date < Local::now().date_naive() {
        return Err(DoctorError::PastDate(query.date).into());
    }

    let availability_service = AvailabilityService::new(&state.config);
    let mask = state.masks.for_doctor(doctor.id);
    let slots = availability_service.generate_slots(doctor.working_hours, query.date, &mask);

    Ok(Json(SlotsResponse {
        doctor_id: doctor.id.to_string(),
        date: query.date,
        day_key: DayKey::from_date(query.date),
        working_hours: doctor.working_hours.to_string(),
        slots,
    }))
}

#[axum::debug_handler(state = DoctorState)]
pub async fn list_hospitals(Query(query): Query<HospitalSearchQuery>) -> Json<Value> {
    let hospitals = DoctorService::new().list_hospitals(query.city.as_deref());

    Json(json!({
        "hospitals": hospitals,
        "total": hospitals.len()
    }))
}

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;
use shared_models::session::Session;

use crate::models::{Appointment, AppointmentState, BookAppointmentRequest, UpdateStatusRequest};

#[axum::debug_handler(state = AppointmentState)]
pub async fn book_appointment(
    State(state): State<AppointmentState>,
    Extension(session): Extension<Session>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    let appointment = state
        .bookings
        .book(&session, request, &state.masks)
        .await?;

    Ok((StatusCode::CREATED, Json(appointment)))
}

#[axum::debug_handler(state = AppointmentState)]
pub async fn list_appointments(
    State(state): State<AppointmentState>,
    Extension(session): Extension<Session>,
) -> Json<Value> {
    let appointments = state.bookings.list(&session).await;

    Json(json!({
        "appointments": appointments,
        "total": appointments.len()
    }))
}

#[axum::debug_handler(state = AppointmentState)]
pub async fn get_appointment(
    State(state): State<AppointmentState>,
    Extension(session): Extension<Session>,
    Path(appointment_id): Path<Uuid>,
) -> Result<Json<Appointment>, AppError> {
    let appointment = state.bookings.get(&session, appointment_id).await?;
    Ok(Json(appointment))
}

#[axum::debug_handler(state = AppointmentState)]
pub async fn update_appointment_status(
    State(state): State<AppointmentState>,
    Extension(session): Extension<Session>,
    Path(appointment_id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<Appointment>, AppError> {
    let appointment = state
        .bookings
        .update_status(&session, appointment_id, request.status)
        .await?;

    Ok(Json(appointment))
}

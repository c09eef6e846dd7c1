use axum::{
    Router,
    routing::get,
};

use crate::handlers;
use crate::models::DoctorState;

pub fn doctor_routes(state: DoctorState) -> Router {
    Router::new()
        .route("/", get(handlers::list_doctors))
        .route("/hospitals", get(handlers::list_hospitals))
        .route("/{doctor_id}", get(handlers::get_doctor))
        .route("/{doctor_id}/slots", get(handlers::get_available_slots))
        .with_state(state)
}

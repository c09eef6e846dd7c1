use axum::{
    Router,
    middleware,
    routing::{get, patch},
};

use shared_utils::extractor::session_middleware;

use crate::handlers;
use crate::models::AppointmentState;

pub fn appointment_routes(state: AppointmentState) -> Router {
    // Every appointment route acts on behalf of the caller's session
    Router::new()
        .route("/", get(handlers::list_appointments).post(handlers::book_appointment))
        .route("/{appointment_id}", get(handlers::get_appointment))
        .route("/{appointment_id}/status", patch(handlers::update_appointment_status))
        .layer(middleware::from_fn(session_middleware))
        .with_state(state)
}

use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::models::AppointmentState;
use appointment_cell::router::appointment_routes;
use doctor_cell::models::DoctorState;
use doctor_cell::router::doctor_routes;
use doctor_cell::services::MaskRegistry;
use shared_config::AppConfig;
use symptom_cell::router::symptom_routes;

pub fn create_router(config: Arc<AppConfig>) -> Router {
    // Slot listings and bookings must agree on which slots are open
    let masks = Arc::new(MaskRegistry::new(&config));

    Router::new()
        .route("/", get(|| async { "Heal Smart API is running!" }))
        .nest("/symptoms", symptom_routes(config.clone()))
        .nest("/doctors", doctor_routes(DoctorState::with_masks(config.clone(), masks.clone())))
        .nest("/appointments", appointment_routes(AppointmentState::new(&config, masks)))
}

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use shared_config::AppConfig;

use crate::handlers;

pub fn symptom_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/vocabulary", get(handlers::get_vocabulary))
        .route("/analyze", post(handlers::analyze_symptoms))
        .route("/diseases/{name}", get(handlers::get_disease))
        .route("/specialty/{disease}", get(handlers::get_specialty))
        .with_state(state)
}

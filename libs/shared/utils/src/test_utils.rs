use std::sync::Arc;

use chrono::{Duration, Local, NaiveDate};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::session::Session;

pub struct TestConfig {
    pub slot_interval_minutes: u32,
    pub match_threshold_percent: u8,
    pub min_selected_symptoms: usize,
    pub slot_availability_ratio: f64,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            slot_interval_minutes: 30,
            match_threshold_percent: 40,
            min_selected_symptoms: 2,
            slot_availability_ratio: 0.7,
        }
    }
}

impl TestConfig {
    /// Every slot in the mask is open, so only the past-time rule closes slots.
    pub fn always_available() -> Self {
        Self {
            slot_availability_ratio: 1.0,
            ..Self::default()
        }
    }

    pub fn never_available() -> Self {
        Self {
            slot_availability_ratio: 0.0,
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            slot_interval_minutes: self.slot_interval_minutes,
            match_threshold_percent: self.match_threshold_percent,
            min_selected_symptoms: self.min_selected_symptoms,
            slot_availability_ratio: self.slot_availability_ratio,
            ..AppConfig::default()
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub struct TestSession;

impl TestSession {
    pub fn random() -> Session {
        Session::new(Uuid::new_v4().to_string())
    }

    pub fn with_email(email: &str) -> Session {
        Self::random().with_email(email)
    }
}

pub struct TestDates;

impl TestDates {
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    pub fn tomorrow() -> NaiveDate {
        Self::today() + Duration::days(1)
    }

    pub fn yesterday() -> NaiveDate {
        Self::today() - Duration::days(1)
    }
}

use std::env;
use std::str::FromStr;
use tracing::warn;

const MINUTES_PER_DAY: u32 = 24 * 60;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: u16,
    pub slot_interval_minutes: u32,
    pub match_threshold_percent: u8,
    pub min_selected_symptoms: usize,
    pub slot_availability_ratio: f64,
    pub cors_allowed_origin: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_port: 5000,
            slot_interval_minutes: 30,
            match_threshold_percent: 40,
            min_selected_symptoms: 2,
            slot_availability_ratio: 0.7,
            cors_allowed_origin: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let mut config = Self {
            server_port: env_or("PORT", defaults.server_port),
            slot_interval_minutes: env_or("SLOT_INTERVAL_MINUTES", defaults.slot_interval_minutes),
            match_threshold_percent: env_or("MATCH_THRESHOLD_PERCENT", defaults.match_threshold_percent),
            min_selected_symptoms: env_or("MIN_SELECTED_SYMPTOMS", defaults.min_selected_symptoms),
            slot_availability_ratio: env_or("SLOT_AVAILABILITY_RATIO", defaults.slot_availability_ratio),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN").ok().filter(|v| !v.is_empty()),
        };

        if !config.has_valid_slot_interval() {
            warn!(
                "SLOT_INTERVAL_MINUTES={} does not divide a day evenly, using {}",
                config.slot_interval_minutes, defaults.slot_interval_minutes
            );
            config.slot_interval_minutes = defaults.slot_interval_minutes;
        }

        if config.match_threshold_percent > 100 {
            warn!(
                "MATCH_THRESHOLD_PERCENT={} is above 100, using {}",
                config.match_threshold_percent, defaults.match_threshold_percent
            );
            config.match_threshold_percent = defaults.match_threshold_percent;
        }

        if !(0.0..=1.0).contains(&config.slot_availability_ratio) {
            warn!(
                "SLOT_AVAILABILITY_RATIO={} is outside [0, 1], using {}",
                config.slot_availability_ratio, defaults.slot_availability_ratio
            );
            config.slot_availability_ratio = defaults.slot_availability_ratio;
        }

        config
    }

    pub fn is_valid(&self) -> bool {
        self.has_valid_slot_interval()
            && self.match_threshold_percent <= 100
            && (0.0..=1.0).contains(&self.slot_availability_ratio)
    }

    /// Number of slot positions in a day, i.e. the availability mask length.
    pub fn slots_per_day(&self) -> usize {
        (MINUTES_PER_DAY / self.slot_interval_minutes) as usize
    }

    fn has_valid_slot_interval(&self) -> bool {
        self.slot_interval_minutes > 0 && MINUTES_PER_DAY % self.slot_interval_minutes == 0
    }
}

fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value {:?}, using default {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}

// libs/doctor-cell/src/services/mask.rs
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use shared_config::AppConfig;

use crate::models::DayKey;

/// Per-day availability pattern, generated once per day key and then frozen.
///
/// The pattern for a key is computed under the write lock with
/// `entry().or_insert_with`, so concurrent first lookups for the same day
/// still observe a single pattern.
pub struct AvailabilityMaskCache {
    patterns: RwLock<HashMap<DayKey, Arc<[bool]>>>,
    rng: Mutex<StdRng>,
    slots_per_day: usize,
    availability_ratio: f64,
}

impl AvailabilityMaskCache {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Deterministic cache, mostly for tests.
    pub fn with_seed(config: &AppConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &AppConfig, rng: StdRng) -> Self {
        let ratio = config.slot_availability_ratio;
        Self {
            patterns: RwLock::new(HashMap::new()),
            rng: Mutex::new(rng),
            slots_per_day: config.slots_per_day(),
            availability_ratio: if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) },
        }
    }

    /// Returns the pattern for `day`, generating it on first access.
    pub fn pattern(&self, day: &DayKey) -> Arc<[bool]> {
        if let Some(pattern) = self
            .patterns
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(day)
        {
            return Arc::clone(pattern);
        }

        let mut patterns = self.patterns.write().unwrap_or_else(PoisonError::into_inner);
        let pattern = patterns.entry(day.clone()).or_insert_with(|| {
            debug!("Generating availability pattern for {}", day);
            self.generate()
        });
        Arc::clone(pattern)
    }

    fn generate(&self) -> Arc<[bool]> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        (0..self.slots_per_day)
            .map(|_| rng.gen_bool(self.availability_ratio))
            .collect()
    }
}

/// One mask cache per doctor view, created lazily and kept for the process lifetime.
pub struct MaskRegistry {
    caches: RwLock<HashMap<String, Arc<AvailabilityMaskCache>>>,
    config: AppConfig,
    seed: Option<u64>,
}

impl MaskRegistry {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            caches: RwLock::new(HashMap::new()),
            config: config.clone(),
            seed: None,
        }
    }

    pub fn with_seed(config: &AppConfig, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::new(config)
        }
    }

    pub fn for_doctor(&self, doctor_id: &str) -> Arc<AvailabilityMaskCache> {
        if let Some(cache) = self
            .caches
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(doctor_id)
        {
            return Arc::clone(cache);
        }

        let mut caches = self.caches.write().unwrap_or_else(PoisonError::into_inner);
        let cache = caches.entry(doctor_id.to_string()).or_insert_with(|| {
            let cache = match self.seed {
                Some(seed) => AvailabilityMaskCache::with_seed(&self.config, seed ^ fnv1a(doctor_id)),
                None => AvailabilityMaskCache::new(&self.config),
            };
            Arc::new(cache)
        });
        Arc::clone(cache)
    }
}

fn fnv1a(input: &str) -> u64 {
    input.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
    })
}

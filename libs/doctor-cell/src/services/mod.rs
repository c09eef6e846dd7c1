pub mod doctor;
pub mod availability;
pub mod mask;

pub use doctor::DoctorService;
pub use availability::AvailabilityService;
pub use mask::{AvailabilityMaskCache, MaskRegistry};

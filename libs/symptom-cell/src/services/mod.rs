pub mod analysis;
pub mod knowledge;
pub mod specialty;

pub use analysis::SymptomAnalysisService;
pub use specialty::{specialty_for, SpecialtyRoutingService, FALLBACK_SPECIALTY};

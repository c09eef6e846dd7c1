pub mod error;
pub mod session;
pub mod specialty;

pub use error::AppError;
pub use session::Session;
pub use specialty::Specialty;

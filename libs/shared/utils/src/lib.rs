pub mod extractor;
pub mod test_utils;

pub use extractor::{session_from_headers, session_middleware};

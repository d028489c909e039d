// Model exports
pub mod requests;
pub mod responses;

pub use requests::{ResultsQuery, NO_RESULT};
pub use responses::HealthResponse;

// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ExperienceLevel, Profile, ScoreResult, ScoreSource};
pub use requests::{CompatibilityRequest, ProfileInput};
pub use responses::{CompatibilityResponse, ErrorResponse, HealthResponse};

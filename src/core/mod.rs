// Core scoring engine exports
pub mod ai;
pub mod orchestrator;
pub mod parser;
pub mod prompt;
pub mod scoring;
pub mod validate;

pub use ai::score_with_ai;
pub use orchestrator::{resolve, ScoringOrchestrator};
pub use parser::{parse_ai_response, DEFAULT_REASONING, DEFAULT_SCORE};
pub use prompt::build_prompt;
pub use scoring::{score_compatibility, ScoringError};
pub use validate::{validate_profile, ValidationError};

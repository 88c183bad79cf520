//! JamMatch AI Service - compatibility scoring for the JamMatch musician matching app
//!
//! This library provides the compatibility scoring engine used by the JamMatch
//! app: a deterministic algorithmic scorer, an AI-backed scorer built on an
//! external text-completion capability, and an orchestrator that prefers the
//! AI path and transparently falls back to the algorithmic one.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    build_prompt, parse_ai_response, score_compatibility, validate_profile, ScoringOrchestrator,
};
pub use crate::models::{Profile, ProfileInput, ScoreResult, ScoreSource};
pub use crate::services::{InferenceClient, InferenceError, MistralClient};

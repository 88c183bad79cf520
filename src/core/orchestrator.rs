use crate::core::{ai, scoring};
use crate::core::scoring::ScoringError;
use crate::models::{Profile, ScoreResult};
use crate::services::inference::{InferenceClient, InferenceError};
use std::sync::Arc;

/// Entry point of the scoring engine
///
/// Prefers the AI scorer when an inference client is configured and falls
/// back to the algorithmic scorer on any inference failure. The client
/// handle is read-only after construction, so the orchestrator is safe to
/// share across concurrent requests.
#[derive(Clone)]
pub struct ScoringOrchestrator {
    inference: Option<Arc<dyn InferenceClient>>,
}

impl ScoringOrchestrator {
    pub fn new(inference: Option<Arc<dyn InferenceClient>>) -> Self {
        Self { inference }
    }

    /// Orchestrator without an inference backend; every request falls back
    pub fn algorithmic_only() -> Self {
        Self { inference: None }
    }

    pub fn inference_available(&self) -> bool {
        self.inference.is_some()
    }

    /// Score two validated profiles, always producing a result unless the
    /// fallback itself rejects the input (unrecognized experience level)
    pub async fn score(&self, a: &Profile, b: &Profile) -> Result<ScoreResult, ScoringError> {
        let attempt = match &self.inference {
            Some(client) => ai::score_with_ai(client.as_ref(), a, b).await,
            None => Err(ScoringError::Inference(InferenceError::Unavailable)),
        };

        resolve(attempt, || scoring::score_compatibility(a, b))
    }
}

/// Two-branch fallback decision
///
/// A successful attempt passes through untouched; any failure is logged and
/// replaced by the fallback producer's result, marked as a fallback. Kept
/// separate from the orchestrator so both branches are unit-testable without
/// a model.
pub fn resolve<F>(
    attempt: Result<ScoreResult, ScoringError>,
    fallback: F,
) -> Result<ScoreResult, ScoringError>
where
    F: FnOnce() -> Result<ScoreResult, ScoringError>,
{
    match attempt {
        Ok(result) => Ok(result),
        Err(err) => {
            tracing::warn!("AI scoring unavailable, using algorithmic fallback: {}", err);
            Ok(fallback()?.into_fallback())
        }
    }
}

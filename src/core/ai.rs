use crate::core::parser::parse_ai_response;
use crate::core::prompt::build_prompt;
use crate::core::scoring::ScoringError;
use crate::models::{Profile, ScoreResult, ScoreSource};
use crate::services::inference::InferenceClient;

/// Score two profiles through the text-completion capability
///
/// Inference failures propagate so the orchestrator can tell "the model could
/// not be reached" (fall back) from "the model said something malformed"
/// (parsed with defaults, still an AI result).
pub async fn score_with_ai(
    inference: &dyn InferenceClient,
    a: &Profile,
    b: &Profile,
) -> Result<ScoreResult, ScoringError> {
    let prompt = build_prompt(a, b);
    let generated = inference.complete(&prompt).await?;

    // Some backends echo the prompt in front of the completion
    let reply = generated.strip_prefix(&prompt).unwrap_or(&generated);
    let (score, reasoning) = parse_ai_response(reply);

    tracing::debug!("AI scorer produced {} for {} and {}", score, a.name, b.name);

    Ok(ScoreResult {
        score,
        reasoning,
        source: ScoreSource::Ai,
        used_fallback: false,
    })
}

use crate::core::{validate_profile, ScoringOrchestrator, ValidationError};
use crate::models::{CompatibilityRequest, CompatibilityResponse, ErrorResponse, HealthResponse};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "JamMatch AI Service";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<ScoringOrchestrator>,
}

/// Configure all compatibility-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/compatibility", web::post().to(calculate_compatibility));
}

/// Health check endpoint, independent of the scoring core
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        service: SERVICE_NAME.to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Compatibility scoring endpoint
///
/// POST /compatibility
///
/// Request body:
/// ```json
/// {
///   "user1": { "name": "...", "genres": [...], "instruments": [...],
///              "experience": "...", "location": "...", "bio": "..." },
///   "user2": { ... }
/// }
/// ```
async fn calculate_compatibility(
    state: web::Data<AppState>,
    req: web::Json<CompatibilityRequest>,
) -> impl Responder {
    let (user1, user2) = match (&req.user1, &req.user2) {
        (Some(user1), Some(user2)) => (user1, user2),
        _ => {
            tracing::info!("Compatibility request missing user1 or user2");
            return HttpResponse::BadRequest()
                .json(ErrorResponse::new(ValidationError::MissingProfile.to_string()));
        }
    };

    // The route always demands the full 5-field profile so the algorithmic
    // fallback can run whenever inference fails mid-request
    let profile1 = match validate_profile(user1, true) {
        Ok(profile) => profile,
        Err(err) => {
            tracing::info!("Validation failed for user1: {}", err);
            return HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()));
        }
    };
    let profile2 = match validate_profile(user2, true) {
        Ok(profile) => profile,
        Err(err) => {
            tracing::info!("Validation failed for user2: {}", err);
            return HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()));
        }
    };

    tracing::info!(
        "Scoring compatibility for {} and {} (inference available: {})",
        profile1.name,
        profile2.name,
        state.orchestrator.inference_available()
    );

    match state.orchestrator.score(&profile1, &profile2).await {
        Ok(result) => HttpResponse::Ok().json(CompatibilityResponse {
            compatibility_score: result.score,
            reasoning: result.reasoning,
            model_used: result.source.model_label().to_string(),
            fallback_used: result.used_fallback,
            timestamp: chrono::Utc::now(),
        }),
        Err(err) => {
            // Value-level failures (e.g. unrecognized experience level) are
            // logged with context but never leaked to the caller
            tracing::error!(
                "Error calculating compatibility for {} and {}: {}",
                profile1.name,
                profile2.name,
                err
            );
            HttpResponse::InternalServerError().json(ErrorResponse::new("Internal server error"))
        }
    }
}

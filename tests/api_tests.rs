// HTTP contract tests for the compatibility endpoints

use actix_web::{test, web, App};
use async_trait::async_trait;
use jam_match::core::ScoringOrchestrator;
use jam_match::routes::{configure_routes, AppState};
use jam_match::services::{InferenceClient, InferenceError};
use serde_json::{json, Value};
use std::sync::Arc;

struct FixedReplyInference {
    reply: String,
}

#[async_trait]
impl InferenceClient for FixedReplyInference {
    async fn complete(&self, _prompt: &str) -> Result<String, InferenceError> {
        Ok(self.reply.clone())
    }
}

fn algorithmic_state() -> AppState {
    AppState {
        orchestrator: Arc::new(ScoringOrchestrator::algorithmic_only()),
    }
}

fn ai_state(reply: &str) -> AppState {
    AppState {
        orchestrator: Arc::new(ScoringOrchestrator::new(Some(Arc::new(
            FixedReplyInference {
                reply: reply.to_string(),
            },
        )))),
    }
}

fn alice() -> Value {
    json!({
        "name": "Alice",
        "genres": ["Rock", "Pop"],
        "instruments": ["Guitar", "Vocals"],
        "experience": "intermediate",
        "location": "New York",
        "bio": "Love playing rock music"
    })
}

fn bob() -> Value {
    json!({
        "name": "Bob",
        "genres": ["Rock", "Jazz"],
        "instruments": ["Drums"],
        "experience": "intermediate",
        "location": "New York",
        "bio": "Experienced drummer"
    })
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(algorithmic_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "OK");
    assert_eq!(body["service"], "JamMatch AI Service");
    assert!(body["timestamp"].is_string());
}

#[actix_web::test]
async fn test_compatibility_success_with_fallback() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(algorithmic_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/compatibility")
        .set_json(json!({"user1": alice(), "user2": bob()}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["compatibility_score"], 80);
    assert_eq!(body["model_used"], "algorithmic_fallback");
    assert_eq!(body["fallback_used"], true);
    assert!(body["reasoning"].as_str().unwrap().contains("Alice"));
    assert!(body["timestamp"].is_string());
}

#[actix_web::test]
async fn test_compatibility_success_with_ai() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(ai_state(
                "SCORE: 88\nREASONING: Excellent musical compatibility.",
            )))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/compatibility")
        .set_json(json!({"user1": alice(), "user2": bob()}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["compatibility_score"], 88);
    assert_eq!(body["model_used"], "mistral_ai");
    assert_eq!(body["fallback_used"], false);
}

#[actix_web::test]
async fn test_missing_user_profile_data() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(algorithmic_state()))
            .configure(configure_routes),
    )
    .await;

    for payload in [json!({}), json!({"user1": alice()})] {
        let req = test::TestRequest::post()
            .uri("/compatibility")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Missing user profile data");
    }
}

#[actix_web::test]
async fn test_missing_required_field() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(algorithmic_state()))
            .configure(configure_routes),
    )
    .await;

    let incomplete = json!({
        "name": "Test User",
        "genres": ["Rock"]
    });

    let req = test::TestRequest::post()
        .uri("/compatibility")
        .set_json(json!({"user1": incomplete, "user2": bob()}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Missing required field: instruments");
}

#[actix_web::test]
async fn test_validation_runs_before_scoring() {
    // Even with a working AI backend, a missing field fails first
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(ai_state("SCORE: 99\nREASONING: unused")))
            .configure(configure_routes),
    )
    .await;

    let mut incomplete = alice();
    incomplete.as_object_mut().unwrap().remove("instruments");

    let req = test::TestRequest::post()
        .uri("/compatibility")
        .set_json(json!({"user1": incomplete, "user2": bob()}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_invalid_experience_is_internal_error() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(algorithmic_state()))
            .configure(configure_routes),
    )
    .await;

    let mut invalid = alice();
    invalid["experience"] = json!("rockstar");

    let req = test::TestRequest::post()
        .uri("/compatibility")
        .set_json(json!({"user1": invalid, "user2": bob()}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 500);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Internal server error");
}

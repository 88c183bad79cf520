use actix_cors::Cors;
use actix_web::{error, middleware, web, App, HttpResponse, HttpServer};
use jam_match::config::Settings;
use jam_match::core::ScoringOrchestrator;
use jam_match::models::ErrorResponse;
use jam_match::routes::{self, AppState};
use jam_match::services::{InferenceClient, MistralClient};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Handle JSON payload errors with the service's error body shape
fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    let response =
        HttpResponse::BadRequest().json(ErrorResponse::new(format!("Invalid JSON: {}", err)));
    error::InternalError::from_response(err, response).into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting JamMatch AI Service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize the inference capability once at startup; the handle is
    // read-only afterwards and shared across requests
    let inference: Option<Arc<dyn InferenceClient>> =
        match (settings.inference.enabled, &settings.inference.endpoint) {
            (true, Some(endpoint)) => {
                match MistralClient::new(
                    endpoint.clone(),
                    settings.inference.api_key.clone(),
                    settings.inference.timeout_secs,
                    settings.inference.max_new_tokens,
                    settings.inference.temperature,
                ) {
                    Ok(client) => {
                        info!("Inference backend configured at {}", endpoint);
                        Some(Arc::new(client))
                    }
                    Err(e) => {
                        warn!(
                            "Failed to initialize inference client ({}), \
                             running with algorithmic scoring only",
                            e
                        );
                        None
                    }
                }
            }
            _ => {
                warn!("No inference backend configured, all requests will use the algorithmic scorer");
                None
            }
        };

    let orchestrator = Arc::new(ScoringOrchestrator::new(inference));

    // Build application state
    let app_state = AppState { orchestrator };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}

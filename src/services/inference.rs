use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when invoking the inference backend
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("no inference backend configured")]
    Unavailable,

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("backend returned error: {0}")]
    BackendError(String),

    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

/// Single-shot text completion capability consumed by the AI scorer
///
/// Implementations own their timeout policy; a timed-out call surfaces as a
/// regular `InferenceError` and triggers the algorithmic fallback.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, InferenceError>;
}

/// HTTP client for a Mistral text-generation endpoint
///
/// Talks to a TGI-style server: POST {base_url}/generate with the prompt and
/// generation parameters. Both `{"generated_text": ...}` and
/// `[{"generated_text": ...}]` response shapes are accepted, covering
/// servers that echo the full text or return only the continuation.
pub struct MistralClient {
    base_url: String,
    api_key: Option<String>,
    client: Client,
    max_new_tokens: u32,
    temperature: f64,
}

impl MistralClient {
    pub fn new(
        base_url: String,
        api_key: Option<String>,
        timeout_secs: u64,
        max_new_tokens: u32,
        temperature: f64,
    ) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url,
            api_key,
            client,
            max_new_tokens,
            temperature,
        })
    }

    fn generate_url(&self) -> String {
        format!("{}/generate", self.base_url.trim_end_matches('/'))
    }

    fn extract_generated_text(json: &Value) -> Result<String, InferenceError> {
        let entry = match json {
            Value::Array(entries) => entries
                .first()
                .ok_or_else(|| InferenceError::InvalidResponse("empty response array".into()))?,
            other => other,
        };

        entry
            .get("generated_text")
            .and_then(|t| t.as_str())
            .map(|t| t.to_string())
            .ok_or_else(|| InferenceError::InvalidResponse("missing generated_text field".into()))
    }
}

#[async_trait]
impl InferenceClient for MistralClient {
    async fn complete(&self, prompt: &str) -> Result<String, InferenceError> {
        let url = self.generate_url();

        tracing::debug!("Requesting completion from {}", url);

        let payload = json!({
            "inputs": prompt,
            "parameters": {
                "max_new_tokens": self.max_new_tokens,
                "temperature": self.temperature,
            },
        });

        let mut request = self.client.post(&url).json(&payload);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(InferenceError::BackendError(format!(
                "completion request failed: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;
        Self::extract_generated_text(&json)
    }
}

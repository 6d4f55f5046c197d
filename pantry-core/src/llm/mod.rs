//! Generation provider abstraction.
//!
//! The relay only needs one capability from a provider: given a prompt and a
//! JSON schema, return text that should parse as an object matching the
//! schema, or fail. Gemini is the production implementation; the fake one
//! backs tests and offline development.

mod fake;
mod gemini;

pub use fake::{FakeProvider, SAMPLE_RECIPE_JSON};
pub use gemini::{GeminiProvider, DEFAULT_BASE_URL, DEFAULT_MODEL};

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Error type for provider calls.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Trait for generation providers.
///
/// Implementations must be thread-safe; one instance is shared by every
/// request the relay handles.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    /// Send `prompt` and ask for output conforming to `schema` (a JSON Schema
    /// object). Returns the raw text of the model's answer.
    async fn generate(&self, prompt: &str, schema: &Value) -> Result<String, LlmError>;

    /// Provider name (e.g., "gemini", "fake").
    fn provider_name(&self) -> &'static str;

    /// Model name (e.g., "gemini-2.5-flash").
    fn model_name(&self) -> &str;
}

/// Build a provider from environment variables:
/// - `RECIPE_PROVIDER`: "gemini" (default) | "fake"
/// - `GEMINI_API_KEY`: API key for Gemini (`API_KEY` is accepted as a fallback)
/// - `RECIPE_MODEL`: model name, default [`DEFAULT_MODEL`]
/// - `GEMINI_BASE_URL`: API base URL, default [`DEFAULT_BASE_URL`]
pub fn create_provider_from_env() -> Result<Box<dyn LlmProvider>, LlmError> {
    let provider = std::env::var("RECIPE_PROVIDER").unwrap_or_else(|_| "gemini".to_string());

    match provider.as_str() {
        "fake" => Ok(Box::new(FakeProvider::with_sample_recipe())),
        "gemini" => {
            let api_key = std::env::var("GEMINI_API_KEY")
                .or_else(|_| std::env::var("API_KEY"))
                .map_err(|_| LlmError::NotConfigured("GEMINI_API_KEY not set".to_string()))?;
            let model =
                std::env::var("RECIPE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
            let mut gemini = GeminiProvider::new(api_key, model);
            if let Ok(base_url) = std::env::var("GEMINI_BASE_URL") {
                gemini = gemini.with_base_url(base_url);
            }
            Ok(Box::new(gemini))
        }
        other => Err(LlmError::NotConfigured(format!(
            "Unknown provider: {}",
            other
        ))),
    }
}

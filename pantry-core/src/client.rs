//! HTTP client for the recipe relay.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::GenerateError;
use crate::ingredients::IngredientTag;
use crate::recipe::validate_response;
use crate::types::{GenerationRequest, Language, PingResponse, Recipe};

/// Default relay address used when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

pub const GENERATE_RECIPE_PATH: &str = "/api/generate-recipe";
pub const PING_PATH: &str = "/api/ping";

/// Anything that can turn a generation request into a recipe.
#[async_trait]
pub trait RecipeService: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<Recipe, GenerateError>;
}

#[derive(Debug, Deserialize)]
struct RelayError {
    #[serde(default)]
    error: Option<String>,
}

/// Talks to the relay over HTTP.
///
/// One attempt per call: no retries and no timeout beyond what the
/// underlying `reqwest::Client` was built with.
#[derive(Debug, Clone)]
pub struct RecipeClient {
    base_url: String,
    http: reqwest::Client,
}

impl RecipeClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, reqwest::Client::new())
    }

    pub fn with_http_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Generate a recipe for the given ingredients.
    ///
    /// An empty ingredient list fails with [`GenerateError::Validation`]
    /// without touching the network.
    pub async fn generate_recipe(
        &self,
        ingredients: &[IngredientTag],
        language: Language,
    ) -> Result<Recipe, GenerateError> {
        let request = GenerationRequest::new(ingredients.to_vec(), language)?;
        self.generate(&request).await
    }

    pub async fn ping(&self) -> Result<String, GenerateError> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, PING_PATH))
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(GenerateError::Provider(format!("HTTP {}", response.status())));
        }

        let body: PingResponse = response
            .json()
            .await
            .map_err(|e| GenerateError::MalformedResponse(e.to_string()))?;
        Ok(body.message)
    }
}

#[async_trait]
impl RecipeService for RecipeClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<Recipe, GenerateError> {
        let url = format!("{}{}", self.base_url, GENERATE_RECIPE_PATH);

        tracing::debug!(
            url = %url,
            ingredients = request.ingredients().len(),
            language = %request.language(),
            "requesting recipe"
        );

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(transport_error)?;

        if !status.is_success() {
            let message = serde_json::from_slice::<RelayError>(&body)
                .ok()
                .and_then(|e| e.error)
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| "API request failed".to_string());
            tracing::debug!(status = %status, message = %message, "relay returned an error");
            return Err(GenerateError::Provider(message));
        }

        validate_response(&body)
    }
}

fn transport_error(e: reqwest::Error) -> GenerateError {
    GenerateError::Provider(e.to_string())
}

//! Fake generation provider for testing.
//!
//! Returns deterministic responses based on prompt matching, so tests and
//! local development run without network access or API costs.

use super::{LlmError, LlmProvider};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, RwLock};

/// A real, sourced recipe used as the fake's stock answer.
pub const SAMPLE_RECIPE_JSON: &str = r#"{
  "title": "Good Old-Fashioned Pancakes",
  "description": "Fluffy, tender pancakes made from scratch with pantry basics.",
  "ingredients": [
    "1 1/2 cups all-purpose flour",
    "3 1/2 teaspoons baking powder",
    "1 tablespoon white sugar",
    "1/4 teaspoon salt",
    "1 1/4 cups milk",
    "3 tablespoons butter, melted",
    "1 egg"
  ],
  "instructions": [
    "Sift flour, baking powder, sugar, and salt together in a large bowl.",
    "Make a well in the center and add milk, melted butter, and egg; mix until smooth.",
    "Heat a lightly oiled griddle or pan over medium-high heat.",
    "Pour or scoop the batter onto the griddle, using approximately 1/4 cup for each pancake.",
    "Cook until bubbles form and the edges are dry, then flip and cook until browned on the other side."
  ],
  "prepTime": "5 minutes",
  "cookTime": "15 minutes",
  "servings": "8 pancakes",
  "tip": "Let the batter rest for a few minutes before cooking for fluffier pancakes.",
  "sourceUrls": ["https://www.allrecipes.com/recipe/21014/good-old-fashioned-pancakes/"]
}"#;

/// A fake provider for testing.
///
/// Responses are matched by checking if the prompt contains a registered
/// substring. If no match is found, returns the default response or an error.
/// Every call is counted and the last prompt and schema are kept for
/// inspection.
#[derive(Debug, Default)]
pub struct FakeProvider {
    /// Map of prompt substring -> response
    responses: RwLock<HashMap<String, String>>,
    /// Default response if no match found
    default_response: Option<String>,
    /// When set, every call fails with this message
    failure: Option<String>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
    last_schema: Mutex<Option<Value>>,
}

impl FakeProvider {
    /// Create a new FakeProvider with no registered responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a FakeProvider that returns a specific response for prompts containing a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let provider = Self::new();
        provider.add_response(prompt_contains, response);
        provider
    }

    /// Create a FakeProvider that answers every prompt with [`SAMPLE_RECIPE_JSON`].
    pub fn with_sample_recipe() -> Self {
        Self::new().with_default_response(SAMPLE_RECIPE_JSON)
    }

    /// Create a FakeProvider whose calls always fail.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Add a response for prompts containing a specific substring.
    pub fn add_response(&self, prompt_contains: &str, response: &str) {
        self.responses
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(prompt_contains.to_lowercase(), response.to_string());
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Number of `generate` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn last_schema(&self) -> Option<Value> {
        self.last_schema
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl LlmProvider for FakeProvider {
    async fn generate(&self, prompt: &str, schema: &Value) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap_or_else(|e| e.into_inner()) = Some(prompt.to_string());
        *self.last_schema.lock().unwrap_or_else(|e| e.into_inner()) = Some(schema.clone());

        if let Some(message) = &self.failure {
            return Err(LlmError::RequestFailed(message.clone()));
        }

        // Find first matching pattern (case-insensitive)
        let prompt_lower = prompt.to_lowercase();
        let responses = self.responses.read().unwrap_or_else(|e| e.into_inner());
        if let Some(response) = responses
            .iter()
            .find(|(pattern, _)| prompt_lower.contains(pattern.as_str()))
            .map(|(_, response)| response)
        {
            return Ok(response.clone());
        }

        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(LlmError::RequestFailed(format!(
                "FakeProvider: No response configured for prompt (first 100 chars): {}",
                prompt.chars().take(100).collect::<String>()
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}

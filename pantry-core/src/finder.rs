//! One provider round trip: prompt + schema in, JSON object out.

use serde_json::{Map, Value};

use crate::llm::{LlmError, LlmProvider};
use crate::prompts::recipe::{recipe_schema, render_recipe_prompt, RECIPE_PROMPT_NAME};
use crate::types::GenerationRequest;

/// Ask `provider` for a recipe matching `request`.
///
/// Exactly one provider call is made; nothing is cached. The answer is
/// returned as the provider wrote it, as long as it parses as a JSON object.
/// Whether it is a displayable recipe is for the client to decide.
pub async fn find_recipe(
    provider: &dyn LlmProvider,
    request: &GenerationRequest,
) -> Result<Map<String, Value>, LlmError> {
    let prompt = render_recipe_prompt(request.ingredients(), request.language());
    let schema = recipe_schema();

    tracing::debug!(
        prompt_name = RECIPE_PROMPT_NAME,
        provider = provider.provider_name(),
        model = provider.model_name(),
        "calling generation provider"
    );

    let text = provider.generate(&prompt, &schema).await?;

    match serde_json::from_str::<Value>(text.trim()) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(_) => Err(LlmError::ParseError(
            "provider output is not a JSON object".to_string(),
        )),
        Err(e) => Err(LlmError::ParseError(format!(
            "provider output is not JSON: {}",
            e
        ))),
    }
}

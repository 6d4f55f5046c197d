use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use pantry_core::{find_recipe, ErrorResponse, GenerationRequest, IngredientSet, Language, Recipe};
use serde_json::Value;

use crate::AppState;

pub const INVALID_BODY: &str = "Request body must be valid JSON.";
pub const INGREDIENTS_REQUIRED: &str = "Ingredients are required.";
pub const UNSUPPORTED_LANGUAGE: &str = "Unsupported language.";
pub const GENERATION_FAILED: &str = "Failed to generate recipe from the API.";

/// Validate the inbound body.
///
/// `ingredients` must be a non-empty array of strings. Entries are
/// normalized the same way the client normalizes tags, so an array of blank
/// strings counts as empty. A missing `language` means English; any other
/// value than "en" or "id" is rejected.
fn parse_request(body: &[u8]) -> Result<GenerationRequest, &'static str> {
    let value: Value = serde_json::from_slice(body).map_err(|_| INVALID_BODY)?;

    let raw_ingredients = value
        .get("ingredients")
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
        .ok_or(INGREDIENTS_REQUIRED)?;

    let mut ingredients = IngredientSet::new();
    for item in raw_ingredients {
        ingredients.add(item.as_str().ok_or(INGREDIENTS_REQUIRED)?);
    }

    let language = match value.get("language") {
        None | Some(Value::Null) => Language::default(),
        Some(raw) => raw
            .as_str()
            .and_then(Language::from_code)
            .ok_or(UNSUPPORTED_LANGUAGE)?,
    };

    GenerationRequest::new(ingredients.as_slice().to_vec(), language)
        .map_err(|_| INGREDIENTS_REQUIRED)
}

fn error_response(status: StatusCode, message: &str) -> axum::response::Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

/// Find a real recipe for the given ingredients
///
/// Calls the generation provider once and relays its structured answer
/// unchanged. When the provider cannot find a sourced recipe the answer
/// carries `"error": "NO_RECIPE_FOUND"` instead of recipe data.
#[utoipa::path(
    post,
    path = "/api/generate-recipe",
    tag = "recipes",
    request_body(
        content = GenerationRequest,
        example = json!({"ingredients": ["flour", "sugar", "eggs"], "language": "en"})
    ),
    responses(
        (status = 200, description = "Recipe found, or the NO_RECIPE_FOUND sentinel", body = Recipe),
        (status = 400, description = "Missing or invalid ingredients or language", body = ErrorResponse),
        (status = 500, description = "Provider call failed", body = ErrorResponse)
    )
)]
pub async fn generate_recipe(State(provider): State<AppState>, body: Bytes) -> impl IntoResponse {
    let request = match parse_request(&body) {
        Ok(r) => r,
        Err(message) => {
            tracing::debug!(reason = message, "rejecting recipe request");
            return error_response(StatusCode::BAD_REQUEST, message);
        }
    };

    tracing::info!(
        ingredients = request.ingredients().len(),
        language = %request.language(),
        provider = provider.provider_name(),
        model = provider.model_name(),
        "generating recipe"
    );

    match find_recipe(provider.as_ref(), &request).await {
        Ok(recipe) => (StatusCode::OK, Json(Value::Object(recipe))).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "provider call failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, GENERATION_FAILED)
        }
    }
}

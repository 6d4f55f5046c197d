//! Strict validation of relay responses into displayable recipes.
//!
//! A response either becomes a complete [`Recipe`] or a [`GenerateError`];
//! partially filled recipes never reach the caller.

use serde::Deserialize;
use serde_json::Value;

use crate::error::GenerateError;
use crate::types::{Recipe, NO_RECIPE_FOUND};

/// Loose mirror of [`Recipe`] where every field may be missing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecipe {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    ingredients: Option<Vec<String>>,
    #[serde(default)]
    instructions: Option<Vec<String>>,
    #[serde(default)]
    prep_time: Option<String>,
    #[serde(default)]
    cook_time: Option<String>,
    #[serde(default)]
    servings: Option<String>,
    #[serde(default)]
    tip: Option<String>,
    #[serde(default)]
    source_urls: Option<Vec<String>>,
    #[serde(default)]
    error: Option<String>,
}

/// Validate a raw response body.
pub fn validate_response(body: &[u8]) -> Result<Recipe, GenerateError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| GenerateError::MalformedResponse(format!("body is not JSON: {}", e)))?;
    validate_value(value)
}

/// Validate an already-parsed response.
///
/// The `NO_RECIPE_FOUND` sentinel is checked before anything else, so a
/// sentinel object with empty fields is reported as such rather than as
/// malformed.
pub fn validate_value(value: Value) -> Result<Recipe, GenerateError> {
    let Some(object) = value.as_object() else {
        return Err(GenerateError::MalformedResponse(
            "expected a JSON object".to_string(),
        ));
    };

    if object.get("error").and_then(Value::as_str) == Some(NO_RECIPE_FOUND) {
        return Err(GenerateError::NoRecipeFound);
    }

    let raw: RawRecipe = serde_json::from_value(value)
        .map_err(|e| GenerateError::MalformedResponse(e.to_string()))?;

    let title = raw
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| missing("title"))?;

    let ingredients = raw
        .ingredients
        .filter(|i| !i.is_empty())
        .ok_or_else(|| missing("ingredients"))?;

    let source_urls = raw
        .source_urls
        .filter(|s| !s.is_empty())
        .ok_or_else(|| missing("sourceUrls"))?;

    if let Some(bad) = source_urls.iter().find(|u| !is_web_url(u)) {
        return Err(GenerateError::MalformedResponse(format!(
            "source URL is not a web address: {}",
            bad
        )));
    }

    Ok(Recipe {
        title,
        description: raw.description.unwrap_or_default(),
        ingredients,
        instructions: raw.instructions.unwrap_or_default(),
        prep_time: raw.prep_time.unwrap_or_default(),
        cook_time: raw.cook_time.unwrap_or_default(),
        servings: raw.servings.unwrap_or_default(),
        // Absent and blank tips both mean "no tip".
        tip: raw.tip.filter(|t| !t.trim().is_empty()),
        source_urls,
        error: raw.error.filter(|e| !e.is_empty()),
    })
}

fn missing(field: &str) -> GenerateError {
    GenerateError::MalformedResponse(format!("missing or empty field: {}", field))
}

fn is_web_url(raw: &str) -> bool {
    url::Url::parse(raw.trim())
        .map(|u| matches!(u.scheme(), "http" | "https") && u.host_str().is_some())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn complete() -> Value {
        json!({
            "title": "Good Old-Fashioned Pancakes",
            "description": "Fluffy pancakes from scratch.",
            "ingredients": ["1 1/2 cups all-purpose flour", "1 egg"],
            "instructions": ["Mix.", "Cook on a hot griddle."],
            "prepTime": "5 minutes",
            "cookTime": "15 minutes",
            "servings": "8 pancakes",
            "tip": "Let the batter rest.",
            "sourceUrls": ["https://www.allrecipes.com/recipe/21014/good-old-fashioned-pancakes/"]
        })
    }

    #[test]
    fn test_complete_recipe_is_accepted() {
        let recipe = validate_value(complete()).unwrap();
        assert_eq!(recipe.title, "Good Old-Fashioned Pancakes");
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.instructions.len(), 2);
        assert_eq!(recipe.tip.as_deref(), Some("Let the batter rest."));
        assert!(recipe.error.is_none());
    }

    #[test]
    fn test_sentinel_yields_no_recipe_found() {
        let err = validate_value(json!({"error": "NO_RECIPE_FOUND"})).unwrap_err();
        assert_eq!(err, GenerateError::NoRecipeFound);
    }

    #[test]
    fn test_sentinel_takes_precedence_over_shape() {
        let mut value = complete();
        value["error"] = json!("NO_RECIPE_FOUND");
        assert_eq!(validate_value(value).unwrap_err(), GenerateError::NoRecipeFound);

        let empty = json!({
            "title": "", "description": "", "ingredients": [], "instructions": [],
            "prepTime": "", "cookTime": "", "servings": "", "error": "NO_RECIPE_FOUND"
        });
        assert_eq!(validate_value(empty).unwrap_err(), GenerateError::NoRecipeFound);
    }

    #[test]
    fn test_missing_source_urls_is_malformed() {
        let mut value = complete();
        value.as_object_mut().unwrap().remove("sourceUrls");
        let err = validate_value(value).unwrap_err();
        assert!(matches!(err, GenerateError::MalformedResponse(ref m) if m.contains("sourceUrls")));
    }

    #[test]
    fn test_empty_ingredients_is_malformed() {
        let mut value = complete();
        value["ingredients"] = json!([]);
        assert!(matches!(
            validate_value(value),
            Err(GenerateError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_blank_title_is_malformed() {
        let mut value = complete();
        value["title"] = json!("  ");
        assert!(matches!(
            validate_value(value),
            Err(GenerateError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_wrong_field_type_is_malformed() {
        let mut value = complete();
        value["ingredients"] = json!("flour, eggs");
        assert!(matches!(
            validate_value(value),
            Err(GenerateError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_non_web_source_url_is_malformed() {
        let mut value = complete();
        value["sourceUrls"] = json!(["not a url"]);
        assert!(matches!(
            validate_value(value),
            Err(GenerateError::MalformedResponse(_))
        ));

        let mut value = complete();
        value["sourceUrls"] = json!(["ftp://recipes.example.com/pancakes"]);
        assert!(matches!(
            validate_value(value),
            Err(GenerateError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_blank_tip_becomes_none() {
        let mut value = complete();
        value["tip"] = json!("");
        assert!(validate_value(value).unwrap().tip.is_none());

        let mut value = complete();
        value["tip"] = Value::Null;
        assert!(validate_value(value).unwrap().tip.is_none());
    }

    #[test]
    fn test_optional_text_fields_default_to_empty() {
        let value = json!({
            "title": "Toast",
            "ingredients": ["bread"],
            "sourceUrls": ["https://example.com/toast"]
        });
        let recipe = validate_value(value).unwrap();
        assert!(recipe.description.is_empty());
        assert!(recipe.instructions.is_empty());
        assert!(recipe.servings.is_empty());
    }

    #[test]
    fn test_non_object_and_non_json_bodies() {
        assert!(matches!(
            validate_value(json!(["title"])),
            Err(GenerateError::MalformedResponse(_))
        ));
        assert!(matches!(
            validate_response(b"<html>oops</html>"),
            Err(GenerateError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_other_error_values_do_not_short_circuit() {
        let mut value = complete();
        value["error"] = Value::Null;
        assert!(validate_value(value).is_ok());
    }
}

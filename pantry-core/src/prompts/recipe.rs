//! Recipe-finder prompt and the output schema the provider must follow.

use serde_json::{json, Value};

use crate::ingredients::IngredientTag;
use crate::types::{Language, NO_RECIPE_FOUND};

/// Prompt name used in logs.
pub const RECIPE_PROMPT_NAME: &str = "find_recipe";

/// Fields the provider must always fill in.
pub const REQUIRED_FIELDS: &[&str] = &[
    "title",
    "description",
    "ingredients",
    "instructions",
    "prepTime",
    "cookTime",
    "servings",
];

/// JSON Schema for the provider's answer. Mirrors [`crate::Recipe`].
pub fn recipe_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "title": {
                "type": "string",
                "description": "The exact title of the recipe from the source."
            },
            "description": {
                "type": "string",
                "description": "A short, enticing description of the dish, based on the source."
            },
            "ingredients": {
                "type": "array",
                "items": {"type": "string"},
                "description": "Ingredients with quantities, as listed in the source recipe."
            },
            "instructions": {
                "type": "array",
                "items": {"type": "string"},
                "description": "Step-by-step instructions from the source recipe, one entry per step."
            },
            "prepTime": {
                "type": "string",
                "description": "Preparation time, e.g. \"15 minutes\"."
            },
            "cookTime": {
                "type": "string",
                "description": "Cooking time, e.g. \"30 minutes\"."
            },
            "servings": {
                "type": "string",
                "description": "How many servings the recipe makes, e.g. \"4 servings\"."
            },
            "tip": {
                "type": "string",
                "description": "An optional tip or variation, only if the source mentions one."
            },
            "sourceUrls": {
                "type": "array",
                "items": {"type": "string"},
                "description": "At least one direct URL to the real online recipe this data was taken from. Mandatory."
            },
            "error": {
                "type": "string",
                "description": format!(
                    "Set to \"{}\" only when no real, verifiable online recipe exists. Otherwise leave empty.",
                    NO_RECIPE_FOUND
                )
            }
        },
        "required": REQUIRED_FIELDS
    })
}

/// Render the instruction sent to the provider.
pub fn render_recipe_prompt(ingredients: &[IngredientTag], language: Language) -> String {
    let ingredient_list = ingredients
        .iter()
        .map(IngredientTag::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"You are a recipe finder. Your only job is to find ONE real, popular, well-rated recipe that is published online and can be made with the user's ingredients.

Ingredients: {ingredients}

Steps:
1. Decide which of the ingredients belong together as the core of a dish.
2. Find an existing online recipe built around those core ingredients.
3. Copy its details into the JSON object described by the schema.
4. Put at least one direct, working URL to that recipe in "sourceUrls". This is mandatory.
5. If no real, verifiable online recipe exists for the core ingredients, set "error" to "{sentinel}" and leave every other field empty.

Rules:
- Never invent, combine or adapt recipes. Everything must come from a single existing online source.
- Never use placeholder or made-up URLs. Every URL must point to a real recipe page.
- If an ingredient clearly does not fit with the others (for example chocolate alongside chicken and tomatoes), ignore it and search with the ones that fit. Do not report it as a problem.
- Salt, pepper, oil and water are always available and do not need to be listed by the user.
- Write every text field in {language}.

Respond with a single JSON object that follows the schema, with no other text before or after it."#,
        ingredients = ingredient_list,
        sentinel = NO_RECIPE_FOUND,
        language = language.display_name(),
    )
}

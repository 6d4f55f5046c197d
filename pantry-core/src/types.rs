use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use utoipa::ToSchema;

use crate::error::GenerateError;
use crate::ingredients::IngredientTag;

/// Value of `Recipe::error` when the provider found no real recipe.
pub const NO_RECIPE_FOUND: &str = "NO_RECIPE_FOUND";

/// Output language for every textual field of a recipe.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Id,
}

impl Language {
    pub const ALL: &'static [Language] = &[Language::En, Language::Id];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Id => "id",
        }
    }

    /// Name used when asking the provider to write in this language.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Id => "Indonesian",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Error)]
#[error("unsupported language '{0}' (expected one of: en, id)")]
pub struct UnknownLanguage(String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(&s.trim().to_lowercase()).ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

/// Body sent to the relay for a single generation attempt.
///
/// Always holds at least one ingredient; the constructor is the only way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct GenerationRequest {
    #[schema(value_type = Vec<String>, min_items = 1)]
    ingredients: Vec<IngredientTag>,
    language: Language,
}

impl GenerationRequest {
    pub fn new(ingredients: Vec<IngredientTag>, language: Language) -> Result<Self, GenerateError> {
        if ingredients.is_empty() {
            return Err(GenerateError::ingredients_required());
        }
        Ok(Self {
            ingredients,
            language,
        })
    }

    pub fn ingredients(&self) -> &[IngredientTag] {
        &self.ingredients
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

/// A sourced recipe as returned by the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Free-form lines, usually with quantities.
    pub ingredients: Vec<String>,
    /// One entry per step.
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub prep_time: String,
    #[serde(default)]
    pub cook_time: String,
    #[serde(default)]
    pub servings: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    pub source_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Shared error body used by every relay endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PingResponse {
    pub message: String,
}

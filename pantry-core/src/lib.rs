pub mod client;
pub mod error;
pub mod finder;
pub mod i18n;
pub mod ingredients;
pub mod llm;
pub mod prompts;
pub mod recipe;
pub mod session;
pub mod types;

pub use client::{RecipeClient, RecipeService, DEFAULT_SERVER_URL};
pub use error::GenerateError;
pub use finder::find_recipe;
pub use i18n::Strings;
pub use ingredients::{IngredientSet, IngredientTag};
pub use llm::{create_provider_from_env, FakeProvider, GeminiProvider, LlmError, LlmProvider};
pub use recipe::{validate_response, validate_value};
pub use session::{Attempt, Session, View};
pub use types::{
    ErrorResponse, GenerationRequest, Language, PingResponse, Recipe, UnknownLanguage,
    NO_RECIPE_FOUND,
};

//! Per-user state: the ingredient set, chosen language and the last outcome.
//!
//! A session starts idle with no ingredients. Every generation attempt clears
//! the previous recipe or error; only the most recent attempt may write its
//! result back, so a late answer from an older attempt is dropped.

use crate::client::RecipeService;
use crate::error::GenerateError;
use crate::i18n::Strings;
use crate::ingredients::{IngredientSet, IngredientTag};
use crate::types::{GenerationRequest, Language, Recipe};

/// What the front end should currently show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Idle,
    Loading,
    Failed(GenerateError),
    Ready(Recipe),
}

/// Token for one in-flight generation.
#[derive(Debug, Clone)]
pub struct Attempt {
    id: u64,
    request: GenerationRequest,
}

impl Attempt {
    pub fn request(&self) -> &GenerationRequest {
        &self.request
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    ingredients: IngredientSet,
    language: Language,
    view: View,
    latest_attempt: u64,
}

impl Session {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    pub fn add_ingredient(&mut self, raw: &str) -> bool {
        self.ingredients.add(raw)
    }

    pub fn remove_ingredient(&mut self, index: usize) -> Option<IngredientTag> {
        self.ingredients.remove(index)
    }

    pub fn clear_ingredients(&mut self) {
        self.ingredients.clear();
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn ingredients(&self) -> &IngredientSet {
        &self.ingredients
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn strings(&self) -> &'static Strings {
        Strings::for_language(self.language)
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.view, View::Loading)
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        match &self.view {
            View::Ready(recipe) => Some(recipe),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&GenerateError> {
        match &self.view {
            View::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Localized message for the current error, if any.
    pub fn error_message(&self) -> Option<&'static str> {
        self.error().map(|e| self.strings().error_message(e))
    }

    /// Start a new attempt from the current ingredients and language.
    ///
    /// Any attempt still in flight becomes stale, even when this one fails
    /// validation. With no ingredients the session moves straight to a
    /// validation failure and no attempt is issued.
    pub fn begin_generation(&mut self) -> Result<Attempt, GenerateError> {
        self.latest_attempt += 1;
        let request =
            match GenerationRequest::new(self.ingredients.as_slice().to_vec(), self.language) {
                Ok(r) => r,
                Err(e) => {
                    self.view = View::Failed(e.clone());
                    return Err(e);
                }
            };

        self.view = View::Loading;
        Ok(Attempt {
            id: self.latest_attempt,
            request,
        })
    }

    /// Record the outcome of `attempt`. Returns false if a newer attempt has
    /// started since, in which case the result is discarded.
    pub fn finish_generation(
        &mut self,
        attempt: Attempt,
        result: Result<Recipe, GenerateError>,
    ) -> bool {
        if attempt.id != self.latest_attempt {
            tracing::debug!(
                attempt = attempt.id,
                latest = self.latest_attempt,
                "discarding stale generation result"
            );
            return false;
        }

        self.view = match result {
            Ok(recipe) => View::Ready(recipe),
            Err(error) => {
                tracing::warn!(error = %error, "recipe generation failed");
                View::Failed(error)
            }
        };
        true
    }

    /// Run one full attempt against `service`.
    pub async fn generate(&mut self, service: &dyn RecipeService) -> &View {
        let Ok(attempt) = self.begin_generation() else {
            return &self.view;
        };
        let result = service.generate(attempt.request()).await;
        self.finish_generation(attempt, result);
        &self.view
    }
}

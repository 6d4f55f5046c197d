use thiserror::Error;

/// Why a generation attempt did not produce a displayable recipe.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// Bad input, caught before any network call.
    #[error("{0}")]
    Validation(String),

    /// The provider reported that no real recipe exists for these ingredients.
    #[error("No real recipe found for these ingredients")]
    NoRecipeFound,

    /// Transport failure or a non-success response from the relay.
    #[error("Recipe request failed: {0}")]
    Provider(String),

    /// The relay answered, but the body is not a displayable recipe.
    #[error("Invalid recipe format received from API: {0}")]
    MalformedResponse(String),
}

impl GenerateError {
    pub fn ingredients_required() -> Self {
        GenerateError::Validation("Ingredients are required.".to_string())
    }
}

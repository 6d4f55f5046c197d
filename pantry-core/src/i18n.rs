//! User-facing strings for the supported languages.

use crate::error::GenerateError;
use crate::types::Language;

/// Labels and messages shown by a front end.
#[derive(Debug, Clone, Copy)]
pub struct Strings {
    pub pantry_title: &'static str,
    pub pantry_description: &'static str,
    pub generating: &'static str,
    pub recipe_awaits: &'static str,
    pub prep_time: &'static str,
    pub cook_time: &'static str,
    pub servings: &'static str,
    pub ingredients: &'static str,
    pub instructions: &'static str,
    pub tip: &'static str,
    pub sources: &'static str,
    pub error_ingredients: &'static str,
    pub error_no_recipe_found: &'static str,
    pub error_api: &'static str,
    pub error_invalid_recipe: &'static str,
}

const EN: Strings = Strings {
    pantry_title: "What's in your pantry?",
    pantry_description: "Add the ingredients you have and we'll find a real recipe that uses them.",
    generating: "Finding a recipe...",
    recipe_awaits: "Your recipe awaits! Add some ingredients and generate.",
    prep_time: "Prep Time",
    cook_time: "Cook Time",
    servings: "Servings",
    ingredients: "Ingredients",
    instructions: "Instructions",
    tip: "Chef's Tip",
    sources: "Sources",
    error_ingredients: "Please add at least one ingredient.",
    error_no_recipe_found:
        "Sorry, we couldn't find a real recipe online for those ingredients. Try a different combination!",
    error_api: "Sorry, something went wrong while generating your recipe. Please try again.",
    error_invalid_recipe: "The recipe we received was incomplete. Please try again.",
};

const ID: Strings = Strings {
    pantry_title: "Apa yang ada di dapur Anda?",
    pantry_description:
        "Tambahkan bahan yang Anda miliki dan kami akan mencarikan resep asli yang menggunakannya.",
    generating: "Mencari resep...",
    recipe_awaits: "Resep Anda menanti! Tambahkan beberapa bahan lalu buat resep.",
    prep_time: "Waktu Persiapan",
    cook_time: "Waktu Memasak",
    servings: "Porsi",
    ingredients: "Bahan-bahan",
    instructions: "Langkah-langkah",
    tip: "Tips Koki",
    sources: "Sumber",
    error_ingredients: "Harap tambahkan setidaknya satu bahan.",
    error_no_recipe_found:
        "Maaf, kami tidak dapat menemukan resep asli secara online untuk bahan-bahan tersebut. Coba kombinasi lain!",
    error_api: "Maaf, terjadi kesalahan saat membuat resep Anda. Silakan coba lagi.",
    error_invalid_recipe: "Resep yang kami terima tidak lengkap. Silakan coba lagi.",
};

impl Strings {
    pub fn for_language(language: Language) -> &'static Strings {
        match language {
            Language::En => &EN,
            Language::Id => &ID,
        }
    }

    pub fn error_message(&self, error: &GenerateError) -> &'static str {
        match error {
            GenerateError::Validation(_) => self.error_ingredients,
            GenerateError::NoRecipeFound => self.error_no_recipe_found,
            GenerateError::Provider(_) => self.error_api,
            GenerateError::MalformedResponse(_) => self.error_invalid_recipe,
        }
    }
}

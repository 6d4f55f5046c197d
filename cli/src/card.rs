//! Plain-text recipe card.

use pantry_core::{Recipe, Strings};
use std::fmt::{self, Write};

/// Render `recipe` with localized headings.
///
/// Metadata entries with no value are left out. The tip block is only shown
/// when the tip has text.
pub fn render_card(recipe: &Recipe, strings: &Strings) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "{}", recipe.title)?;
    writeln!(out, "{}", "=".repeat(recipe.title.chars().count()))?;
    if !recipe.description.trim().is_empty() {
        writeln!(out, "{}", recipe.description.trim())?;
    }

    let meta: Vec<String> = [
        (strings.prep_time, &recipe.prep_time),
        (strings.cook_time, &recipe.cook_time),
        (strings.servings, &recipe.servings),
    ]
    .iter()
    .filter(|(_, value)| !value.trim().is_empty())
    .map(|(label, value)| format!("{}: {}", label, value.trim()))
    .collect();
    if !meta.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", meta.join("  |  "))?;
    }

    writeln!(out)?;
    writeln!(out, "{}", strings.ingredients)?;
    for ingredient in &recipe.ingredients {
        writeln!(out, "  - {}", ingredient)?;
    }

    if !recipe.instructions.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", strings.instructions)?;
        for (i, step) in recipe.instructions.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, step)?;
        }
    }

    if let Some(tip) = recipe.tip.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        writeln!(out)?;
        writeln!(out, "{}: {}", strings.tip, tip)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", strings.sources)?;
    for url in &recipe.source_urls {
        writeln!(out, "  {}", url)?;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_core::Language;

    fn recipe() -> Recipe {
        Recipe {
            title: "Nasi Goreng".to_string(),
            description: "Indonesian fried rice.".to_string(),
            ingredients: vec!["2 cups cooked rice".to_string(), "2 eggs".to_string()],
            instructions: vec!["Fry the garlic.".to_string(), "Add the rice.".to_string()],
            prep_time: "10 minutes".to_string(),
            cook_time: "10 minutes".to_string(),
            servings: "2".to_string(),
            tip: Some("Use day-old rice.".to_string()),
            source_urls: vec!["https://example.com/nasi-goreng".to_string()],
            error: None,
        }
    }

    #[test]
    fn test_card_sections() {
        let card = render_card(&recipe(), Strings::for_language(Language::En)).unwrap();

        assert!(card.starts_with("Nasi Goreng\n===========\n"));
        assert!(card.contains("Prep Time: 10 minutes  |  Cook Time: 10 minutes  |  Servings: 2"));
        assert!(card.contains("  - 2 eggs\n"));
        assert!(card.contains("  2. Add the rice.\n"));
        assert!(card.contains("Chef's Tip: Use day-old rice."));
        assert!(card.contains("Sources\n  https://example.com/nasi-goreng\n"));
    }

    #[test]
    fn test_card_is_localized() {
        let card = render_card(&recipe(), Strings::for_language(Language::Id)).unwrap();
        assert!(card.contains("Bahan-bahan"));
        assert!(card.contains("Waktu Persiapan: 10 minutes"));
        assert!(card.contains("Sumber"));
    }

    #[test]
    fn test_blank_tip_is_hidden() {
        let strings = Strings::for_language(Language::En);
        let mut r = recipe();
        r.tip = Some("   ".to_string());
        assert!(!render_card(&r, strings).unwrap().contains(strings.tip));
        r.tip = None;
        assert!(!render_card(&r, strings).unwrap().contains(strings.tip));
    }

    #[test]
    fn test_empty_metadata_is_skipped() {
        let mut r = recipe();
        r.prep_time.clear();
        r.cook_time.clear();
        r.servings.clear();
        let card = render_card(&r, Strings::for_language(Language::En)).unwrap();
        assert!(!card.contains("Prep Time"));
    }
}

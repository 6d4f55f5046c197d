//! Provider prompt templates.

pub mod recipe;

pub use recipe::{recipe_schema, render_recipe_prompt};

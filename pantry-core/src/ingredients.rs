//! Ordered, duplicate-free set of ingredient tags entered by the user.

use serde::Serialize;
use std::fmt;
use std::ops::Deref;

/// A trimmed, lower-cased, non-empty ingredient name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IngredientTag(String);

impl IngredientTag {
    /// Normalize raw user input. Returns `None` if nothing is left after trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for IngredientTag {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IngredientTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ingredient list in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientSet {
    tags: Vec<IngredientTag>,
}

impl IngredientSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an ingredient. Returns false when the input was blank or already present.
    pub fn add(&mut self, raw: &str) -> bool {
        let Some(tag) = IngredientTag::parse(raw) else {
            return false;
        };
        if self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Remove the ingredient at `index`. Out-of-range indexes are ignored.
    pub fn remove(&mut self, index: usize) -> Option<IngredientTag> {
        if index < self.tags.len() {
            Some(self.tags.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IngredientTag> {
        self.tags.iter()
    }

    pub fn as_slice(&self) -> &[IngredientTag] {
        &self.tags
    }
}

impl<'a> Extend<&'a str> for IngredientSet {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for raw in iter {
            self.add(raw);
        }
    }
}

impl<'a> FromIterator<&'a str> for IngredientSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a IngredientSet {
    type Item = &'a IngredientTag;
    type IntoIter = std::slice::Iter<'a, IngredientTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

//! Recipe record model.
//!
//! A [`RecipeRecord`] is one row of the ingested corpus. Records are created
//! once during ingestion and never mutated afterward; everything downstream
//! (index, graph, statistics) borrows them read-only.

use serde::{Deserialize, Serialize};

/// One recipe row from the corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecord {
    /// Unique, stable identifier. Used as the graph node key.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Serialized ingredient-list field, e.g. `['eggs', 'milk']`.
    ///
    /// Parsed lazily by [`crate::parse::parse_ingredients`]; kept raw here so
    /// a record survives ingestion even when its ingredient field is garbage.
    pub ingredients: String,
    /// Source URL, when the corpus carries one.
    pub link: Option<String>,
    /// Externally backfilled rating, passed through untouched.
    pub rating: Option<String>,
}

impl RecipeRecord {
    /// Convenience constructor for a minimal record.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        ingredients: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ingredients: ingredients.into(),
            link: None,
            rating: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RecipeRecord;

    #[test]
    fn new_fills_optional_fields_with_none() {
        let r = RecipeRecord::new("1", "Pancakes", "['eggs', 'milk']");
        assert_eq!(r.id, "1");
        assert_eq!(r.title, "Pancakes");
        assert!(r.link.is_none());
        assert!(r.rating.is_none());
    }
}

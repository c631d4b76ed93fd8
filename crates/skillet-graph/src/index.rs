//! Ingredient index: ingredient token → ordered recipe identifiers.
//!
//! Built in one scan over the corpus. Iteration order is the order in which
//! ingredients first appear in the input, so everything derived from the
//! index is deterministic for a given corpus.

use std::collections::HashMap;

use skillet_core::model::RecipeRecord;
use skillet_core::parse::parse_ingredients;
use tracing::{debug, instrument};

/// Mapping from ingredient token to the recipes containing it.
///
/// Recipe ids per ingredient keep input order. A recipe listing the same
/// ingredient twice is recorded once — repeated tokens within one record
/// must not manufacture extra candidate pairs downstream.
#[derive(Debug, Default)]
pub struct IngredientIndex {
    by_ingredient: HashMap<String, Vec<String>>,
    /// Ingredient tokens in first-appearance order.
    order: Vec<String>,
}

impl IngredientIndex {
    /// Build the index by scanning all records once.
    #[must_use]
    #[instrument(skip(records), fields(recipes = records.len()))]
    pub fn from_records(records: &[RecipeRecord]) -> Self {
        let mut by_ingredient: HashMap<String, Vec<String>> = HashMap::new();
        let mut order = Vec::new();

        for record in records {
            for token in parse_ingredients(&record.ingredients) {
                let recipes = by_ingredient.entry(token.clone()).or_insert_with(|| {
                    order.push(token);
                    Vec::new()
                });
                if recipes.last().map(String::as_str) != Some(record.id.as_str()) {
                    recipes.push(record.id.clone());
                }
            }
        }

        debug!(ingredients = order.len(), "ingredient index built");
        Self { by_ingredient, order }
    }

    /// Number of distinct ingredient tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// `true` when no ingredient was indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Recipes containing `token`, in input order.
    #[must_use]
    pub fn recipes(&self, token: &str) -> Option<&[String]> {
        self.by_ingredient.get(token).map(Vec::as_slice)
    }

    /// All entries in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.order.iter().filter_map(move |token| {
            self.by_ingredient
                .get(token)
                .map(|recipes| (token.as_str(), recipes.as_slice()))
        })
    }

    /// Entries shared by at least two recipes — the only ones that can
    /// generate edges.
    pub fn shared(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.iter().filter(|(_, recipes)| recipes.len() >= 2)
    }
}

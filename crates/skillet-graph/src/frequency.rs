//! Corpus-wide ingredient frequency statistics.
//!
//! Counts raw ingredient occurrences over all records — independent of the
//! graph, so an ingredient appearing in a single recipe still shows up
//! here even though it can never generate an edge.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use tracing::instrument;

use skillet_core::model::RecipeRecord;
use skillet_core::parse::parse_ingredients;

/// The ingredient-statistics section of the analysis report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientStatistics {
    pub total_unique_ingredients: usize,
    pub total_ingredients: usize,
    /// Top `[ingredient, count]` pairs, count-descending; ties keep the
    /// order of first appearance in the input.
    pub most_common_ingredients: Vec<(String, usize)>,
    /// Complete occurrence mapping, key-sorted for stable serialization.
    pub ingredient_frequency_distribution: BTreeMap<String, usize>,
}

/// Count every ingredient occurrence across the corpus.
#[must_use]
#[instrument(skip(records), fields(recipes = records.len()))]
pub fn ingredient_statistics(records: &[RecipeRecord], top_n: usize) -> IngredientStatistics {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();
    let mut total = 0_usize;

    for record in records {
        for token in parse_ingredients(&record.ingredients) {
            total += 1;
            let count = counts.entry(token.clone()).or_insert(0);
            if *count == 0 {
                first_seen.push(token);
            }
            *count += 1;
        }
    }

    // Stable sort: equal counts keep first-appearance order.
    let mut ranked: Vec<(String, usize)> = first_seen
        .into_iter()
        .map(|token| {
            let count = counts.get(&token).copied().unwrap_or(0);
            (token, count)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(top_n);

    IngredientStatistics {
        total_unique_ingredients: counts.len(),
        total_ingredients: total,
        most_common_ingredients: ranked,
        ingredient_frequency_distribution: counts.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(rows: &[(&str, &str)]) -> Vec<RecipeRecord> {
        rows.iter()
            .map(|(id, ingredients)| RecipeRecord::new(*id, *id, *ingredients))
            .collect()
    }

    #[test]
    fn empty_corpus_zeroes() {
        let stats = ingredient_statistics(&[], 20);
        assert_eq!(stats.total_unique_ingredients, 0);
        assert_eq!(stats.total_ingredients, 0);
        assert!(stats.most_common_ingredients.is_empty());
        assert!(stats.ingredient_frequency_distribution.is_empty());
    }

    #[test]
    fn counts_raw_occurrences() {
        let records = corpus(&[
            ("r1", "['milk', 'eggs']"),
            ("r2", "['milk', 'flour']"),
            ("r3", "['milk']"),
        ]);
        let stats = ingredient_statistics(&records, 20);

        assert_eq!(stats.total_unique_ingredients, 3);
        assert_eq!(stats.total_ingredients, 5);
        assert_eq!(stats.ingredient_frequency_distribution["milk"], 3);
        assert_eq!(stats.ingredient_frequency_distribution["eggs"], 1);
    }

    #[test]
    fn most_common_ranks_by_count_then_first_appearance() {
        let records = corpus(&[
            ("r1", "['b', 'a']"),
            ("r2", "['b', 'a']"),
            ("r3", "['c']"),
        ]);
        let stats = ingredient_statistics(&records, 20);

        // b and a tie at 2; b appeared first.
        assert_eq!(
            stats.most_common_ingredients,
            vec![
                ("b".to_owned(), 2),
                ("a".to_owned(), 2),
                ("c".to_owned(), 1)
            ]
        );
    }

    #[test]
    fn top_n_truncates() {
        let records = corpus(&[("r1", "['a', 'b', 'c', 'd']")]);
        let stats = ingredient_statistics(&records, 2);

        assert_eq!(stats.most_common_ingredients.len(), 2);
        assert_eq!(stats.total_unique_ingredients, 4);
    }

    #[test]
    fn repeated_token_in_one_recipe_counts_twice() {
        // Frequency is raw occurrences, unlike the graph index.
        let records = corpus(&[("r1", "['salt', 'salt']")]);
        let stats = ingredient_statistics(&records, 20);

        assert_eq!(stats.total_ingredients, 2);
        assert_eq!(stats.ingredient_frequency_distribution["salt"], 2);
    }

    #[test]
    fn pairs_serialize_as_arrays() {
        let records = corpus(&[("r1", "['a']")]);
        let stats = ingredient_statistics(&records, 20);
        let json = serde_json::to_value(&stats).expect("serialize");

        assert_eq!(
            json["most_common_ingredients"][0],
            serde_json::json!(["a", 1])
        );
    }
}

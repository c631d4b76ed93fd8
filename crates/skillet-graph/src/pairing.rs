//! Ingredient pairing scores and per-recipe compatibility.
//!
//! An external pairing table scores how well two ingredients go together
//! (`ingredient_a, ingredient_b, score` rows). Ingredient names on both
//! sides are noisy free text, so lookups go through normalized token sets:
//! lowercase, non-alphabetic characters replaced by spaces, descriptor
//! stopwords removed. `"Fresh chopped Basil"` and `"basil"` meet at the
//! same key.
//!
//! A recipe's compatibility score is the sum of pair scores over all
//! ingredient combinations, divided by the ingredient count.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use skillet_core::error::ErrorCode;
use skillet_core::model::RecipeRecord;
use skillet_core::parse::parse_ingredients;

/// Normalized ingredient name: its significant words, deduplicated and
/// ordered.
pub type TokenSet = BTreeSet<String>;

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Immutable normalization settings. Built once from configuration and
/// passed into every function that normalizes — never ambient.
#[derive(Debug, Clone)]
pub struct NormalizeConfig {
    stopwords: HashSet<String>,
}

impl NormalizeConfig {
    /// Build from a stopword list; words are matched case-insensitively.
    pub fn new<I, S>(stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stopwords: stopwords
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }
}

/// Normalize free-text ingredient naming to its significant words.
#[must_use]
pub fn normalize_tokens(text: &str, config: &NormalizeConfig) -> TokenSet {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() { c } else { ' ' })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|word| !config.stopwords.contains(*word))
        .map(str::to_owned)
        .collect()
}

/// Canonical ordering for an unordered pair of token sets.
fn ordered_pair(a: TokenSet, b: TokenSet) -> (TokenSet, TokenSet) {
    if a <= b { (a, b) } else { (b, a) }
}

// ---------------------------------------------------------------------------
// PairingScores
// ---------------------------------------------------------------------------

/// Score table keyed by canonically ordered normalized token-set pairs.
#[derive(Debug, Default)]
pub struct PairingScores {
    scores: HashMap<(TokenSet, TokenSet), f64>,
}

impl PairingScores {
    /// Load a pairing table from CSV.
    ///
    /// Tolerant by design, mirroring the corpus files: rows that are blank,
    /// `#`-commented, shorter than three columns, carry an unparseable
    /// score, or normalize to an empty or self-pairing key are skipped.
    /// Scores for the same pair accumulate.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read.
    #[instrument(skip(config), fields(path = %path.as_ref().display()))]
    pub fn from_csv_path(path: impl AsRef<Path>, config: &NormalizeConfig) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .with_context(|| {
                format!("{}: open {}", ErrorCode::PairingTableInvalid, path.display())
            })?;

        let mut scores: HashMap<(TokenSet, TokenSet), f64> = HashMap::new();
        for row in reader.records() {
            let row = row.with_context(|| {
                format!("{}: read {}", ErrorCode::PairingTableInvalid, path.display())
            })?;

            let Some(first) = row.get(0).map(str::trim) else {
                continue;
            };
            if first.is_empty() || first.starts_with('#') || row.len() < 3 {
                continue;
            }
            let (Some(b), Some(raw_score)) = (row.get(1), row.get(2)) else {
                continue;
            };
            let Ok(score) = raw_score.trim().parse::<f64>() else {
                continue;
            };

            let ta = normalize_tokens(first, config);
            let tb = normalize_tokens(b, config);
            if ta.is_empty() || tb.is_empty() || ta == tb {
                continue;
            }

            *scores.entry(ordered_pair(ta, tb)).or_insert(0.0) += score;
        }

        debug!(pairs = scores.len(), "pairing table loaded");
        Ok(Self { scores })
    }

    /// Number of distinct scored pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// `true` when no pair is scored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Score for one unordered pair; 0.0 when unscored.
    #[must_use]
    pub fn pair_score(&self, a: &TokenSet, b: &TokenSet) -> f64 {
        self.scores
            .get(&ordered_pair(a.clone(), b.clone()))
            .copied()
            .unwrap_or(0.0)
    }

    /// Compatibility score for a recipe's ingredient list.
    ///
    /// Sum of pair scores over all combinations of usable (non-empty after
    /// normalization) ingredients, divided by the usable-ingredient count.
    /// Zero when nothing is usable.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn recipe_score(&self, ingredients: &[String], config: &NormalizeConfig) -> f64 {
        let sets: Vec<TokenSet> = ingredients
            .iter()
            .map(|ingredient| normalize_tokens(ingredient, config))
            .filter(|set| !set.is_empty())
            .collect();

        if sets.is_empty() {
            return 0.0;
        }

        let mut total = 0.0;
        for (i, a) in sets.iter().enumerate() {
            for b in &sets[i + 1..] {
                total += self.pair_score(a, b);
            }
        }

        total / sets.len() as f64
    }
}

// ---------------------------------------------------------------------------
// PairingStatistics
// ---------------------------------------------------------------------------

/// Optional pairing section of the analysis report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairingStatistics {
    pub scored_recipe_count: usize,
    pub mean_score: f64,
    pub max_score: f64,
    /// Top `[recipe id, score]` pairs, score-descending; ties keep input
    /// order.
    pub top_recipes: Vec<(String, f64)>,
}

/// Score every recipe against the pairing table.
#[must_use]
#[instrument(skip(records, scores, config), fields(recipes = records.len()))]
#[allow(clippy::cast_precision_loss)]
pub fn pairing_statistics(
    records: &[RecipeRecord],
    scores: &PairingScores,
    config: &NormalizeConfig,
    top_n: usize,
) -> PairingStatistics {
    let mut scored: Vec<(String, f64)> = records
        .iter()
        .map(|record| {
            let ingredients = parse_ingredients(&record.ingredients);
            (record.id.clone(), scores.recipe_score(&ingredients, config))
        })
        .collect();

    if scored.is_empty() {
        warn!("no recipes to score against pairing table");
        return PairingStatistics {
            scored_recipe_count: 0,
            mean_score: 0.0,
            max_score: 0.0,
            top_recipes: Vec::new(),
        };
    }

    let total: f64 = scored.iter().map(|(_, score)| score).sum();
    let max = scored.iter().map(|(_, score)| *score).fold(0.0, f64::max);
    let count = scored.len();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(top_n);

    PairingStatistics {
        scored_recipe_count: count,
        mean_score: total / count as f64,
        max_score: max,
        top_recipes: scored,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Analysis configuration.
//!
//! Loaded from an optional `skillet.toml` and passed explicitly into the
//! functions that consume it. Nothing here is ambient: sampling bounds,
//! the sampling seed, and the normalization stopword list all travel as
//! immutable values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ErrorCode;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub sampling: SamplingConfig,
    #[serde(default)]
    pub ingredients: IngredientConfig,
}

impl AnalysisConfig {
    /// Parse a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("{}: read {}", ErrorCode::ConfigParseError, path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("{}: parse {}", ErrorCode::ConfigParseError, path.display()))
    }

    /// Parse a config file when one was given, otherwise use defaults.
    ///
    /// # Errors
    ///
    /// Returns an error only for an explicitly named file that cannot be
    /// loaded — absence of a config is not an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}

/// Bounds and seed for the sampled statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Upper bound on nodes sampled for the clustering coefficient.
    #[serde(default = "default_clustering_sample_size")]
    pub clustering_sample_size: usize,
    /// Upper bound on Brandes source nodes for betweenness centrality.
    #[serde(default = "default_betweenness_sample_size")]
    pub betweenness_sample_size: usize,
    /// Seed for source-node selection. Fixed so reruns reproduce exactly.
    #[serde(default = "default_sample_seed")]
    pub seed: u64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            clustering_sample_size: default_clustering_sample_size(),
            betweenness_sample_size: default_betweenness_sample_size(),
            seed: default_sample_seed(),
        }
    }
}

/// Ingredient-statistics and normalization settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientConfig {
    /// How many entries `most_common_ingredients` reports.
    #[serde(default = "default_top_ingredients")]
    pub top_ingredients: usize,
    /// Descriptor words dropped during pairing-score normalization.
    #[serde(default = "default_stopwords")]
    pub stopwords: Vec<String>,
}

impl Default for IngredientConfig {
    fn default() -> Self {
        Self {
            top_ingredients: default_top_ingredients(),
            stopwords: default_stopwords(),
        }
    }
}

const fn default_clustering_sample_size() -> usize {
    1000
}

const fn default_betweenness_sample_size() -> usize {
    100
}

const fn default_sample_seed() -> u64 {
    0x5EED
}

const fn default_top_ingredients() -> usize {
    20
}

fn default_stopwords() -> Vec<String> {
    ["fresh", "chopped", "optional", "ground", "large", "small", "or", "and"]
        .into_iter()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_documented_bounds() {
        let config = AnalysisConfig::default();
        assert_eq!(config.sampling.clustering_sample_size, 1000);
        assert_eq!(config.sampling.betweenness_sample_size, 100);
        assert_eq!(config.ingredients.top_ingredients, 20);
        assert!(config.ingredients.stopwords.contains(&"fresh".to_owned()));
    }

    #[test]
    fn partial_file_fills_missing_fields_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"[sampling]\nbetweenness_sample_size = 50\n")
            .expect("write toml");

        let config = AnalysisConfig::load(file.path()).expect("load");
        assert_eq!(config.sampling.betweenness_sample_size, 50);
        assert_eq!(config.sampling.clustering_sample_size, 1000);
        assert_eq!(config.ingredients.top_ingredients, 20);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"[sampling\n").expect("write toml");

        let err = AnalysisConfig::load(file.path()).expect_err("parse error");
        assert!(err.to_string().contains("E1001"), "got: {err}");
    }

    #[test]
    fn no_path_means_defaults() {
        let config = AnalysisConfig::load_or_default(None).expect("defaults");
        assert_eq!(config, AnalysisConfig::default());
    }
}

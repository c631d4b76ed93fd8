#![forbid(unsafe_code)]
//! skillet-graph: recipe co-occurrence graph construction and statistics.
//!
//! # Pipeline
//!
//! ```text
//! &[RecipeRecord]
//!        ↓  index::IngredientIndex::from_records()
//! IngredientIndex (ingredient → ordered recipe ids)
//!        ↓  build::CoGraph::build()
//! CoGraph (undirected, one edge per distinct recipe pair)
//!        ↓  stats::GraphStatistics::from_graph()
//! GraphStatistics (density, components, clustering, centrality, …)
//! ```
//!
//! Alongside the graph path, [`frequency`] counts raw ingredient
//! occurrences over the same records and [`pairing`] scores recipes against
//! an external ingredient-pairing table. [`report`] ties everything into
//! the single combined document the CLI serializes.
//!
//! The graph is immutable once built; every statistic reads it without
//! mutation, and sampled statistics draw from an identifier-sorted node
//! ordering so reruns reproduce exactly.

pub mod build;
pub mod frequency;
pub mod index;
pub mod metrics;
pub mod pairing;
pub mod report;
pub mod stats;

pub use build::{CoGraph, PairKey, RecipeNode};
pub use index::IngredientIndex;
pub use report::{AnalysisReport, run_analysis};
pub use stats::GraphStatistics;

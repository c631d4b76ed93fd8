//! Combined analysis report.
//!
//! One report per run: graph statistics and ingredient statistics always,
//! pairing statistics when a pairing table was supplied. Written once,
//! after every computation completes — no partial or streaming output.

use chrono::Utc;
use serde::Serialize;
use tracing::{info, instrument};

use skillet_core::config::AnalysisConfig;
use skillet_core::model::RecipeRecord;

use crate::build::CoGraph;
use crate::frequency::{self, IngredientStatistics};
use crate::index::IngredientIndex;
use crate::pairing::PairingStatistics;
use crate::stats::GraphStatistics;

/// The full analysis document.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub graph_statistics: GraphStatistics,
    pub ingredient_statistics: IngredientStatistics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pairing_statistics: Option<PairingStatistics>,
    /// RFC 3339 timestamp of report creation.
    pub generated_at: String,
}

impl AnalysisReport {
    /// Attach the optional pairing section.
    #[must_use]
    pub fn with_pairing(mut self, pairing: PairingStatistics) -> Self {
        self.pairing_statistics = Some(pairing);
        self
    }
}

/// Run the whole engine: index, graph, statistics.
///
/// The graph is fully materialized before any statistic is computed, and
/// the records are read-only throughout — construction is the single
/// writer phase, everything after only reads.
#[must_use]
#[instrument(skip(records, config), fields(recipes = records.len()))]
pub fn run_analysis(records: &[RecipeRecord], config: &AnalysisConfig) -> AnalysisReport {
    let index = IngredientIndex::from_records(records);
    let graph = CoGraph::build(records, &index);
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        content_hash = %graph.content_hash,
        "co-occurrence graph ready"
    );

    let graph_statistics = GraphStatistics::from_graph(&graph, &config.sampling);
    let ingredient_statistics =
        frequency::ingredient_statistics(records, config.ingredients.top_ingredients);

    AnalysisReport {
        graph_statistics,
        ingredient_statistics,
        pairing_statistics: None,
        generated_at: Utc::now().to_rfc3339(),
    }
}

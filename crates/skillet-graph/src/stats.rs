//! Aggregated graph statistics.
//!
//! # Statistics Provided
//!
//! - **node_count / edge_count**: cardinalities, exact.
//! - **average_node_degree**: `2·edges / nodes`, 0 for an empty graph.
//! - **density**: `2·edges / (nodes·(nodes−1))`, 0 for fewer than 2 nodes.
//! - **connected components**: count, largest size, and the full size
//!   distribution sorted descending. Exact.
//! - **average_clustering_coefficient**: sample mean over up to
//!   `clustering_sample_size` identifier-sorted nodes.
//! - **degree centrality**: max and mean over all nodes, exact.
//! - **betweenness centrality**: max and mean of the seeded-sample Brandes
//!   approximation.
//! - **diameter / radius**: whole graph when connected, otherwise the
//!   largest component; 0 when that scope has ≤ 1 node.
//!
//! Degradable metrics pass through [`metric_or_default`]: a failure logs,
//! defaults to zero, and never stops the other metrics from being
//! reported.

use serde::Serialize;
use tracing::{instrument, warn};

use skillet_core::config::SamplingConfig;

use crate::build::CoGraph;
use crate::metrics::{basic, betweenness, clustering, eccentricity};

/// The graph-statistics section of the analysis report.
///
/// Produced once per graph build; a read-only snapshot from then on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStatistics {
    pub node_count: usize,
    pub edge_count: usize,
    pub average_node_degree: f64,
    pub density: f64,
    pub connected_components_count: usize,
    pub largest_component_size: usize,
    pub component_size_distribution: Vec<usize>,
    pub average_clustering_coefficient: f64,
    pub max_degree_centrality: f64,
    pub avg_degree_centrality: f64,
    pub max_betweenness_centrality: f64,
    pub avg_betweenness_centrality: f64,
    pub diameter: usize,
    pub radius: usize,
}

impl GraphStatistics {
    /// Compute every metric over a fully built graph.
    #[must_use]
    #[instrument(skip(graph, sampling), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
    pub fn from_graph(graph: &CoGraph, sampling: &SamplingConfig) -> Self {
        let components = basic::component_info(graph);
        let degrees = basic::degree_centrality(graph);

        let average_clustering_coefficient = metric_or_default(
            "average_clustering_coefficient",
            clustering::average_clustering(graph, sampling.clustering_sample_size),
        );
        let betweenness = metric_or_default(
            "betweenness_centrality",
            betweenness::betweenness_centrality(
                graph,
                sampling.betweenness_sample_size,
                sampling.seed,
            ),
        );
        let reach = metric_or_default("diameter_radius", eccentricity::diameter_radius(graph));

        Self {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            average_node_degree: basic::average_degree(graph),
            density: basic::density(graph),
            connected_components_count: components.count,
            largest_component_size: components.sizes.first().copied().unwrap_or(0),
            component_size_distribution: components.sizes,
            average_clustering_coefficient,
            max_degree_centrality: degrees.max,
            avg_degree_centrality: degrees.mean,
            max_betweenness_centrality: betweenness.max,
            avg_betweenness_centrality: betweenness.mean,
            diameter: reach.diameter,
            radius: reach.radius,
        }
    }
}

/// Default a failed metric to its zero value and keep going.
fn metric_or_default<T: Default>(metric: &'static str, value: anyhow::Result<T>) -> T {
    match value {
        Ok(value) => value,
        Err(err) => {
            warn!(metric, %err, "metric computation failed, reporting zero");
            T::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

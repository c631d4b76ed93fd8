//! Mean local clustering coefficient over a bounded sample.
//!
//! A node's local coefficient is the fraction of its neighbor pairs that
//! are themselves connected. Computing it for every node is quadratic in
//! neighborhood size, so the mean is taken over a size-bounded sample —
//! the first `sample_size` nodes in identifier-sorted order, which makes
//! the result reproducible for a given corpus.

use std::collections::HashSet;

use anyhow::Result;
use petgraph::graph::NodeIndex;
use tracing::instrument;

use crate::build::CoGraph;

/// Mean local clustering coefficient over up to `sample_size` nodes.
///
/// Returns 0.0 for an empty graph or a zero sample bound.
///
/// # Errors
///
/// Infallible today; the `Result` is the seam the statistics aggregator
/// uses to default any metric to zero instead of aborting the report.
#[instrument(skip(g))]
#[allow(clippy::cast_precision_loss)]
pub fn average_clustering(g: &CoGraph, sample_size: usize) -> Result<f64> {
    let nodes = g.nodes_sorted_by_id();
    if nodes.is_empty() || sample_size == 0 {
        return Ok(0.0);
    }

    let sample = &nodes[..sample_size.min(nodes.len())];
    let total: f64 = sample.iter().map(|&v| local_coefficient(g, v)).sum();
    Ok(total / sample.len() as f64)
}

/// Local clustering coefficient of one node.
///
/// Counts each neighbor-neighbor edge from both endpoints, so the raw link
/// count is twice the edge count and the coefficient is
/// `links / (k·(k−1))`. Nodes with fewer than two neighbors score 0.
#[allow(clippy::cast_precision_loss)]
fn local_coefficient(g: &CoGraph, v: NodeIndex) -> f64 {
    let neighbors: HashSet<NodeIndex> = g.graph.neighbors(v).collect();
    let k = neighbors.len();
    if k < 2 {
        return 0.0;
    }

    let links: usize = neighbors
        .iter()
        .map(|&a| {
            g.graph
                .neighbors(a)
                .filter(|b| neighbors.contains(b))
                .count()
        })
        .sum();

    links as f64 / (k * (k - 1)) as f64
}

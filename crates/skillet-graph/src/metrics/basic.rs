//! Exact degree, density, and component metrics.

use petgraph::graph::NodeIndex;

use crate::build::CoGraph;

// ---------------------------------------------------------------------------
// Degree
// ---------------------------------------------------------------------------

/// Mean degree over all nodes: `2·edges / nodes`. Zero for an empty graph.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_degree(g: &CoGraph) -> f64 {
    let n = g.node_count();
    if n == 0 {
        return 0.0;
    }
    (2 * g.edge_count()) as f64 / n as f64
}

/// Fraction of possible edges present: `2·edges / (nodes·(nodes−1))`.
/// Zero for graphs with fewer than 2 nodes.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn density(g: &CoGraph) -> f64 {
    let n = g.node_count();
    if n < 2 {
        return 0.0;
    }
    (2 * g.edge_count()) as f64 / (n * (n - 1)) as f64
}

/// Max and mean of per-node degree centrality.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DegreeCentralitySummary {
    pub max: f64,
    pub mean: f64,
}

/// Degree centrality — `degree / (nodes−1)` — summarized over all nodes.
///
/// Exact (no sampling). Graphs with fewer than 2 nodes report zeros.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn degree_centrality(g: &CoGraph) -> DegreeCentralitySummary {
    let n = g.node_count();
    if n < 2 {
        return DegreeCentralitySummary::default();
    }

    let denom = (n - 1) as f64;
    let mut max = 0.0_f64;
    let mut sum = 0.0_f64;
    for idx in g.graph.node_indices() {
        let centrality = g.graph.neighbors(idx).count() as f64 / denom;
        max = max.max(centrality);
        sum += centrality;
    }

    DegreeCentralitySummary {
        max,
        mean: sum / n as f64,
    }
}

// ---------------------------------------------------------------------------
// Connected components
// ---------------------------------------------------------------------------

/// Component count and sizes, sorted descending.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComponentInfo {
    pub count: usize,
    pub sizes: Vec<usize>,
}

/// Partition the node set into connected components.
///
/// Components come out in discovery order (lowest node index first);
/// members keep discovery order within each component.
#[must_use]
pub fn components(g: &CoGraph) -> Vec<Vec<NodeIndex>> {
    let node_count = g.node_count();
    let mut visited = vec![false; node_count];
    let mut result = Vec::new();

    for start in g.graph.node_indices() {
        if visited[start.index()] {
            continue;
        }

        let mut members = Vec::new();
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            if visited[node.index()] {
                continue;
            }
            visited[node.index()] = true;
            members.push(node);

            for neighbor in g.graph.neighbors(node) {
                if !visited[neighbor.index()] {
                    stack.push(neighbor);
                }
            }
        }
        result.push(members);
    }

    result
}

/// Component count and descending size distribution.
#[must_use]
pub fn component_info(g: &CoGraph) -> ComponentInfo {
    let mut sizes: Vec<usize> = components(g).iter().map(Vec::len).collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));

    ComponentInfo {
        count: sizes.len(),
        sizes,
    }
}

/// Members of the largest component; empty for an empty graph.
///
/// Size ties resolve to the same component every run (discovery order is
/// fixed by node indices).
#[must_use]
pub fn largest_component(g: &CoGraph) -> Vec<NodeIndex> {
    components(g)
        .into_iter()
        .max_by_key(Vec::len)
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Diameter and radius.
//!
//! Eccentricity of a node is its greatest shortest-path distance to any
//! other node; the diameter and radius are the extrema over a connected
//! scope. A disconnected graph has no finite eccentricities, so the scope
//! shrinks to the largest component — the standard degradation for this
//! metric family. Scopes of one node or fewer report zeros.

use anyhow::{Result, bail};
use petgraph::graph::NodeIndex;
use tracing::instrument;

use crate::build::CoGraph;
use crate::metrics::basic::{components, largest_component};

/// Eccentricity extrema of the measured scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Eccentricity {
    pub diameter: usize,
    pub radius: usize,
}

/// Compute diameter and radius.
///
/// The scope is the whole graph when it is connected, otherwise the
/// largest component. One BFS per scope node.
///
/// # Errors
///
/// Returns an error if a scope member turns out unreachable from another —
/// that means the component partition is inconsistent and the values would
/// be meaningless.
#[instrument(skip(g))]
pub fn diameter_radius(g: &CoGraph) -> Result<Eccentricity> {
    let mut parts = components(g);
    let scope: Vec<NodeIndex> = if parts.len() <= 1 {
        parts.pop().unwrap_or_default()
    } else {
        largest_component(g)
    };

    if scope.len() <= 1 {
        return Ok(Eccentricity::default());
    }

    let mut diameter = 0_usize;
    let mut radius = usize::MAX;
    for &v in &scope {
        let ecc = eccentricity_of(g, v, scope.len())?;
        diameter = diameter.max(ecc);
        radius = radius.min(ecc);
    }

    Ok(Eccentricity { diameter, radius })
}

/// BFS eccentricity of `v` within a component of `expected` nodes.
fn eccentricity_of(g: &CoGraph, v: NodeIndex, expected: usize) -> Result<usize> {
    let mut dist = vec![usize::MAX; g.node_count()];
    dist[v.index()] = 0;

    let mut reached = 1_usize;
    let mut ecc = 0_usize;
    let mut queue = std::collections::VecDeque::from([v]);

    while let Some(node) = queue.pop_front() {
        let d = dist[node.index()];
        ecc = ecc.max(d);

        for neighbor in g.graph.neighbors(node) {
            if dist[neighbor.index()] == usize::MAX {
                dist[neighbor.index()] = d + 1;
                reached += 1;
                queue.push_back(neighbor);
            }
        }
    }

    if reached != expected {
        bail!("component member unreachable: reached {reached} of {expected} nodes");
    }
    Ok(ecc)
}

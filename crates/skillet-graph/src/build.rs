//! Co-occurrence graph construction.
//!
//! # Overview
//!
//! Two recipes are connected when they share at least one ingredient. For
//! every ingredient held by `k ≥ 2` recipes the builder proposes all
//! `C(k,2)` candidate pairs; [`PairKey`] collapses repeated proposals so at
//! most one edge materializes per unordered pair, and a pair of identical
//! endpoints never keys at all. Candidate generation cost is `Σ C(kᵢ,2)`
//! over ingredients — one very common ingredient dominates runtime, which
//! is inherent to the construction; deduplication bounds the edge *set*,
//! not the proposal count.
//!
//! ## Edge identity
//!
//! A [`PairKey`] is the identifier pair itself in sorted order. Any two
//! distinct pairs map to distinct keys for every identifier domain — there
//! is no composite-hash shortcut to collide.
//!
//! ## Content hash
//!
//! The graph carries a BLAKE3 hash of the sorted edge set. Callers can
//! compare it against a stored value to detect whether a corpus change
//! actually moved the graph.

#![allow(clippy::module_name_repetitions)]

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use tracing::{debug, instrument, warn};

use skillet_core::model::RecipeRecord;

use crate::index::IngredientIndex;

// ---------------------------------------------------------------------------
// PairKey
// ---------------------------------------------------------------------------

/// Canonical, order-independent key for an unordered pair of distinct
/// recipe identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    lo: String,
    hi: String,
}

impl PairKey {
    /// Build the key for `{a, b}`. Returns `None` when the endpoints are
    /// identical — a recipe never pairs with itself.
    #[must_use]
    pub fn new(a: &str, b: &str) -> Option<Self> {
        match a.cmp(b) {
            Ordering::Less => Some(Self {
                lo: a.to_owned(),
                hi: b.to_owned(),
            }),
            Ordering::Greater => Some(Self {
                lo: b.to_owned(),
                hi: a.to_owned(),
            }),
            Ordering::Equal => None,
        }
    }

    /// The pair endpoints, sorted.
    #[must_use]
    pub fn endpoints(&self) -> (&str, &str) {
        (&self.lo, &self.hi)
    }
}

// ---------------------------------------------------------------------------
// CoGraph
// ---------------------------------------------------------------------------

/// Node payload: the recipe's identity and display title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeNode {
    pub id: String,
    pub title: String,
}

/// The undirected recipe co-occurrence graph.
///
/// Static once built: construction is the only writer, and every statistic
/// afterwards reads without mutation.
#[derive(Debug)]
pub struct CoGraph {
    /// Undirected graph: nodes = recipes, edges = shared-ingredient links.
    pub graph: UnGraph<RecipeNode, ()>,
    /// Mapping from recipe id to petgraph `NodeIndex`.
    pub node_map: HashMap<String, NodeIndex>,
    /// BLAKE3 content hash of the sorted edge set.
    pub content_hash: String,
}

impl CoGraph {
    /// Build the graph from the corpus and its ingredient index.
    ///
    /// Every record becomes a node, including recipes that share nothing;
    /// duplicate identifiers keep their first occurrence. Edges come from
    /// [`IngredientIndex::shared`] entries, one per distinct pair.
    #[must_use]
    #[instrument(skip(records, index), fields(recipes = records.len()))]
    pub fn build(records: &[RecipeRecord], index: &IngredientIndex) -> Self {
        let mut graph = UnGraph::<RecipeNode, ()>::new_undirected();
        let mut node_map: HashMap<String, NodeIndex> = HashMap::with_capacity(records.len());

        for record in records {
            if node_map.contains_key(&record.id) {
                warn!(id = %record.id, "duplicate recipe identifier, keeping first occurrence");
                continue;
            }
            let idx = graph.add_node(RecipeNode {
                id: record.id.clone(),
                title: record.title.clone(),
            });
            node_map.insert(record.id.clone(), idx);
        }

        let mut seen: HashSet<PairKey> = HashSet::new();
        for (ingredient, recipes) in index.shared() {
            for (i, a) in recipes.iter().enumerate() {
                for b in &recipes[i + 1..] {
                    let Some(key) = PairKey::new(a, b) else {
                        continue;
                    };
                    if !seen.insert(key) {
                        continue;
                    }
                    match (node_map.get(a), node_map.get(b)) {
                        (Some(&ia), Some(&ib)) => {
                            graph.add_edge(ia, ib, ());
                        }
                        _ => warn!(ingredient, a, b, "edge endpoint missing from node set"),
                    }
                }
            }
        }

        let content_hash = compute_edge_hash(&graph);
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "co-occurrence graph built"
        );

        Self {
            graph,
            node_map,
            content_hash,
        }
    }

    /// Number of recipe nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of co-occurrence edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Look up the `NodeIndex` for a recipe id.
    #[must_use]
    pub fn node_index(&self, recipe_id: &str) -> Option<NodeIndex> {
        self.node_map.get(recipe_id).copied()
    }

    /// The recipe payload for a node.
    #[must_use]
    pub fn recipe(&self, idx: NodeIndex) -> Option<&RecipeNode> {
        self.graph.node_weight(idx)
    }

    /// `true` when the two recipes are directly connected.
    #[must_use]
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        match (self.node_index(a), self.node_index(b)) {
            (Some(ia), Some(ib)) => self.graph.find_edge(ia, ib).is_some(),
            _ => false,
        }
    }

    /// Node indices in identifier-sorted order.
    ///
    /// This is the stable ordering every sampled statistic draws from;
    /// container iteration order never leaks into results.
    #[must_use]
    pub fn nodes_sorted_by_id(&self) -> Vec<NodeIndex> {
        let mut entries: Vec<(&String, NodeIndex)> =
            self.node_map.iter().map(|(id, &idx)| (id, idx)).collect();
        entries.sort();
        entries.into_iter().map(|(_, idx)| idx).collect()
    }
}

/// Hash the sorted edge set.
fn compute_edge_hash(graph: &UnGraph<RecipeNode, ()>) -> String {
    let mut pairs: Vec<(&str, &str)> = graph
        .edge_references()
        .filter_map(|edge| {
            let a = graph.node_weight(edge.source())?;
            let b = graph.node_weight(edge.target())?;
            Some(if a.id <= b.id {
                (a.id.as_str(), b.id.as_str())
            } else {
                (b.id.as_str(), a.id.as_str())
            })
        })
        .collect();
    pairs.sort_unstable();

    let mut hasher = blake3::Hasher::new();
    for (lo, hi) in &pairs {
        hasher.update(lo.as_bytes());
        hasher.update(b"\x00");
        hasher.update(hi.as_bytes());
        hasher.update(b"\x00");
    }
    format!("blake3:{}", hasher.finalize())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use skillet_core::model::RecipeRecord;

    fn corpus(rows: &[(&str, &str)]) -> Vec<RecipeRecord> {
        rows.iter()
            .map(|(id, ingredients)| RecipeRecord::new(*id, format!("Recipe {id}"), *ingredients))
            .collect()
    }

    fn build(rows: &[(&str, &str)]) -> CoGraph {
        let records = corpus(rows);
        let index = IngredientIndex::from_records(&records);
        CoGraph::build(&records, &index)
    }

    #[test]
    fn pair_key_is_order_independent() {
        assert_eq!(PairKey::new("a", "b"), PairKey::new("b", "a"));
        let key = PairKey::new("r9", "r10").expect("distinct pair");
        assert_eq!(key.endpoints(), ("r10", "r9"));
    }

    #[test]
    fn pair_key_rejects_identical_endpoints() {
        assert!(PairKey::new("r1", "r1").is_none());
    }

    #[test]
    fn empty_corpus_empty_graph() {
        let graph = build(&[]);
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.content_hash.starts_with("blake3:"));
    }

    #[test]
    fn shared_ingredient_scenario() {
        // r1 and r2 share milk; r3 is isolated.
        let graph = build(&[
            ("r1", "['eggs', 'milk']"),
            ("r2", "['milk', 'flour']"),
            ("r3", "['sugar']"),
        ]);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.has_edge("r1", "r2"));
        assert!(!graph.has_edge("r1", "r3"));
        assert!(!graph.has_edge("r2", "r3"));
    }

    #[test]
    fn multiple_shared_ingredients_one_edge() {
        let graph = build(&[
            ("r1", "['eggs', 'milk', 'flour']"),
            ("r2", "['eggs', 'milk', 'flour']"),
        ]);

        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn no_self_loops() {
        // 'salt' listed twice in one recipe must not self-pair.
        let graph = build(&[("r1", "['salt', 'salt']"), ("r2", "['salt']")]);

        assert_eq!(graph.edge_count(), 1);
        let idx = graph.node_index("r1").expect("node r1");
        assert!(graph.graph.find_edge(idx, idx).is_none());
    }

    #[test]
    fn isolated_recipes_are_still_nodes() {
        let graph = build(&[("r1", "['a']"), ("r2", "['b']"), ("r3", "[]")]);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.node_index("r3").is_some());
    }

    #[test]
    fn duplicate_identifiers_keep_first_occurrence() {
        let graph = build(&[("r1", "['a']"), ("r1", "['b']"), ("r2", "['a']")]);

        assert_eq!(graph.node_count(), 2);
        let idx = graph.node_index("r1").expect("node r1");
        assert_eq!(graph.recipe(idx).map(|r| r.title.as_str()), Some("Recipe r1"));
    }

    #[test]
    fn content_hash_tracks_edge_set() {
        let disconnected = build(&[("r1", "['a']"), ("r2", "['b']")]);
        let connected = build(&[("r1", "['a']"), ("r2", "['a']")]);

        assert_ne!(disconnected.content_hash, connected.content_hash);

        let connected_again = build(&[("r1", "['a']"), ("r2", "['a']")]);
        assert_eq!(connected.content_hash, connected_again.content_hash);
    }

    #[test]
    fn common_ingredient_produces_all_pairs() {
        // 100 recipes sharing one ingredient: C(100,2) = 4950 edges.
        let rows: Vec<(String, String)> = (0..100)
            .map(|i| (format!("r{i:03}"), "['water']".to_owned()))
            .collect();
        let records: Vec<RecipeRecord> = rows
            .iter()
            .map(|(id, ing)| RecipeRecord::new(id.clone(), id.clone(), ing.clone()))
            .collect();
        let index = IngredientIndex::from_records(&records);
        let graph = CoGraph::build(&records, &index);

        assert_eq!(graph.node_count(), 100);
        assert_eq!(graph.edge_count(), 4950);
    }

    #[test]
    fn nodes_sorted_by_id_is_stable() {
        let graph = build(&[("b", "['x']"), ("a", "['y']"), ("c", "['z']")]);
        let ids: Vec<&str> = graph
            .nodes_sorted_by_id()
            .into_iter()
            .filter_map(|idx| graph.recipe(idx).map(|r| r.id.as_str()))
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}

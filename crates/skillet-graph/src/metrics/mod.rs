//! Topology metrics for the co-occurrence graph.
//!
//! # Overview
//!
//! Each submodule answers a different structural question:
//!
//! - **basic**: exact degree metrics, density, and connected components.
//! - **clustering**: how clique-like are node neighborhoods? Sampled.
//! - **betweenness**: which recipes bridge otherwise distant regions?
//!   Approximated from a seeded sample of Brandes source nodes.
//! - **eccentricity**: diameter and radius, restricted to the largest
//!   component when the graph is disconnected.
//!
//! All metrics operate on a fully built, immutable [`crate::build::CoGraph`]
//! and take their bounds from explicit arguments rather than ambient
//! configuration. Sampled metrics draw from
//! [`crate::build::CoGraph::nodes_sorted_by_id`], never from incidental
//! container order.

pub mod basic;
pub mod betweenness;
pub mod clustering;
pub mod eccentricity;

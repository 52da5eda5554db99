//! Closeness centrality with the Wasserman–Faust correction
//!
//! ```text
//! C(v) = (r - 1) / Σ d(v, u)  ×  (r - 1) / (n - 1)
//! ```
//!
//! where r counts the nodes reachable from v (v included). On a connected
//! graph the second factor is 1. It shrinks scores in small components so a
//! pair of mutually connected nodes does not report a perfect 1.0.

use rayon::prelude::*;
use log;
use crate::centrality::paths::{single_source, ShortestPaths};
use crate::centrality::CentralityResult;
use crate::graph::CompressedGraph;

/// Closeness of the BFS source given `node_count` nodes in the whole graph
pub fn closeness_from_paths(paths: &ShortestPaths, node_count: usize) -> f64 {
    let reached = paths.reached_count();
    let total = paths.distance_sum();
    if reached <= 1 || total == 0 {
        return 0.0;
    }

    let others = (reached - 1) as f64;
    let closeness = others / total as f64;
    if node_count > 1 {
        closeness * others / (node_count - 1) as f64
    } else {
        closeness
    }
}

/// Compute closeness centrality for every node
pub fn closeness_centrality(graph: &CompressedGraph) -> CentralityResult {
    let n = graph.node_count();
    log::info!("Computing closeness centrality over {} nodes", n);

    let scores: Vec<f64> = (0..n as u32)
        .into_par_iter()
        .map(|source| closeness_from_paths(&single_source(graph, source), n))
        .collect();

    CentralityResult::from_scores(scores)
}

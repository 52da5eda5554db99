//! Degree centrality

use crate::centrality::CentralityResult;
use crate::graph::CompressedGraph;

/// Degree divided by the maximum possible degree `n - 1` (0 when n ≤ 1)
pub fn degree_centrality(graph: &CompressedGraph) -> CentralityResult {
    let n = graph.node_count();
    let scale = if n > 1 { 1.0 / (n - 1) as f64 } else { 0.0 };

    let scores = (0..n).map(|v| graph.degree(v) as f64 * scale).collect();
    CentralityResult::from_scores(scores)
}

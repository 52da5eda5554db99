//! Betweenness centrality (Brandes dependency accumulation)
//!
//! For each source s a BFS yields σ(s, ·) and the predecessor lists. Walking
//! the reached nodes farthest-first, each node w passes
//! `σ(s,v) / σ(s,w) · (1 + δ(s,w))` to every predecessor v. The source never
//! receives credit. Every unordered pair is seen from both endpoints, so the
//! totals are halved at the end.

use rayon::prelude::*;
use log;
use crate::centrality::paths::{single_source, ShortestPaths};
use crate::centrality::CentralityResult;
use crate::graph::CompressedGraph;

/// Add the dependencies of one source to `totals`
pub fn accumulate(paths: &ShortestPaths, totals: &mut [f64]) {
    let mut delta = vec![0.0f64; totals.len()];
    let source = paths.source();

    for &w in paths.order().iter().rev() {
        let w_idx = w as usize;
        let coeff = (1.0 + delta[w_idx]) / paths.path_count(w);
        for &v in paths.predecessors(w) {
            delta[v as usize] += paths.path_count(v) * coeff;
        }
        if w != source {
            totals[w_idx] += delta[w_idx];
        }
    }
}

/// Convert per-source accumulations into final scores.
///
/// Raw totals are halved for the undirected double count. In normalized mode
/// the halved score is divided by the number of unordered pairs excluding
/// the node, (n-1)(n-2)/2, which keeps scores in [0, 1].
pub fn finalize(mut totals: Vec<f64>, normalized: bool) -> CentralityResult {
    let n = totals.len();
    let scale = if normalized && n > 2 {
        1.0 / ((n - 1) as f64 * (n - 2) as f64)
    } else {
        0.5
    };
    for total in &mut totals {
        *total *= scale;
    }
    CentralityResult::from_scores(totals)
}

pub(crate) fn merge(mut a: Vec<f64>, b: Vec<f64>) -> Vec<f64> {
    for (x, y) in a.iter_mut().zip(b) {
        *x += y;
    }
    a
}

/// Compute betweenness centrality for every node.
///
/// Scores are unnormalized by default; `normalized` rescales them into [0, 1].
pub fn betweenness_centrality(graph: &CompressedGraph, normalized: bool) -> CentralityResult {
    let n = graph.node_count();
    log::info!("Computing betweenness centrality over {} nodes", n);

    let totals = (0..n as u32)
        .into_par_iter()
        .fold(
            || vec![0.0f64; n],
            |mut acc, source| {
                let paths = single_source(graph, source);
                accumulate(&paths, &mut acc);
                acc
            },
        )
        .reduce(|| vec![0.0f64; n], merge);

    finalize(totals, normalized)
}

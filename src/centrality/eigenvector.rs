//! Eigenvector centrality by power iteration
//!
//! Each connected component is solved on its own. The iteration multiplies by
//! `A + I` rather than `A`: both share eigenvectors, but the shift makes the
//! dominant eigenvalue strictly largest in magnitude, so bipartite components
//! (paths, even cycles, projections of stars) converge instead of oscillating.
//! Every iterate stays positive and is scaled to unit L2 norm.
//!
//! Scores are only comparable within a component: each component's vector has
//! unit norm independently. Isolated nodes score 0.

use ndarray::Array1;
use rayon::prelude::*;
use log;
use crate::centrality::CentralityResult;
use crate::error::{AnalysisError, AnalysisResult};
use crate::graph::{connected_components, CompressedGraph};

/// Compute eigenvector centrality for every node.
///
/// Iteration on a component stops once the L1 change between successive
/// vectors falls below `tolerance × component size`. Exceeding
/// `max_iterations` on any component fails the whole computation.
pub fn eigenvector_centrality(
    graph: &CompressedGraph,
    max_iterations: usize,
    tolerance: f64,
) -> AnalysisResult<CentralityResult> {
    let n = graph.node_count();
    log::info!("Computing eigenvector centrality over {} nodes", n);

    let mut scores = vec![0.0f64; n];
    let mut local_index = vec![u32::MAX; n];

    for members in connected_components(graph) {
        if members.len() < 2 {
            continue;
        }
        for (i, &v) in members.iter().enumerate() {
            local_index[v as usize] = i as u32;
        }

        let (vector, iterations) =
            power_iteration(graph, &members, &local_index, max_iterations, tolerance)?;
        log::debug!(
            "Eigenvector component of {} nodes converged in {} iterations",
            members.len(),
            iterations
        );

        for (&v, &score) in members.iter().zip(vector.iter()) {
            scores[v as usize] = score;
        }
    }

    Ok(CentralityResult::from_scores(scores))
}

fn power_iteration(
    graph: &CompressedGraph,
    members: &[u32],
    local_index: &[u32],
    max_iterations: usize,
    tolerance: f64,
) -> AnalysisResult<(Array1<f64>, usize)> {
    let size = members.len();
    let threshold = tolerance * size as f64;
    let mut x = Array1::from_elem(size, 1.0 / size as f64);
    let mut residual = f64::INFINITY;

    for iteration in 1..=max_iterations {
        let next: Vec<f64> = members
            .par_iter()
            .map(|&v| {
                let own = x[local_index[v as usize] as usize];
                own + graph
                    .neighbors(v as usize)
                    .iter()
                    .map(|&u| x[local_index[u as usize] as usize])
                    .sum::<f64>()
            })
            .collect();
        let mut next = Array1::from_vec(next);

        // Positive iterate on a non-empty component, so the norm is positive
        let norm = next.dot(&next).sqrt();
        next.mapv_inplace(|value| value / norm);

        residual = (&next - &x).mapv(f64::abs).sum();
        x = next;

        if residual < threshold {
            return Ok((x, iteration));
        }
    }

    log::warn!(
        "Eigenvector iteration stalled after {} iterations (L1 change {:e})",
        max_iterations,
        residual
    );
    Err(AnalysisError::Convergence {
        iterations: max_iterations,
        residual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn complete(n: usize) -> CompressedGraph {
        let mut builder = GraphBuilder::new();
        for a in 0..n {
            for b in (a + 1)..n {
                builder.add_edge(&a.to_string(), &b.to_string()).unwrap();
            }
        }
        builder.build()
    }

    #[test]
    fn complete_graph_is_uniform() {
        for n in [3, 5, 8] {
            let scores = eigenvector_centrality(&complete(n), 100, 1e-6).unwrap();
            let expected = 1.0 / (n as f64).sqrt();
            for &score in scores.scores() {
                assert!((score - expected).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn star_hub_scores_highest() {
        let mut builder = GraphBuilder::new();
        for leaf in ["a", "b", "c", "d"] {
            builder.add_edge("hub", leaf).unwrap();
        }
        let graph = builder.build();
        let scores = eigenvector_centrality(&graph, 100, 1e-6).unwrap();

        let hub = scores.scores()[0];
        let norm: f64 = scores.scores().iter().map(|s| s * s).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9);
        // Star K_{1,4}: hub = 1/√2, leaves = 1/(2√2)
        assert!((hub - 1.0 / 2f64.sqrt()).abs() < 1e-4);
        for &leaf in &scores.scores()[1..] {
            assert!(leaf < hub);
            assert!((leaf - 1.0 / (2.0 * 2f64.sqrt())).abs() < 1e-4);
        }
    }

    #[test]
    fn path_graph_converges_without_oscillation() {
        let mut builder = GraphBuilder::new();
        for (a, b) in [("0", "1"), ("1", "2"), ("2", "3"), ("3", "4")] {
            builder.add_edge(a, b).unwrap();
        }
        let scores = eigenvector_centrality(&builder.build(), 100, 1e-6).unwrap();
        let s = scores.scores();

        assert!(s[2] > s[1] && s[1] > s[0]);
        assert!((s[1] - s[3]).abs() < 1e-5);
        assert!((s[0] - s[4]).abs() < 1e-5);
    }

    #[test]
    fn components_are_normalized_independently() {
        let mut builder = GraphBuilder::new();
        builder.get_or_create_node("alone");
        builder.add_edge("a", "b").unwrap();
        builder.add_edge("c", "d").unwrap();
        builder.add_edge("d", "e").unwrap();
        builder.add_edge("e", "c").unwrap();
        let scores = eigenvector_centrality(&builder.build(), 100, 1e-6).unwrap();
        let s = scores.scores();

        assert_eq!(s[0], 0.0);
        assert!((s[1] - 1.0 / 2f64.sqrt()).abs() < 1e-6);
        assert!((s[3] - 1.0 / 3f64.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn iteration_budget_is_enforced() {
        let mut builder = GraphBuilder::new();
        for (a, b) in [("0", "1"), ("1", "2"), ("2", "3"), ("3", "4")] {
            builder.add_edge(a, b).unwrap();
        }
        let result = eigenvector_centrality(&builder.build(), 2, 1e-12);
        assert!(matches!(
            result,
            Err(AnalysisError::Convergence { iterations: 2, .. })
        ));
    }

    #[test]
    fn empty_graph_is_empty() {
        let scores = eigenvector_centrality(&GraphBuilder::new().build(), 100, 1e-6).unwrap();
        assert!(scores.is_empty());
    }
}

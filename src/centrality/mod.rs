//! Centrality measures over the projected co-affiliation graph
//!
//! Every calculator borrows the graph immutably and returns a fresh result
//! indexed by node. `analyze` runs all of them, sharing one BFS per source
//! between betweenness and closeness.

pub mod paths;
pub mod betweenness;
pub mod closeness;
pub mod eigenvector;
pub mod clustering;
pub mod degree;

use std::collections::HashMap;
use rayon::prelude::*;
use serde::Serialize;
use log;

use crate::config::Config;
use crate::error::AnalysisResult;
use crate::graph::{connected_components, CompressedGraph};

pub use betweenness::betweenness_centrality;
pub use closeness::closeness_centrality;
pub use clustering::{clustering, ClusteringResult};
pub use degree::degree_centrality;
pub use eigenvector::eigenvector_centrality;
pub use paths::{single_source, ShortestPaths};

/// Score per node for one measure, indexed by node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CentralityResult {
    scores: Vec<f64>,
}

impl CentralityResult {
    pub fn from_scores(scores: Vec<f64>) -> Self {
        Self { scores }
    }

    pub fn get(&self, node: u32) -> Option<f64> {
        self.scores.get(node as usize).copied()
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.scores.iter().enumerate().map(|(i, &s)| (i as u32, s))
    }

    /// Scores keyed by the graph's node identifiers
    pub fn by_id<'g>(&self, graph: &'g CompressedGraph) -> HashMap<&'g str, f64> {
        self.iter()
            .map(|(node, score)| (graph.node_id(node as usize), score))
            .collect()
    }

    /// All nodes, highest score first; ties keep node order
    pub fn ranked(&self) -> Vec<(u32, f64)> {
        let mut ranked: Vec<(u32, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked
    }

    /// The `k` highest-scoring nodes
    pub fn top(&self, k: usize) -> Vec<(u32, f64)> {
        let mut ranked = self.ranked();
        ranked.truncate(k);
        ranked
    }
}

/// Every measure computed over one graph
#[derive(Debug, Clone, Serialize)]
pub struct CentralityReport {
    pub degree: CentralityResult,
    pub betweenness: CentralityResult,
    pub closeness: CentralityResult,
    pub eigenvector: CentralityResult,
    pub clustering: ClusteringResult,
    pub component_count: usize,
}

/// Run every calculator over `graph`.
///
/// One BFS per source feeds both the betweenness dependency accumulation and
/// the closeness distance sum. Fails only if the eigenvector iteration does
/// not converge.
pub fn analyze(graph: &CompressedGraph, config: &Config) -> AnalysisResult<CentralityReport> {
    let n = graph.node_count();
    log::info!(
        "Analyzing graph with {} nodes and {} edges",
        n,
        graph.edge_count()
    );

    let component_count = connected_components(graph).len();
    if component_count > 1 {
        log::info!(
            "Graph has {} connected components; closeness is scaled by reach and eigenvector scores are per component",
            component_count
        );
    }

    let degree = degree_centrality(graph);

    log::info!("Running shortest-path pass for betweenness and closeness");
    let (totals, closeness_pairs) = (0..n as u32)
        .into_par_iter()
        .fold(
            || (vec![0.0f64; n], Vec::<(u32, f64)>::new()),
            |(mut totals, mut reach), source| {
                let paths = single_source(graph, source);
                betweenness::accumulate(&paths, &mut totals);
                reach.push((source, closeness::closeness_from_paths(&paths, n)));
                (totals, reach)
            },
        )
        .reduce(
            || (vec![0.0f64; n], Vec::<(u32, f64)>::new()),
            |(a_totals, mut a_reach), (b_totals, b_reach)| {
                a_reach.extend(b_reach);
                (betweenness::merge(a_totals, b_totals), a_reach)
            },
        );

    let betweenness = betweenness::finalize(totals, config.normalize_betweenness);
    let mut closeness_scores = vec![0.0f64; n];
    for (source, score) in closeness_pairs {
        closeness_scores[source as usize] = score;
    }
    let closeness = CentralityResult::from_scores(closeness_scores);

    let eigenvector =
        eigenvector_centrality(graph, config.eigen_max_iterations, config.eigen_tolerance)?;
    let clustering = clustering(graph);

    log::info!(
        "Analysis complete: {} triangles, average clustering {:.4}",
        clustering.total_triangles(),
        clustering.average_coefficient()
    );

    Ok(CentralityReport {
        degree,
        betweenness,
        closeness,
        eigenvector,
        clustering,
        component_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn path(n: usize) -> CompressedGraph {
        let mut builder = GraphBuilder::new();
        for i in 1..n {
            builder.add_edge(&(i - 1).to_string(), &i.to_string()).unwrap();
        }
        builder.build()
    }

    #[test]
    fn ranking_orders_by_score_then_node() {
        let result = CentralityResult::from_scores(vec![0.5, 2.0, 0.5, 1.0]);
        assert_eq!(
            result.ranked(),
            vec![(1, 2.0), (3, 1.0), (0, 0.5), (2, 0.5)]
        );
        assert_eq!(result.top(2), vec![(1, 2.0), (3, 1.0)]);
        assert_eq!(result.top(10).len(), 4);
    }

    #[test]
    fn by_id_uses_node_identifiers() {
        let graph = path(3);
        let scores = betweenness_centrality(&graph, false).by_id(&graph);
        assert_eq!(scores["1"], 1.0);
        assert_eq!(scores["0"], 0.0);
    }

    #[test]
    fn combined_pass_matches_individual_calculators() {
        let mut builder = GraphBuilder::new();
        for (a, b) in [("a", "b"), ("b", "c"), ("c", "a"), ("c", "d"), ("d", "e"), ("f", "g")] {
            builder.add_edge(a, b).unwrap();
        }
        builder.get_or_create_node("h");
        let graph = builder.build();
        let config = Config::default();
        let report = analyze(&graph, &config).unwrap();

        let betweenness = betweenness_centrality(&graph, false);
        let closeness = closeness_centrality(&graph);
        for v in 0..graph.node_count() as u32 {
            let diff_b = report.betweenness.get(v).unwrap() - betweenness.get(v).unwrap();
            let diff_c = report.closeness.get(v).unwrap() - closeness.get(v).unwrap();
            assert!(diff_b.abs() < 1e-9);
            assert!(diff_c.abs() < 1e-9);
        }
        assert_eq!(report.component_count, 3);
        assert_eq!(report.clustering.total_triangles(), 1);
        assert_eq!(report.degree.len(), 8);
    }

    #[test]
    fn empty_graph_produces_empty_report() {
        let graph = GraphBuilder::new().build();
        let report = analyze(&graph, &Config::default()).unwrap();
        assert!(report.betweenness.is_empty());
        assert!(report.closeness.is_empty());
        assert!(report.eigenvector.is_empty());
        assert!(report.clustering.is_empty());
        assert_eq!(report.component_count, 0);
    }
}

//! Triangle counts and local clustering coefficients

use rayon::prelude::*;
use serde::Serialize;
use log;
use crate::graph::CompressedGraph;

/// Per-node triangle counts and local clustering coefficients
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusteringResult {
    triangles: Vec<u64>,
    coefficients: Vec<f64>,
}

impl ClusteringResult {
    /// Triangles incident to a node
    pub fn triangles(&self, node: u32) -> Option<u64> {
        self.triangles.get(node as usize).copied()
    }

    /// Local clustering coefficient of a node
    pub fn coefficient(&self, node: u32) -> Option<f64> {
        self.coefficients.get(node as usize).copied()
    }

    pub fn triangle_counts(&self) -> &[u64] {
        &self.triangles
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Number of distinct triangles in the graph
    pub fn total_triangles(&self) -> u64 {
        self.triangles.iter().sum::<u64>() / 3
    }

    /// Mean local coefficient over all nodes, zeros included
    pub fn average_coefficient(&self) -> f64 {
        if self.coefficients.is_empty() {
            return 0.0;
        }
        self.coefficients.iter().sum::<f64>() / self.coefficients.len() as f64
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

/// Count triangles per node and derive `2·t / (d·(d-1))`, 0 when degree < 2.
///
/// Neighbors of v are stamped into a marker array so that closing an edge
/// u–w is a constant-time lookup. Each triangle at v is found once via its
/// ordered pair u < w.
pub fn clustering(graph: &CompressedGraph) -> ClusteringResult {
    let n = graph.node_count();
    log::info!("Counting triangles over {} nodes", n);

    let triangles: Vec<u64> = (0..n)
        .into_par_iter()
        .map_init(
            || vec![u32::MAX; n],
            |mark, v| {
                let stamp = v as u32;
                let neighbors = graph.neighbors(v);
                for &u in neighbors {
                    mark[u as usize] = stamp;
                }

                let mut count = 0u64;
                for &u in neighbors {
                    for &w in graph.neighbors(u as usize) {
                        if w > u && mark[w as usize] == stamp {
                            count += 1;
                        }
                    }
                }
                count
            },
        )
        .collect();

    let coefficients = triangles
        .iter()
        .enumerate()
        .map(|(v, &t)| {
            let degree = graph.degree(v) as f64;
            if degree < 2.0 {
                0.0
            } else {
                2.0 * t as f64 / (degree * (degree - 1.0))
            }
        })
        .collect();

    ClusteringResult {
        triangles,
        coefficients,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    #[test]
    fn single_triangle() {
        let mut builder = GraphBuilder::new();
        builder.add_edge("a", "b").unwrap();
        builder.add_edge("b", "c").unwrap();
        builder.add_edge("c", "a").unwrap();
        let result = clustering(&builder.build());

        assert_eq!(result.triangle_counts(), &[1, 1, 1]);
        assert_eq!(result.coefficients(), &[1.0, 1.0, 1.0]);
        assert_eq!(result.total_triangles(), 1);
    }

    #[test]
    fn triangle_with_tail() {
        // 1-2-3 triangle, 1-4, 4-5
        let mut builder = GraphBuilder::new();
        for (a, b) in [("1", "2"), ("1", "3"), ("2", "3"), ("1", "4"), ("4", "5")] {
            builder.add_edge(a, b).unwrap();
        }
        let result = clustering(&builder.build());

        assert_eq!(result.triangle_counts(), &[1, 1, 1, 0, 0]);
        assert!((result.coefficient(0).unwrap() - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(result.coefficient(1), Some(1.0));
        assert_eq!(result.coefficient(3), Some(0.0));
        assert_eq!(result.coefficient(4), Some(0.0));
        assert!((result.average_coefficient() - (1.0 / 3.0 + 2.0) / 5.0).abs() < 1e-12);
    }

    #[test]
    fn low_degree_nodes_are_zero_not_nan() {
        let mut builder = GraphBuilder::new();
        builder.get_or_create_node("alone");
        builder.add_edge("a", "b").unwrap();
        let result = clustering(&builder.build());

        assert!(result.coefficients().iter().all(|c| *c == 0.0));
        assert_eq!(result.triangles(7), None);
    }

    #[test]
    fn complete_graph_counts() {
        let mut builder = GraphBuilder::new();
        for a in 0..5 {
            for b in (a + 1)..5 {
                builder.add_edge(&a.to_string(), &b.to_string()).unwrap();
            }
        }
        let result = clustering(&builder.build());

        // each node of K5 sits in C(4,2) = 6 triangles
        assert!(result.triangle_counts().iter().all(|&t| t == 6));
        assert_eq!(result.total_triangles(), 10);
        assert!(result.coefficients().iter().all(|&c| c == 1.0));
    }
}

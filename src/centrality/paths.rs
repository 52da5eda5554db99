//! Single-source shortest paths with path counting
//!
//! Breadth-first search from one source that records, for every reached node,
//! its hop distance, the number of distinct shortest paths (σ) and its
//! immediate predecessors on those paths. Betweenness and closeness are both
//! computed from this one result.

use std::collections::VecDeque;
use crate::graph::CompressedGraph;

const UNREACHED: u32 = u32::MAX;

/// Shortest-path tree information from a single source.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: u32,
    /// Reached nodes in non-decreasing distance order (source first)
    order: Vec<u32>,
    distance: Vec<u32>,
    /// Shortest path counts; kept as f64 because counts grow exponentially
    /// in dense layered graphs
    sigma: Vec<f64>,
    predecessors: Vec<Vec<u32>>,
}

impl ShortestPaths {
    pub fn source(&self) -> u32 {
        self.source
    }

    /// Reached nodes in BFS order
    pub fn order(&self) -> &[u32] {
        &self.order
    }

    /// Hop distance from the source, `None` when unreachable
    pub fn distance(&self, target: u32) -> Option<u32> {
        match self.distance[target as usize] {
            UNREACHED => None,
            d => Some(d),
        }
    }

    /// Number of shortest paths from the source (0 when unreachable)
    pub fn path_count(&self, target: u32) -> f64 {
        self.sigma[target as usize]
    }

    /// Immediate predecessors of `target` on some shortest path
    pub fn predecessors(&self, target: u32) -> &[u32] {
        &self.predecessors[target as usize]
    }

    /// Number of reached nodes, including the source
    pub fn reached_count(&self) -> usize {
        self.order.len()
    }

    /// Sum of distances to every reached node
    pub fn distance_sum(&self) -> u64 {
        self.order
            .iter()
            .map(|&t| self.distance[t as usize] as u64)
            .sum()
    }
}

/// Run a path-counting BFS from `source`
pub fn single_source(graph: &CompressedGraph, source: u32) -> ShortestPaths {
    let n = graph.node_count();
    let mut distance = vec![UNREACHED; n];
    let mut sigma = vec![0.0f64; n];
    let mut predecessors: Vec<Vec<u32>> = vec![Vec::new(); n];
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    distance[source as usize] = 0;
    sigma[source as usize] = 1.0;
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        order.push(v);
        let next = distance[v as usize] + 1;

        for &w in graph.neighbors(v as usize) {
            let w_idx = w as usize;
            if distance[w_idx] == UNREACHED {
                distance[w_idx] = next;
                queue.push_back(w);
            }
            if distance[w_idx] == next {
                sigma[w_idx] += sigma[v as usize];
                predecessors[w_idx].push(v);
            }
        }
    }

    ShortestPaths {
        source,
        order,
        distance,
        sigma,
        predecessors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn diamond() -> CompressedGraph {
        // s - a - t
        //  \- b -/
        let mut builder = GraphBuilder::new();
        builder.add_edge("s", "a").unwrap();
        builder.add_edge("s", "b").unwrap();
        builder.add_edge("a", "t").unwrap();
        builder.add_edge("b", "t").unwrap();
        builder.get_or_create_node("far");
        builder.build()
    }

    #[test]
    fn counts_tied_shortest_paths() {
        let graph = diamond();
        let paths = single_source(&graph, 0);
        let t = graph.index_of("t").unwrap();

        assert_eq!(paths.distance(t), Some(2));
        assert_eq!(paths.path_count(t), 2.0);
        let mut preds = paths.predecessors(t).to_vec();
        preds.sort_unstable();
        assert_eq!(preds, vec![1, 2]);
        assert_eq!(paths.predecessors(0), &[] as &[u32]);
    }

    #[test]
    fn unreachable_nodes_are_omitted() {
        let graph = diamond();
        let paths = single_source(&graph, 0);
        let far = graph.index_of("far").unwrap();

        assert_eq!(paths.distance(far), None);
        assert_eq!(paths.path_count(far), 0.0);
        assert_eq!(paths.reached_count(), 4);
        assert!(!paths.order().contains(&far));
        assert_eq!(paths.distance_sum(), 1 + 1 + 2);
    }

    #[test]
    fn order_is_non_decreasing_in_distance() {
        let graph = diamond();
        let paths = single_source(&graph, 3);
        let distances: Vec<u32> = paths
            .order()
            .iter()
            .filter_map(|&v| paths.distance(v))
            .collect();
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(paths.order()[0], 3);
        assert_eq!(paths.source(), 3);
    }
}

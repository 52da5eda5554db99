//! Graph construction module

use std::collections::HashMap;
use crate::error::{AnalysisError, AnalysisResult};
use crate::graph::CompressedGraph;

/// Builder for incrementally constructing an undirected CompressedGraph
pub struct GraphBuilder {
    /// Mapping from string IDs to node indices
    id_to_index: HashMap<String, u32>,

    /// Node string IDs
    node_ids: Vec<String>,

    /// Weighted adjacency for each node (neighbor -> weight)
    adjacency: Vec<HashMap<u32, u32>>,
}

impl GraphBuilder {
    /// Create a new graph builder with the given node capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id_to_index: HashMap::with_capacity(capacity),
            node_ids: Vec::with_capacity(capacity),
            adjacency: Vec::with_capacity(capacity),
        }
    }

    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Number of nodes added so far
    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    /// Get or create a node index for the given string ID
    pub fn get_or_create_node(&mut self, id: &str) -> u32 {
        if let Some(&idx) = self.id_to_index.get(id) {
            return idx;
        }

        let idx = self.node_ids.len() as u32;
        self.id_to_index.insert(id.to_string(), idx);
        self.node_ids.push(id.to_string());
        self.adjacency.push(HashMap::new());

        idx
    }

    /// Add an undirected edge between two identifiers, creating nodes as needed.
    /// Repeated edges collapse into one and accumulate weight.
    pub fn add_edge(&mut self, a_id: &str, b_id: &str) -> AnalysisResult<()> {
        self.add_weighted_edge(a_id, b_id, 1)
    }

    pub fn add_weighted_edge(&mut self, a_id: &str, b_id: &str, weight: u32) -> AnalysisResult<()> {
        if a_id == b_id {
            return Err(AnalysisError::InvalidGraph(format!("self-loop on node {a_id}")));
        }
        let a = self.get_or_create_node(a_id);
        let b = self.get_or_create_node(b_id);
        self.link(a, b, weight);
        Ok(())
    }

    /// Add an undirected edge between existing node indices
    pub fn add_edge_by_index(&mut self, a: u32, b: u32, weight: u32) -> AnalysisResult<()> {
        let count = self.node_ids.len() as u32;
        if a >= count || b >= count {
            return Err(AnalysisError::InvalidGraph(format!(
                "edge ({a}, {b}) references an unknown node"
            )));
        }
        if a == b {
            return Err(AnalysisError::InvalidGraph(format!(
                "self-loop on node {}",
                self.node_ids[a as usize]
            )));
        }
        self.link(a, b, weight);
        Ok(())
    }

    fn link(&mut self, a: u32, b: u32, weight: u32) {
        *self.adjacency[a as usize].entry(b).or_insert(0) += weight;
        *self.adjacency[b as usize].entry(a).or_insert(0) += weight;
    }

    /// Build the compressed graph
    pub fn build(self) -> CompressedGraph {
        let half_edges: usize = self.adjacency.iter().map(|list| list.len()).sum();
        let node_count = self.node_ids.len();

        let mut graph = CompressedGraph::with_capacity(node_count, half_edges / 2);
        let mut offset = 0u32;

        for list in self.adjacency {
            let mut sorted: Vec<(u32, u32)> = list.into_iter().collect();
            // Sort for binary search efficiency
            sorted.sort_unstable_by_key(|&(neighbor, _)| neighbor);

            for (neighbor, weight) in sorted {
                graph.neighbors.push(neighbor);
                graph.weights.push(weight);
                offset += 1;
            }
            graph.offsets.push(offset);
        }

        graph.node_count = node_count;
        graph.node_ids = self.node_ids;

        graph
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_is_symmetric_and_sorted() {
        let mut builder = GraphBuilder::new();
        builder.add_edge("c", "a").unwrap();
        builder.add_edge("a", "b").unwrap();
        builder.add_edge("b", "c").unwrap();
        let graph = builder.build();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        for node in 0..3 {
            let neighbors = graph.neighbors(node);
            assert!(neighbors.windows(2).all(|w| w[0] < w[1]));
            for &other in neighbors {
                assert!(graph.has_edge(other as usize, node as u32));
            }
        }
    }

    #[test]
    fn repeated_edges_collapse_and_accumulate_weight() {
        let mut builder = GraphBuilder::new();
        builder.add_edge("a", "b").unwrap();
        builder.add_edge("b", "a").unwrap();
        builder.add_weighted_edge("a", "b", 3).unwrap();
        let graph = builder.build();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_weight(0, 1), Some(5));
        assert_eq!(graph.edge_weight(1, 0), Some(5));
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1, 5)]);
    }

    #[test]
    fn self_loops_are_rejected() {
        let mut builder = GraphBuilder::new();
        assert!(matches!(
            builder.add_edge("a", "a"),
            Err(AnalysisError::InvalidGraph(_))
        ));
        let a = builder.get_or_create_node("a");
        assert!(builder.add_edge_by_index(a, a, 1).is_err());
        assert!(builder.add_edge_by_index(a, 7, 1).is_err());
    }

    #[test]
    fn isolated_nodes_survive_build() {
        let mut builder = GraphBuilder::new();
        builder.get_or_create_node("loner");
        builder.add_edge("a", "b").unwrap();
        let graph = builder.build();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.degree(0), 0);
        assert_eq!(graph.index_of("b"), Some(2));
        assert_eq!(graph.node_id(1), "a");
    }
}

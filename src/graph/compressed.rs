//! Memory-efficient undirected graph representation

use std::mem;
use serde::{Serialize, Deserialize};

/// Compressed sparse representation of an undirected simple graph.
///
/// Every edge is stored in both endpoints' neighbor lists, and each list is
/// sorted so membership checks can binary search. Edge weights (number of
/// shared events) live in a parallel array and are ignored by the unweighted
/// centrality measures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressedGraph {
    /// Number of nodes in the graph
    pub(crate) node_count: usize,

    /// Offset array: offsets[i] to offsets[i+1] defines the neighbor range for node i
    pub(crate) offsets: Vec<u32>,

    /// Neighbor array: concatenated sorted neighbor lists
    pub(crate) neighbors: Vec<u32>,

    /// Weight of the edge stored at the same position in `neighbors`
    pub(crate) weights: Vec<u32>,

    /// Mapping from internal node indices to original identifiers
    pub(crate) node_ids: Vec<String>,
}

impl CompressedGraph {
    /// Create an empty graph with pre-allocated capacity
    pub fn with_capacity(node_count: usize, edge_count: usize) -> Self {
        Self {
            node_count: 0,
            offsets: {
                let mut offsets = Vec::with_capacity(node_count + 1);
                offsets.push(0);
                offsets
            },
            neighbors: Vec::with_capacity(edge_count * 2),
            weights: Vec::with_capacity(edge_count * 2),
            node_ids: Vec::with_capacity(node_count),
        }
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.neighbors.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    /// Sorted neighbors of a node
    pub fn neighbors(&self, node: usize) -> &[u32] {
        let start = self.offsets[node] as usize;
        let end = self.offsets[node + 1] as usize;
        &self.neighbors[start..end]
    }

    /// Edge weights aligned with `neighbors(node)`
    pub fn neighbor_weights(&self, node: usize) -> &[u32] {
        let start = self.offsets[node] as usize;
        let end = self.offsets[node + 1] as usize;
        &self.weights[start..end]
    }

    /// Check if there's an edge between `a` and `b`
    pub fn has_edge(&self, a: usize, b: u32) -> bool {
        self.neighbors(a).binary_search(&b).is_ok()
    }

    /// Weight of the edge between `a` and `b`, if present
    pub fn edge_weight(&self, a: usize, b: u32) -> Option<u32> {
        let idx = self.neighbors(a).binary_search(&b).ok()?;
        Some(self.neighbor_weights(a)[idx])
    }

    /// Degree of a node
    pub fn degree(&self, node: usize) -> usize {
        let start = self.offsets[node] as usize;
        let end = self.offsets[node + 1] as usize;
        end - start
    }

    /// Original identifier of a node
    pub fn node_id(&self, node: usize) -> &str {
        &self.node_ids[node]
    }

    pub fn node_ids(&self) -> &[String] {
        &self.node_ids
    }

    /// Internal index of an identifier (linear scan; intended for lookups, not hot loops)
    pub fn index_of(&self, id: &str) -> Option<u32> {
        self.node_ids.iter().position(|n| n == id).map(|i| i as u32)
    }

    /// Iterate every undirected edge once as (a, b, weight) with a < b
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32, u32)> + '_ {
        (0..self.node_count).flat_map(move |a| {
            self.neighbors(a)
                .iter()
                .zip(self.neighbor_weights(a))
                .filter(move |&(&b, _)| (a as u32) < b)
                .map(move |(&b, &w)| (a as u32, b, w))
        })
    }

    /// Estimate memory usage in bytes
    pub fn memory_usage(&self) -> usize {
        let base = mem::size_of::<Self>();
        let offsets = self.offsets.capacity() * mem::size_of::<u32>();
        let neighbors = self.neighbors.capacity() * mem::size_of::<u32>();
        let weights = self.weights.capacity() * mem::size_of::<u32>();
        let ids = self.node_ids.iter().map(|s| s.capacity()).sum::<usize>();

        base + offsets + neighbors + weights + ids
    }
}

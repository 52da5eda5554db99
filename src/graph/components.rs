//! Connected components via union-find

use std::collections::HashMap;
use crate::graph::CompressedGraph;

/// Union-Find data structure for connected component analysis
pub struct DisjointSets {
    /// Parent pointers (parent[i] = parent of node i)
    parent: Vec<u32>,

    /// Size of each set (for union by size)
    size: Vec<u32>,
}

impl DisjointSets {
    /// Create a new DisjointSets data structure with every node in its own set
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size as u32).collect(),
            size: vec![1; size],
        }
    }

    /// Find the root of the set containing x with path compression
    pub fn find(&mut self, x: u32) -> u32 {
        let mut root = x;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        // Path compression: point everything on the walk at the root
        let mut node = x;
        while self.parent[node as usize] != root {
            let next = self.parent[node as usize];
            self.parent[node as usize] = root;
            node = next;
        }

        root
    }

    /// Union the sets containing x and y
    pub fn union(&mut self, x: u32, y: u32) {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return;
        }

        // Attach smaller tree under root of larger tree
        if self.size[root_x as usize] >= self.size[root_y as usize] {
            self.parent[root_y as usize] = root_x;
            self.size[root_x as usize] += self.size[root_y as usize];
        } else {
            self.parent[root_x as usize] = root_y;
            self.size[root_y as usize] += self.size[root_x as usize];
        }
    }

    /// Get the size of the set containing x
    pub fn set_size(&mut self, x: u32) -> u32 {
        let root = self.find(x);
        self.size[root as usize]
    }
}

/// Partition the graph into connected components.
///
/// Members of each component are sorted; components are ordered by their
/// smallest member, so the output is deterministic.
pub fn connected_components(graph: &CompressedGraph) -> Vec<Vec<u32>> {
    let node_count = graph.node_count();
    let mut sets = DisjointSets::new(node_count);

    for (a, b, _) in graph.edges() {
        sets.union(a, b);
    }

    let mut slot_of_root: HashMap<u32, usize> = HashMap::new();
    let mut components: Vec<Vec<u32>> = Vec::new();
    for node in 0..node_count as u32 {
        let root = sets.find(node);
        let slot = *slot_of_root.entry(root).or_insert_with(|| {
            components.push(Vec::new());
            components.len() - 1
        });
        components[slot].push(node);
    }

    log::debug!("Found {} connected components", components.len());

    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    #[test]
    fn union_find_merges_sets() {
        let mut sets = DisjointSets::new(5);
        sets.union(0, 1);
        sets.union(3, 4);
        sets.union(1, 4);

        assert_eq!(sets.find(0), sets.find(3));
        assert_ne!(sets.find(0), sets.find(2));
        assert_eq!(sets.set_size(4), 4);
        assert_eq!(sets.set_size(2), 1);
    }

    #[test]
    fn components_are_deterministic() {
        let mut builder = GraphBuilder::new();
        builder.get_or_create_node("x");
        builder.add_edge("a", "b").unwrap();
        builder.add_edge("c", "d").unwrap();
        builder.add_edge("b", "c").unwrap();
        builder.add_edge("e", "f").unwrap();
        let graph = builder.build();

        let components = connected_components(&graph);
        assert_eq!(components, vec![vec![0], vec![1, 2, 3, 4], vec![5, 6]]);
    }

    #[test]
    fn empty_graph_has_no_components() {
        let graph = GraphBuilder::new().build();
        assert!(connected_components(&graph).is_empty());
    }
}

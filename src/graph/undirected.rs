//! Undirected weighted edge list.

use crate::topology::types::Link;

/// Undirected multigraph over nodes `0..n`, stored as a flat edge list
/// in insertion order. Parallel edges are retained.
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph {
    node_count: usize,
    edges: Vec<Link>,
}

impl UndirectedGraph {
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            edges: Vec::new(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn add_edge(&mut self, edge: Link) {
        self.edges.push(edge);
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> &[Link] {
        &self.edges
    }
}

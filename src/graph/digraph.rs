//! Directed weighted adjacency structure.

use crate::topology::types::{DirectedLink, NodeId};

/// Directed multigraph over nodes `0..n` with per-node adjacency lists.
///
/// Purely a container: construction appends links, queries iterate them.
/// Parallel links between the same pair of nodes are all retained.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    adjacency: Vec<Vec<DirectedLink>>,
    link_count: usize,
}

impl DirectedGraph {
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
            link_count: 0,
        }
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn link_count(&self) -> usize {
        self.link_count
    }

    /// Append one directed link. The source node must be in range.
    pub fn add_link(&mut self, link: DirectedLink) {
        self.adjacency[link.from].push(link);
        self.link_count += 1;
    }

    /// Outgoing links of `node`, in insertion order. Out-of-range ids
    /// have no adjacency.
    pub fn adjacent(&self, node: NodeId) -> &[DirectedLink] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}

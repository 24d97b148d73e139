//! Minimum-average-latency spanning backbone via Kruskal's algorithm.

use std::cmp::Ordering;

use log::debug;

use crate::network::Network;
use crate::topology::types::{BackboneEdge, Link};

/// Union-find over node ids with path halving and union by rank.
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    fn new(node_count: usize) -> Self {
        Self {
            parent: (0..node_count).collect(),
            rank: vec![0; node_count],
        }
    }

    fn find(&mut self, mut node: usize) -> usize {
        while self.parent[node] != node {
            self.parent[node] = self.parent[self.parent[node]];
            node = self.parent[node];
        }
        node
    }

    /// Merge the components of `a` and `b`; false if already merged.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (root_a, root_b) = (self.find(a), self.find(b));
        if root_a == root_b {
            return false;
        }
        match self.rank[root_a].cmp(&self.rank[root_b]) {
            Ordering::Less => self.parent[root_a] = root_b,
            Ordering::Greater => self.parent[root_b] = root_a,
            Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
        true
    }
}

/// The links Kruskal selects for the backbone, with their attributes,
/// in emission order: candidates sorted ascending by weight (stable, so
/// ties keep load order), cycles rejected through union-find. For a
/// connected n-node network this is exactly n-1 links; for a
/// disconnected one it is the minimum spanning forest.
pub fn backbone_links(network: &Network) -> Vec<Link> {
    let node_count = network.node_count();

    let mut candidates: Vec<&Link> = network.undirected().edges().iter().collect();
    candidates.sort_by(|x, y| x.weight.total_cmp(&y.weight));

    let mut components = UnionFind::new(node_count);
    let mut selected = Vec::new();
    for link in candidates {
        if node_count > 0 && selected.len() == node_count - 1 {
            break;
        }
        if components.union(link.a, link.b) {
            selected.push(*link);
        }
    }

    debug!(
        "backbone selected {} of {} candidate links",
        selected.len(),
        network.link_count()
    );
    selected
}

/// Minimum-average-latency spanning backbone as ordered, unordered-pair
/// edges, in the order Kruskal emits them.
pub fn min_latency_backbone(network: &Network) -> Vec<BackboneEdge> {
    backbone_links(network)
        .iter()
        .map(|link| BackboneEdge {
            a: link.a,
            b: link.b,
        })
        .collect()
}

//! The frozen network: dual directed/undirected views of one link set.

use log::debug;

use crate::graph::{DirectedGraph, UndirectedGraph};
use crate::latency::link_weight;
use crate::topology::types::{DirectedLink, Link, LinkRecord, Material, NodeId};

/// An immutable network topology.
///
/// Both graph views are derived from one canonical record list, so they
/// are always structural mirror images: every physical link appears as
/// two opposing directed links and one undirected edge, with matching
/// attributes and weight. Nothing mutates a `Network` after
/// construction.
#[derive(Debug, Clone)]
pub struct Network {
    node_count: usize,
    directed: DirectedGraph,
    undirected: UndirectedGraph,
    copper_only: bool,
}

impl Network {
    /// Build the dual graph views from a canonical record list.
    ///
    /// Two passes over the same records: one fills the directed view
    /// with a forward and a mirror link per record, one fills the
    /// undirected view with a single edge per record, both in record
    /// order. `copper_only` is computed from the complete record list
    /// and stored on the frozen network, never updated afterwards.
    pub fn from_records(node_count: usize, records: &[LinkRecord]) -> Self {
        let copper_only = records.iter().all(|r| r.material == Material::Copper);

        let mut directed = DirectedGraph::new(node_count);
        for record in records {
            let weight = link_weight(record.material, record.bandwidth, record.length);
            directed.add_link(DirectedLink {
                from: record.a,
                to: record.b,
                material: record.material,
                bandwidth: record.bandwidth,
                weight,
            });
            directed.add_link(DirectedLink {
                from: record.b,
                to: record.a,
                material: record.material,
                bandwidth: record.bandwidth,
                weight,
            });
        }

        let mut undirected = UndirectedGraph::new(node_count);
        for record in records {
            let weight = link_weight(record.material, record.bandwidth, record.length);
            undirected.add_edge(Link {
                a: record.a,
                b: record.b,
                material: record.material,
                bandwidth: record.bandwidth,
                weight,
            });
        }

        debug!(
            "built network: {} nodes, {} physical links, copper_only={}",
            node_count,
            records.len(),
            copper_only
        );

        Self {
            node_count,
            directed,
            undirected,
            copper_only,
        }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of physical links (each counted once).
    pub fn link_count(&self) -> usize {
        self.undirected.edge_count()
    }

    /// True iff every loaded link has material copper.
    pub fn copper_only(&self) -> bool {
        self.copper_only
    }

    pub fn directed(&self) -> &DirectedGraph {
        &self.directed
    }

    pub fn undirected(&self) -> &UndirectedGraph {
        &self.undirected
    }

    /// Outgoing directed links of `node`, in load order.
    pub fn adjacent(&self, node: NodeId) -> &[DirectedLink] {
        self.directed.adjacent(node)
    }
}

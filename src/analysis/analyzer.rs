//! One-shot analyzer over a frozen topology.

use std::path::Path;

use log::info;

use crate::network::Network;
use crate::topology::parser::{self, Topology, TopologyError};
use crate::topology::types::{BackboneEdge, NodeId};

use super::backbone;
use super::path_query::{self, PathError};
use super::resilience;
use super::shortest_path::DijkstraAllPairs;

/// Loads a topology once and answers the operational queries against
/// the frozen graph.
///
/// The shortest-path index is built eagerly at construction; since
/// nothing mutates the network afterwards it is never rebuilt. A failed
/// load returns an error and no analyzer, so a queryable analyzer
/// always holds a complete topology.
pub struct NetworkAnalyzer {
    network: Network,
    shortest_paths: DijkstraAllPairs,
}

impl NetworkAnalyzer {
    /// Load a topology file and build the analyzer.
    pub fn from_file(path: &Path) -> Result<Self, TopologyError> {
        let topology = parser::load_topology(path)?;
        Ok(Self::from_topology(&topology))
    }

    /// Build the analyzer from an already-parsed topology.
    pub fn from_topology(topology: &Topology) -> Self {
        let network = Network::from_records(topology.node_count, &topology.records);
        let shortest_paths = DijkstraAllPairs::build(network.directed());
        info!(
            "analyzer ready: {} nodes, {} links",
            network.node_count(),
            network.link_count()
        );
        Self {
            network,
            shortest_paths,
        }
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Lowest-latency route from `u` to `w`.
    pub fn lowest_latency_path(&self, u: NodeId, w: NodeId) -> Option<Vec<NodeId>> {
        path_query::lowest_latency_path(&self.network, &self.shortest_paths, u, w)
    }

    /// Bottleneck bandwidth along a caller-supplied route.
    pub fn bandwidth_along_path(&self, path: &[NodeId]) -> Result<u32, PathError> {
        path_query::bandwidth_along_path(&self.network, path)
    }

    /// Whether every node is incident to at least one copper link.
    pub fn copper_connected(&self) -> bool {
        resilience::copper_connected(&self.network)
    }

    /// Whether the network stays connected after any two node failures.
    pub fn survives_any_two_node_failures(&self) -> bool {
        resilience::survives_any_two_node_failures(&self.network)
    }

    /// Minimum-average-latency spanning backbone.
    pub fn min_latency_backbone(&self) -> Vec<BackboneEdge> {
        backbone::min_latency_backbone(&self.network)
    }
}

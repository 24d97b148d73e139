//! Copper incidence and two-node-failure connectivity checks.

use std::collections::VecDeque;

use log::debug;

use crate::network::Network;
use crate::topology::types::{Material, NodeId};

/// Whether every node is incident to at least one copper link.
///
/// Immediate for an all-copper network. Otherwise each node's outgoing
/// adjacency is scanned for one copper link, failing fast on the first
/// node without one. Note the limit of this check: it verifies per-node
/// copper *incidence* only. The copper links are not required to form a
/// connected subgraph, so a network can pass while its copper-only
/// subgraph is split into several islands.
pub fn copper_connected(network: &Network) -> bool {
    if network.copper_only() {
        return true;
    }
    (0..network.node_count()).all(|node| {
        network
            .adjacent(node)
            .iter()
            .any(|link| link.material == Material::Copper)
    })
}

/// Whether the network stays connected after the failure of any two
/// nodes.
///
/// Networks of three or fewer nodes cannot meaningfully survive two
/// failures and always report false. Every unordered node pair is
/// removed in turn and the survivors are flood-filled from the smallest
/// remaining node; the check short-circuits on the first pair whose
/// removal disconnects the rest. Quadratic in pairs times one traversal
/// each, O(n^2 * (n + e)).
pub fn survives_any_two_node_failures(network: &Network) -> bool {
    let node_count = network.node_count();
    if node_count <= 3 {
        return false;
    }

    for i in 0..node_count {
        for j in (i + 1)..node_count {
            if !survives_failure_of(network, i, j) {
                debug!("network splits when nodes {i} and {j} fail");
                return false;
            }
        }
    }
    true
}

/// Breadth-first reachability with nodes `i` and `j` removed: the pair
/// survives iff every other node is reached. Iterative with an explicit
/// frontier queue and a visited array sized to the node count, so stack
/// depth is independent of the topology.
fn survives_failure_of(network: &Network, i: NodeId, j: NodeId) -> bool {
    let node_count = network.node_count();
    let mut visited = vec![false; node_count];
    visited[i] = true;
    visited[j] = true;

    let Some(start) = (0..node_count).find(|&node| !visited[node]) else {
        return false;
    };
    visited[start] = true;

    let mut reached = 1usize;
    let mut frontier = VecDeque::new();
    frontier.push_back(start);

    while let Some(node) = frontier.pop_front() {
        for link in network.adjacent(node) {
            if !visited[link.to] {
                visited[link.to] = true;
                reached += 1;
                frontier.push_back(link.to);
            }
        }
    }

    reached + 2 == node_count
}

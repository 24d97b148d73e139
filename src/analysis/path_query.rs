//! Lowest-latency route lookup and bottleneck bandwidth along a route.

use crate::network::Network;
use crate::topology::types::NodeId;

use super::shortest_path::ShortestPaths;

/// Errors raised by path-based queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("invalid path: a route must name at least two nodes")]
    TooShort,

    #[error("invalid path: no link from node {from} to node {to}")]
    NoLink { from: NodeId, to: NodeId },
}

/// Lowest-latency route from `u` to `w`, as an ordered node sequence.
///
/// Node ids outside the network resolve to `None` rather than an error.
/// The self-route is the singleton `[u]`; any other returned route has
/// at least two nodes, every consecutive pair joined by a directed link.
pub fn lowest_latency_path<S: ShortestPaths>(
    network: &Network,
    index: &S,
    u: NodeId,
    w: NodeId,
) -> Option<Vec<NodeId>> {
    let node_count = network.node_count();
    if u >= node_count || w >= node_count {
        return None;
    }
    if u == w {
        return Some(vec![u]);
    }
    if !index.has_path(u, w) {
        return None;
    }

    let links = index.path(u, w)?;
    let mut route = Vec::with_capacity(links.len() + 1);
    if let Some(first) = links.first() {
        route.push(first.from);
    }
    for link in &links {
        route.push(link.to);
    }

    if route.len() > 1 {
        Some(route)
    } else {
        None
    }
}

/// Bottleneck bandwidth along a caller-supplied route.
///
/// The route need not be a shortest path, but every consecutive pair
/// must be joined by a directed link; with parallel links between a
/// pair, each one's bandwidth folds into the running minimum. Returns
/// the minimum bandwidth across all consecutive links.
pub fn bandwidth_along_path(network: &Network, path: &[NodeId]) -> Result<u32, PathError> {
    if path.len() < 2 {
        return Err(PathError::TooShort);
    }

    let mut bottleneck = u32::MAX;
    for pair in path.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let hop_min = network
            .adjacent(from)
            .iter()
            .filter(|link| link.to == to)
            .map(|link| link.bandwidth)
            .min()
            .ok_or(PathError::NoLink { from, to })?;
        bottleneck = bottleneck.min(hop_min);
    }
    Ok(bottleneck)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::shortest_path::DijkstraAllPairs;
    use crate::topology::types::{DirectedLink, LinkRecord, Material};

    fn record(a: NodeId, b: NodeId, material: Material, bandwidth: u32, length: f64) -> LinkRecord {
        LinkRecord {
            a,
            b,
            material,
            bandwidth,
            length,
        }
    }

    fn line_network() -> (Network, DijkstraAllPairs) {
        let records = vec![
            record(0, 1, Material::Copper, 10, 100.0),
            record(1, 2, Material::Copper, 4, 100.0),
        ];
        let network = Network::from_records(3, &records);
        let index = DijkstraAllPairs::build(network.directed());
        (network, index)
    }

    #[test]
    fn test_self_route_is_singleton() {
        let (network, index) = line_network();
        assert_eq!(lowest_latency_path(&network, &index, 1, 1), Some(vec![1]));
    }

    #[test]
    fn test_out_of_range_node_resolves_to_none() {
        let (network, index) = line_network();
        assert_eq!(lowest_latency_path(&network, &index, 0, 9), None);
        assert_eq!(lowest_latency_path(&network, &index, 9, 0), None);
        // even for the self-route
        assert_eq!(lowest_latency_path(&network, &index, 9, 9), None);
    }

    #[test]
    fn test_route_flattens_links_into_nodes() {
        let (network, index) = line_network();
        assert_eq!(
            lowest_latency_path(&network, &index, 0, 2),
            Some(vec![0, 1, 2])
        );
    }

    #[test]
    fn test_unreachable_route_is_none() {
        let records = vec![record(0, 1, Material::Copper, 10, 100.0)];
        let network = Network::from_records(3, &records);
        let index = DijkstraAllPairs::build(network.directed());
        assert_eq!(lowest_latency_path(&network, &index, 0, 2), None);
    }

    #[test]
    fn test_route_queries_work_against_a_fake_index() {
        struct FixedRoute(Vec<DirectedLink>);

        impl ShortestPaths for FixedRoute {
            fn has_path(&self, _u: NodeId, _w: NodeId) -> bool {
                true
            }
            fn path(&self, _u: NodeId, _w: NodeId) -> Option<Vec<DirectedLink>> {
                Some(self.0.clone())
            }
        }

        let (network, _) = line_network();
        let fake = FixedRoute(vec![
            DirectedLink {
                from: 2,
                to: 1,
                material: Material::Copper,
                bandwidth: 4,
                weight: 0.25,
            },
            DirectedLink {
                from: 1,
                to: 0,
                material: Material::Copper,
                bandwidth: 10,
                weight: 0.1,
            },
        ]);

        assert_eq!(
            lowest_latency_path(&network, &fake, 2, 0),
            Some(vec![2, 1, 0])
        );
    }

    #[test]
    fn test_bandwidth_of_route_is_minimum_link_bandwidth() {
        let (network, _) = line_network();
        assert_eq!(bandwidth_along_path(&network, &[0, 1, 2]), Ok(4));
        assert_eq!(bandwidth_along_path(&network, &[2, 1, 0]), Ok(4));
        assert_eq!(bandwidth_along_path(&network, &[0, 1]), Ok(10));
    }

    #[test]
    fn test_bandwidth_rejects_short_routes() {
        let (network, _) = line_network();
        assert_eq!(bandwidth_along_path(&network, &[]), Err(PathError::TooShort));
        assert_eq!(
            bandwidth_along_path(&network, &[1]),
            Err(PathError::TooShort)
        );
    }

    #[test]
    fn test_bandwidth_rejects_non_adjacent_pairs() {
        let (network, _) = line_network();
        assert_eq!(
            bandwidth_along_path(&network, &[0, 2]),
            Err(PathError::NoLink { from: 0, to: 2 })
        );
    }

    #[test]
    fn test_bandwidth_rejects_out_of_range_nodes() {
        let (network, _) = line_network();
        assert_eq!(
            bandwidth_along_path(&network, &[0, 9]),
            Err(PathError::NoLink { from: 0, to: 9 })
        );
    }

    #[test]
    fn test_parallel_links_fold_into_the_minimum() {
        let records = vec![
            record(0, 1, Material::Copper, 10, 100.0),
            record(0, 1, Material::Copper, 3, 100.0),
        ];
        let network = Network::from_records(2, &records);
        assert_eq!(bandwidth_along_path(&network, &[0, 1]), Ok(3));
    }

    #[test]
    fn test_bandwidth_accepts_non_shortest_routes() {
        // 0-1-2 plus a direct 0-2 link; the roundabout route is still a
        // valid bandwidth query.
        let records = vec![
            record(0, 1, Material::Copper, 10, 100.0),
            record(1, 2, Material::Copper, 8, 100.0),
            record(0, 2, Material::Copper, 2, 100.0),
        ];
        let network = Network::from_records(3, &records);
        assert_eq!(bandwidth_along_path(&network, &[0, 1, 2]), Ok(8));
        assert_eq!(bandwidth_along_path(&network, &[0, 2]), Ok(2));
    }
}

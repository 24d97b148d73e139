//! All-pairs shortest paths over the directed view.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;

use crate::graph::DirectedGraph;
use crate::topology::types::{DirectedLink, NodeId};

/// Shortest-path provider over the directed view.
///
/// Path queries depend only on this trait, so they can be exercised
/// against hand-built fakes independent of the real index.
pub trait ShortestPaths {
    /// Whether any directed route exists from `u` to `w`.
    fn has_path(&self, u: NodeId, w: NodeId) -> bool;

    /// The minimum-total-weight route from `u` to `w` as the ordered
    /// links traversed, or `None` when `u == w` or no route exists.
    fn path(&self, u: NodeId, w: NodeId) -> Option<Vec<DirectedLink>>;
}

/// Min-heap entry, ordered by distance from the source.
#[derive(PartialEq)]
struct HeapEntry {
    dist: f64,
    node: NodeId,
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the std max-heap pops the smallest distance first.
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Eagerly-built all-pairs shortest-path index: one binary-heap Dijkstra
/// run per source node. All link weights are nonnegative by the latency
/// model, and the graph is immutable, so the index is built exactly once
/// and never refreshed.
pub struct DijkstraAllPairs {
    dist: Vec<Vec<f64>>,
    link_to: Vec<Vec<Option<DirectedLink>>>,
}

impl DijkstraAllPairs {
    pub fn build(graph: &DirectedGraph) -> Self {
        let node_count = graph.node_count();
        let mut dist = Vec::with_capacity(node_count);
        let mut link_to = Vec::with_capacity(node_count);

        for source in 0..node_count {
            let (source_dist, source_link_to) = Self::single_source(graph, source);
            dist.push(source_dist);
            link_to.push(source_link_to);
        }

        debug!("shortest-path index built for {node_count} sources");
        Self { dist, link_to }
    }

    fn single_source(
        graph: &DirectedGraph,
        source: NodeId,
    ) -> (Vec<f64>, Vec<Option<DirectedLink>>) {
        let node_count = graph.node_count();
        let mut dist = vec![f64::INFINITY; node_count];
        let mut link_to: Vec<Option<DirectedLink>> = vec![None; node_count];
        let mut heap = BinaryHeap::new();

        dist[source] = 0.0;
        heap.push(HeapEntry {
            dist: 0.0,
            node: source,
        });

        while let Some(HeapEntry { dist: d, node }) = heap.pop() {
            if d > dist[node] {
                continue; // stale entry
            }
            for link in graph.adjacent(node) {
                let candidate = d + link.weight;
                if candidate < dist[link.to] {
                    dist[link.to] = candidate;
                    link_to[link.to] = Some(*link);
                    heap.push(HeapEntry {
                        dist: candidate,
                        node: link.to,
                    });
                }
            }
        }

        (dist, link_to)
    }

    /// Total weight of the shortest route, `None` when unreachable.
    pub fn distance(&self, u: NodeId, w: NodeId) -> Option<f64> {
        let d = *self.dist.get(u)?.get(w)?;
        d.is_finite().then_some(d)
    }
}

impl ShortestPaths for DijkstraAllPairs {
    fn has_path(&self, u: NodeId, w: NodeId) -> bool {
        self.distance(u, w).is_some()
    }

    fn path(&self, u: NodeId, w: NodeId) -> Option<Vec<DirectedLink>> {
        if u == w || !self.has_path(u, w) {
            return None;
        }

        let mut links = Vec::new();
        let mut node = w;
        while node != u {
            let link = self.link_to[u][node]?;
            links.push(link);
            node = link.from;
        }
        links.reverse();
        Some(links)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Network;
    use crate::topology::types::{LinkRecord, Material};

    fn line_network() -> Network {
        // 0 - 1 - 2, all copper, uniform links
        let records = vec![
            LinkRecord {
                a: 0,
                b: 1,
                material: Material::Copper,
                bandwidth: 10,
                length: 100.0,
            },
            LinkRecord {
                a: 1,
                b: 2,
                material: Material::Copper,
                bandwidth: 10,
                length: 100.0,
            },
        ];
        Network::from_records(3, &records)
    }

    #[test]
    fn test_reachability() {
        let network = line_network();
        let index = DijkstraAllPairs::build(network.directed());

        assert!(index.has_path(0, 2));
        assert!(index.has_path(2, 0));
        assert!(index.has_path(1, 1));
    }

    #[test]
    fn test_unreachable_island() {
        let records = vec![LinkRecord {
            a: 0,
            b: 1,
            material: Material::Copper,
            bandwidth: 10,
            length: 100.0,
        }];
        let network = Network::from_records(3, &records);
        let index = DijkstraAllPairs::build(network.directed());

        assert!(!index.has_path(0, 2));
        assert!(index.path(0, 2).is_none());
    }

    #[test]
    fn test_path_links_chain_source_to_destination() {
        let network = line_network();
        let index = DijkstraAllPairs::build(network.directed());

        let links = index.path(0, 2).unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].from, 0);
        assert_eq!(links[0].to, 1);
        assert_eq!(links[1].from, 1);
        assert_eq!(links[1].to, 2);
    }

    #[test]
    fn test_self_path_is_empty() {
        let network = line_network();
        let index = DijkstraAllPairs::build(network.directed());
        assert!(index.path(1, 1).is_none());
    }

    #[test]
    fn test_prefers_lower_total_weight_over_fewer_hops() {
        // Direct 0-2 link is long and slow; 0-1-2 wins on weight.
        let records = vec![
            LinkRecord {
                a: 0,
                b: 2,
                material: Material::Copper,
                bandwidth: 1,
                length: 100.0,
            },
            LinkRecord {
                a: 0,
                b: 1,
                material: Material::Copper,
                bandwidth: 100,
                length: 100.0,
            },
            LinkRecord {
                a: 1,
                b: 2,
                material: Material::Copper,
                bandwidth: 100,
                length: 100.0,
            },
        ];
        let network = Network::from_records(3, &records);
        let index = DijkstraAllPairs::build(network.directed());

        let links = index.path(0, 2).unwrap();
        assert_eq!(links.len(), 2);
        let total: f64 = links.iter().map(|l| l.weight).sum();
        assert!(total < 1.0); // the direct link alone weighs ~1.0
        assert_eq!(index.distance(0, 2), Some(total));
    }
}

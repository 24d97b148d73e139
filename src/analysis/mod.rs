//! Topology analysis: shortest paths, bandwidth, resilience, and the
//! spanning backbone.
//!
//! Every analysis runs against the frozen [`Network`](crate::network::Network);
//! nothing here mutates the graph.

pub mod analyzer;
pub mod backbone;
pub mod path_query;
pub mod report;
pub mod resilience;
pub mod shortest_path;

pub use analyzer::NetworkAnalyzer;
pub use backbone::min_latency_backbone;
pub use path_query::{bandwidth_along_path, lowest_latency_path, PathError};
pub use report::{build_report, generate_json_report, generate_text_report, print_summary};
pub use resilience::{copper_connected, survives_any_two_node_failures};
pub use shortest_path::{DijkstraAllPairs, ShortestPaths};

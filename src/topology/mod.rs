//! Topology input: core data types and the topology file parser.

pub mod parser;
pub mod types;

pub use parser::{load_topology, parse_topology, Topology, TopologyError};
pub use types::{BackboneEdge, DirectedLink, Link, LinkRecord, Material, NodeId};

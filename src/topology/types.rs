//! Core data types for network topologies.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Node identity within a topology. Nodes carry no state of their own;
/// identity is positional in `0..n`.
pub type NodeId = usize;

/// Physical medium of a link, which determines propagation speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Material {
    Copper,
    Fiber,
}

impl Material {
    /// Signal propagation speed through this medium, in distance units
    /// per second.
    pub fn propagation_speed(self) -> f64 {
        match self {
            Material::Copper => 2.3e8,
            Material::Fiber => 2.0e8,
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Material::Copper => write!(f, "copper"),
            Material::Fiber => write!(f, "optical"),
        }
    }
}

/// One physical bidirectional link as loaded from a topology file.
///
/// Records are kept in load order; the directed and undirected graph
/// views are both derived from the same record list.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkRecord {
    pub a: NodeId,
    pub b: NodeId,
    pub material: Material,
    /// Link capacity, in capacity units. Always positive.
    pub bandwidth: u32,
    /// Physical length, in distance units. Always positive.
    pub length: f64,
}

/// One direction of a physical link in the directed view.
///
/// Every physical link materializes as two of these, one per direction,
/// with identical attributes and weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectedLink {
    pub from: NodeId,
    pub to: NodeId,
    pub material: Material,
    pub bandwidth: u32,
    /// Latency weight, in seconds. Nonnegative.
    pub weight: f64,
}

/// A physical link in the undirected view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: NodeId,
    pub b: NodeId,
    pub material: Material,
    pub bandwidth: u32,
    /// Latency weight, in seconds. Nonnegative.
    pub weight: f64,
}

/// One edge of a spanning backbone. The pair is unordered; a full
/// backbone over a connected n-node network is exactly n-1 of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackboneEdge {
    pub a: NodeId,
    pub b: NodeId,
}

impl fmt::Display for BackboneEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.a, self.b)
    }
}

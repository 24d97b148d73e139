//! Weighted graph containers backing the dual network views.

pub mod digraph;
pub mod undirected;

pub use digraph::DirectedGraph;
pub use undirected::UndirectedGraph;

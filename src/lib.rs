//! # Netanalyzer - Offline analysis of static network topologies
//!
//! This library analyzes a frozen snapshot of a physical computer
//! network, where nodes are joined by copper or optical links with known
//! bandwidth and physical length, and answers four operational
//! questions:
//!
//! - the minimum-latency route between two nodes,
//! - the bottleneck bandwidth along an arbitrary named route,
//! - whether the network stays connected after any two node failures,
//! - the minimum-average-latency spanning backbone.
//!
//! ## Architecture
//!
//! The library is organized into a few modules:
//!
//! - `topology`: input data types and the line-oriented topology parser
//! - `latency`: the per-link latency model (propagation + serialization
//!   delay)
//! - `graph`: the directed and undirected weighted graph containers
//! - `network`: the immutable dual-view network built from one canonical
//!   link list
//! - `analysis`: shortest paths, path queries, resilience checks, the
//!   backbone builder, and report generation
//!
//! The topology is loaded once; every graph structure is immutable
//! afterwards, all queries are deterministic, and everything runs
//! single-threaded with no I/O beyond the initial load and optional
//! report output.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use netanalyzer::analysis::NetworkAnalyzer;
//!
//! let analyzer = NetworkAnalyzer::from_file(Path::new("topology.txt"))?;
//!
//! if let Some(route) = analyzer.lowest_latency_path(0, 5) {
//!     let bandwidth = analyzer.bandwidth_along_path(&route)?;
//!     println!("route {:?} carries {} units", route, bandwidth);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Topology Format
//!
//! Plain text, line-oriented: the first line is the node count, and each
//! following line describes one bidirectional physical link:
//!
//! ```text
//! 4
//! 0 1 copper 10 100
//! 1 2 copper 10 100
//! 2 3 optical 10 100
//! 0 3 copper 5 500
//! ```
//!
//! ## Error Handling
//!
//! Load and parse failures are typed (`TopologyError`) and fatal: a
//! failed load never produces a queryable analyzer. Path queries over
//! invalid routes return `PathError`; invalid node ids in route lookups
//! resolve to `None`. The binary wraps these with `color_eyre` context.

pub mod analysis;
pub mod graph;
pub mod latency;
pub mod network;
pub mod topology;

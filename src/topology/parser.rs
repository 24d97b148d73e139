//! Line-oriented topology file parser.
//!
//! The format is plain text: the first line carries the node count, and
//! every following non-blank line describes one bidirectional physical
//! link as `node1 node2 material bandwidth length`, space-separated, with
//! `material` being `copper` or `optical`.
//!
//! All errors are fatal: a malformed line or an unreadable file aborts
//! the load and no partially-built topology is ever returned.

use std::fs;
use std::path::Path;

use log::info;

use crate::topology::types::{LinkRecord, Material};

/// Errors that abort a topology load.
#[derive(Debug, thiserror::Error)]
pub enum TopologyError {
    #[error("cannot read topology file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("topology is empty, expected a node count on line 1")]
    MissingNodeCount,

    #[error("line {line}: invalid node count '{value}'")]
    InvalidNodeCount { line: usize, value: String },

    #[error("line {line}: expected 'node1 node2 material bandwidth length', found {fields} fields")]
    MalformedLine { line: usize, fields: usize },

    #[error("line {line}: invalid numeric field '{value}'")]
    InvalidNumber { line: usize, value: String },

    #[error("line {line}: unknown material '{value}', expected 'copper' or 'optical'")]
    UnknownMaterial { line: usize, value: String },

    #[error("line {line}: node {node} out of range for a {count}-node topology")]
    NodeOutOfRange {
        line: usize,
        node: usize,
        count: usize,
    },

    #[error("line {line}: link endpoints must be distinct")]
    SelfLoop { line: usize },

    #[error("line {line}: bandwidth must be positive")]
    InvalidBandwidth { line: usize },

    #[error("line {line}: length must be positive and finite")]
    InvalidLength { line: usize },
}

/// A parsed topology: the declared node count plus the ordered link
/// records, exactly as they appeared in the file.
#[derive(Debug, Clone)]
pub struct Topology {
    pub node_count: usize,
    pub records: Vec<LinkRecord>,
}

/// Parse a topology from its textual form.
pub fn parse_topology(input: &str) -> Result<Topology, TopologyError> {
    let mut lines = input.lines().enumerate();

    let (line_idx, count_line) = lines.next().ok_or(TopologyError::MissingNodeCount)?;
    let count_line = count_line.trim();
    if count_line.is_empty() {
        return Err(TopologyError::MissingNodeCount);
    }
    let node_count: usize =
        count_line
            .parse()
            .map_err(|_| TopologyError::InvalidNodeCount {
                line: line_idx + 1,
                value: count_line.to_string(),
            })?;

    let mut records = Vec::new();
    for (line_idx, raw) in lines {
        let line = line_idx + 1;
        if raw.trim().is_empty() {
            continue;
        }
        records.push(parse_link_line(raw, line, node_count)?);
    }

    Ok(Topology {
        node_count,
        records,
    })
}

/// Parse one `node1 node2 material bandwidth length` record.
fn parse_link_line(raw: &str, line: usize, node_count: usize) -> Result<LinkRecord, TopologyError> {
    let fields: Vec<&str> = raw.split_whitespace().collect();
    if fields.len() != 5 {
        return Err(TopologyError::MalformedLine {
            line,
            fields: fields.len(),
        });
    }

    let a = parse_node_id(fields[0], line, node_count)?;
    let b = parse_node_id(fields[1], line, node_count)?;
    if a == b {
        return Err(TopologyError::SelfLoop { line });
    }

    let material = match fields[2] {
        "copper" => Material::Copper,
        "optical" => Material::Fiber,
        other => {
            return Err(TopologyError::UnknownMaterial {
                line,
                value: other.to_string(),
            })
        }
    };

    let bandwidth: u32 = fields[3].parse().map_err(|_| TopologyError::InvalidNumber {
        line,
        value: fields[3].to_string(),
    })?;
    if bandwidth == 0 {
        return Err(TopologyError::InvalidBandwidth { line });
    }

    let length: f64 = fields[4].parse().map_err(|_| TopologyError::InvalidNumber {
        line,
        value: fields[4].to_string(),
    })?;
    if !length.is_finite() || length <= 0.0 {
        return Err(TopologyError::InvalidLength { line });
    }

    Ok(LinkRecord {
        a,
        b,
        material,
        bandwidth,
        length,
    })
}

fn parse_node_id(field: &str, line: usize, node_count: usize) -> Result<usize, TopologyError> {
    let node: usize = field.parse().map_err(|_| TopologyError::InvalidNumber {
        line,
        value: field.to_string(),
    })?;
    if node >= node_count {
        return Err(TopologyError::NodeOutOfRange {
            line,
            node,
            count: node_count,
        });
    }
    Ok(node)
}

/// Load and parse a topology file.
pub fn load_topology(path: &Path) -> Result<Topology, TopologyError> {
    info!("Loading topology from {}", path.display());

    let content = fs::read_to_string(path).map_err(|source| TopologyError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let topology = parse_topology(&content)?;
    info!(
        "Loaded topology: {} nodes, {} links",
        topology.node_count,
        topology.records.len()
    );
    Ok(topology)
}

//! Report generation for topology analysis.
//!
//! Generates both JSON and human-readable text reports.

use std::fs;
use std::path::Path;

use chrono::Local;
use color_eyre::eyre::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::topology::types::{BackboneEdge, Material};

use super::analyzer::NetworkAnalyzer;
use super::backbone;

/// Analysis metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: String,
    pub topology_file: String,
    pub node_count: usize,
    pub link_count: usize,
}

/// Per-material counts and latency spread over the physical links
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkStats {
    pub copper_links: usize,
    pub fiber_links: usize,
    pub min_latency: f64,
    pub mean_latency: f64,
    pub max_latency: f64,
}

/// Resilience check results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResilienceSummary {
    /// Every loaded link is copper
    pub copper_only: bool,
    /// Every node is incident to at least one copper link
    pub copper_connected: bool,
    /// The network stays connected after any two node failures
    pub survives_two_node_failures: bool,
}

/// The spanning backbone and its weight totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackboneSummary {
    pub edges: Vec<BackboneEdge>,
    pub spans_all_nodes: bool,
    pub total_latency: f64,
    pub mean_latency: f64,
}

/// Full analysis report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub metadata: ReportMetadata,
    pub links: LinkStats,
    pub resilience: ResilienceSummary,
    pub backbone: BackboneSummary,
}

/// Run every analysis over the frozen network and collect the results.
pub fn build_report(analyzer: &NetworkAnalyzer, topology_file: &str) -> AnalysisReport {
    let network = analyzer.network();

    let metadata = ReportMetadata {
        generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        topology_file: topology_file.to_string(),
        node_count: network.node_count(),
        link_count: network.link_count(),
    };

    let links = calculate_link_stats(network);

    let resilience = ResilienceSummary {
        copper_only: network.copper_only(),
        copper_connected: analyzer.copper_connected(),
        survives_two_node_failures: analyzer.survives_any_two_node_failures(),
    };

    let backbone_links = backbone::backbone_links(network);
    let total_latency: f64 = backbone_links.iter().map(|l| l.weight).sum();
    let mean_latency = if backbone_links.is_empty() {
        0.0
    } else {
        total_latency / backbone_links.len() as f64
    };
    let backbone = BackboneSummary {
        edges: backbone_links
            .iter()
            .map(|l| BackboneEdge { a: l.a, b: l.b })
            .collect(),
        spans_all_nodes: network.node_count() > 0
            && backbone_links.len() + 1 == network.node_count(),
        total_latency,
        mean_latency,
    };

    AnalysisReport {
        metadata,
        links,
        resilience,
        backbone,
    }
}

fn calculate_link_stats(network: &crate::network::Network) -> LinkStats {
    let edges = network.undirected().edges();

    let copper_links = edges
        .iter()
        .filter(|e| e.material == Material::Copper)
        .count();
    let fiber_links = edges.len() - copper_links;

    let mut min_latency = 0.0;
    let mut max_latency = 0.0;
    let mut mean_latency = 0.0;
    if !edges.is_empty() {
        min_latency = edges.iter().map(|e| e.weight).fold(f64::INFINITY, f64::min);
        max_latency = edges
            .iter()
            .map(|e| e.weight)
            .fold(f64::NEG_INFINITY, f64::max);
        mean_latency = edges.iter().map(|e| e.weight).sum::<f64>() / edges.len() as f64;
    }

    LinkStats {
        copper_links,
        fiber_links,
        min_latency,
        mean_latency,
        max_latency,
    }
}

/// Generate JSON report
pub fn generate_json_report(report: &AnalysisReport, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")?;

    fs::write(output_path, json)
        .with_context(|| format!("Failed to write JSON report to {}", output_path.display()))?;

    log::info!("JSON report written to {}", output_path.display());
    Ok(())
}

/// Generate human-readable text report
pub fn generate_text_report(report: &AnalysisReport, output_path: &Path) -> Result<()> {
    let content = render_text_report(report);
    fs::write(output_path, content)
        .with_context(|| format!("Failed to write text report to {}", output_path.display()))?;

    log::info!("Text report written to {}", output_path.display());
    Ok(())
}

fn render_text_report(report: &AnalysisReport) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("=".repeat(72));
    lines.push("                    NETWORK TOPOLOGY ANALYSIS".to_string());
    lines.push("=".repeat(72));
    lines.push(String::new());

    lines.push(format!("Generated: {}", report.metadata.generated_at));
    lines.push(format!("Topology:  {}", report.metadata.topology_file));
    lines.push(format!("Nodes:     {}", report.metadata.node_count));
    lines.push(format!("Links:     {}", report.metadata.link_count));
    lines.push(String::new());

    lines.push("Links:".to_string());
    lines.push(format!("  Copper: {}", report.links.copper_links));
    lines.push(format!("  Fiber:  {}", report.links.fiber_links));
    lines.push(format!(
        "  Latency per link: min {:.6e}s, mean {:.6e}s, max {:.6e}s",
        report.links.min_latency, report.links.mean_latency, report.links.max_latency
    ));
    lines.push(String::new());

    lines.push("Resilience:".to_string());
    lines.push(format!(
        "  Copper-only network:                {}",
        yes_no(report.resilience.copper_only)
    ));
    lines.push(format!(
        "  Copper link at every node:          {}",
        yes_no(report.resilience.copper_connected)
    ));
    lines.push(format!(
        "  Survives any two node failures:     {}",
        yes_no(report.resilience.survives_two_node_failures)
    ));
    lines.push(String::new());

    lines.push("Minimum-latency backbone:".to_string());
    if report.backbone.edges.is_empty() {
        lines.push("  (no links)".to_string());
    } else {
        for edge in &report.backbone.edges {
            lines.push(format!("  {edge}"));
        }
        lines.push(format!(
            "  Total latency: {:.6e}s, mean per edge: {:.6e}s",
            report.backbone.total_latency, report.backbone.mean_latency
        ));
        if !report.backbone.spans_all_nodes {
            lines.push(
                "  WARNING: backbone does not span all nodes (network is disconnected)".to_string(),
            );
        }
    }
    lines.push(String::new());
    lines.push("=".repeat(72));

    lines.join("\n")
}

/// Print a summary to stdout
pub fn print_summary(report: &AnalysisReport) {
    println!("\n=== NETWORK TOPOLOGY ANALYSIS SUMMARY ===\n");
    println!("Nodes: {}", report.metadata.node_count);
    println!(
        "Links: {} ({} copper, {} fiber)",
        report.metadata.link_count, report.links.copper_links, report.links.fiber_links
    );

    println!("\nResilience:");
    println!(
        "  Copper link at every node:      {}",
        yes_no(report.resilience.copper_connected)
    );
    println!(
        "  Survives any two node failures: {}",
        yes_no(report.resilience.survives_two_node_failures)
    );

    println!("\nBackbone:");
    println!(
        "  {} edges, total latency {:.6e}s",
        report.backbone.edges.len(),
        report.backbone.total_latency
    );
    println!();
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::parser::parse_topology;

    fn example_analyzer() -> NetworkAnalyzer {
        let topology = parse_topology(
            "4\n0 1 copper 10 100\n1 2 copper 10 100\n2 3 optical 10 100\n0 3 copper 5 500\n",
        )
        .unwrap();
        NetworkAnalyzer::from_topology(&topology)
    }

    #[test]
    fn test_report_collects_all_sections() {
        let analyzer = example_analyzer();
        let report = build_report(&analyzer, "example.txt");

        assert_eq!(report.metadata.node_count, 4);
        assert_eq!(report.metadata.link_count, 4);
        assert_eq!(report.links.copper_links, 3);
        assert_eq!(report.links.fiber_links, 1);
        assert!(!report.resilience.copper_only);
        assert!(!report.resilience.survives_two_node_failures);
        assert_eq!(report.backbone.edges.len(), 3);
        assert!(report.backbone.spans_all_nodes);
        assert!(report.backbone.total_latency > 0.0);
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let analyzer = example_analyzer();
        let report = build_report(&analyzer, "example.txt");

        let json = serde_json::to_string(&report).unwrap();
        let parsed: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.metadata.node_count, report.metadata.node_count);
        assert_eq!(parsed.backbone.edges, report.backbone.edges);
    }

    #[test]
    fn test_text_report_mentions_every_section() {
        let analyzer = example_analyzer();
        let report = build_report(&analyzer, "example.txt");
        let text = render_text_report(&report);

        assert!(text.contains("Nodes:     4"));
        assert!(text.contains("Resilience:"));
        assert!(text.contains("Minimum-latency backbone:"));
    }

    #[test]
    fn test_empty_network_report() {
        let topology = parse_topology("0\n").unwrap();
        let analyzer = NetworkAnalyzer::from_topology(&topology);
        let report = build_report(&analyzer, "empty.txt");

        assert_eq!(report.links.copper_links, 0);
        assert_eq!(report.links.mean_latency, 0.0);
        assert!(report.backbone.edges.is_empty());
        assert!(!report.backbone.spans_all_nodes);
    }
}

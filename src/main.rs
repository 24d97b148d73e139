use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use netanalyzer::analysis::{report, NetworkAnalyzer};

/// Offline latency, bandwidth, and resilience analysis for static
/// network topologies
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the topology file
    #[arg(short, long)]
    topology: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the lowest-latency route between two nodes
    Path {
        /// Source node id
        from: usize,
        /// Destination node id
        to: usize,
    },
    /// Bottleneck bandwidth along a named route
    Bandwidth {
        /// Route as a sequence of at least two node ids
        #[arg(num_args = 2.., required = true)]
        nodes: Vec<usize>,
    },
    /// Copper incidence and two-node fault tolerance checks
    Resilience,
    /// Minimum-average-latency spanning backbone
    Backbone,
    /// Full analysis report
    Report {
        /// Write a JSON report to this file
        #[arg(long)]
        json: Option<PathBuf>,
        /// Write a text report to this file
        #[arg(long)]
        text: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Topology file: {:?}", args.topology);

    let analyzer = NetworkAnalyzer::from_file(&args.topology)
        .wrap_err_with(|| format!("failed to load topology {}", args.topology.display()))?;

    match args.command {
        Command::Path { from, to } => match analyzer.lowest_latency_path(from, to) {
            Some(route) => {
                println!("route: {}", format_route(&route));
                if route.len() > 1 {
                    let bandwidth = analyzer.bandwidth_along_path(&route)?;
                    println!("bottleneck bandwidth: {bandwidth}");
                }
            }
            None => println!("no route from {from} to {to}"),
        },
        Command::Bandwidth { nodes } => {
            let bandwidth = analyzer.bandwidth_along_path(&nodes)?;
            println!("bottleneck bandwidth: {bandwidth}");
        }
        Command::Resilience => {
            println!(
                "copper link at every node:      {}",
                yes_no(analyzer.copper_connected())
            );
            println!(
                "survives any two node failures: {}",
                yes_no(analyzer.survives_any_two_node_failures())
            );
        }
        Command::Backbone => {
            let backbone = analyzer.min_latency_backbone();
            if backbone.is_empty() {
                println!("no backbone (network has no links)");
            } else {
                for edge in backbone {
                    println!("{edge}");
                }
            }
        }
        Command::Report { json, text } => {
            let full_report =
                report::build_report(&analyzer, &args.topology.display().to_string());
            if let Some(path) = &json {
                report::generate_json_report(&full_report, path)?;
            }
            if let Some(path) = &text {
                report::generate_text_report(&full_report, path)?;
            }
            if json.is_none() && text.is_none() {
                report::print_summary(&full_report);
            }
        }
    }

    Ok(())
}

fn format_route(route: &[usize]) -> String {
    route
        .iter()
        .map(|node| node.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
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
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_format_route() {
        assert_eq!(format_route(&[0, 1, 2]), "0 -> 1 -> 2");
        assert_eq!(format_route(&[7]), "7");
    }
}

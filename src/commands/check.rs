//! Check command: load a graph file and summarise it

use serde::Serialize;

use hoppath_core::error::Result;
use hoppath_core::format::OutputFormat;
use hoppath_core::graph::AdjacencyGraph;
use hoppath_core::records::record_value;

use crate::cli::CheckArgs;

use super::dispatch::CommandContext;
use super::source;

/// Summary of a loaded graph
#[derive(Debug, Serialize)]
pub struct GraphReport {
    pub nodes: usize,
    pub edges: usize,
    pub undirected: bool,
    /// Neighbour ids that are not keys of the mapping
    pub dangling: Vec<String>,
}

impl GraphReport {
    pub fn new(graph: &AdjacencyGraph<String>, undirected: bool) -> Self {
        Self {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            undirected,
            dangling: graph.dangling_references(),
        }
    }

    fn records(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "H hoppath=1 records=1 mode=check nodes={} edges={} undirected={} dangling={}",
            self.nodes,
            self.edges,
            self.undirected,
            self.dangling.len()
        )];
        lines.extend(
            self.dangling
                .iter()
                .map(|id| format!("D {}", record_value(id))),
        );
        lines
    }
}

/// Execute the check command
pub fn execute(ctx: &CommandContext, args: &CheckArgs) -> Result<()> {
    let graph = source::load(ctx, &args.source)?;
    let report = GraphReport::new(&graph, source::is_undirected(ctx, &args.source));

    if !report.dangling.is_empty() {
        tracing::warn!(count = report.dangling.len(), "graph has dangling references");
    }

    match ctx.cli.format {
        OutputFormat::Human => {
            println!("Nodes: {}", report.nodes);
            println!("Edges: {}", report.edges);
            println!("Undirected: {}", if report.undirected { "yes" } else { "no" });
            if !ctx.cli.quiet {
                if report.dangling.is_empty() {
                    println!("Dangling references: none");
                } else {
                    println!("Dangling references: {}", report.dangling.join(", "));
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Records => {
            for line in report.records() {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

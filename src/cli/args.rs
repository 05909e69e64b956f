//! Argument groups shared by subcommands

use std::path::PathBuf;

use clap::Args;
use hoppath_core::graph::GraphFormat;

use super::parse::parse_graph_format;

/// Where to read the graph from and how to interpret it
#[derive(Args, Debug, Clone, Default)]
pub struct GraphArgs {
    /// Graph file (.json, .yaml/.yml or .toml); falls back to `graph` in the config
    #[arg(long, short)]
    pub graph: Option<PathBuf>,

    /// Graph file format, overriding extension detection
    #[arg(long, value_parser = parse_graph_format)]
    pub graph_format: Option<GraphFormat>,

    /// Treat every edge as bidirectional
    #[arg(long, short, conflicts_with = "directed")]
    pub undirected: bool,

    /// Treat edges as directed even if the config says otherwise
    #[arg(long)]
    pub directed: bool,
}

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Start node
    pub from: String,

    /// Target node
    pub to: String,

    #[command(flatten)]
    pub source: GraphArgs,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: GraphArgs,
}

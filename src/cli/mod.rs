//! CLI argument parsing for hoppath
//!
//! Supports global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod error;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{CheckArgs, GraphArgs, PathArgs};
use hoppath_core::format::OutputFormat;
use parse::parse_output_format;

/// Hoppath - shortest hop paths through adjacency-list graphs
#[derive(Parser, Debug)]
#[command(name = "hoppath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (defaults to ~/.config/hoppath/config.toml)
    #[arg(long, global = true, env = "HOPPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format: human, json, or records
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter level or directive (e.g. debug, hoppath_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the shortest path between two nodes
    Path(PathArgs),

    /// Validate a graph file and summarise it
    Check(CheckArgs),
}

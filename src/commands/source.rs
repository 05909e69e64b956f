//! Resolve and load the graph a command operates on

use std::path::PathBuf;
use std::time::Instant;

use hoppath_core::bail_usage;
use hoppath_core::error::Result;
use hoppath_core::graph::{load_graph, AdjacencyGraph};
use hoppath_core::trace_time;

use crate::cli::GraphArgs;

use super::dispatch::CommandContext;

/// Graph file from `--graph`, else from the config
pub fn resolve_graph_path(ctx: &CommandContext, args: &GraphArgs) -> Result<PathBuf> {
    match (&args.graph, &ctx.config.graph) {
        (Some(path), _) | (None, Some(path)) => Ok(path.clone()),
        (None, None) => {
            bail_usage!("no graph file given; pass --graph or set `graph` in the config file")
        }
    }
}

/// Whether edges should be treated as bidirectional
pub fn is_undirected(ctx: &CommandContext, args: &GraphArgs) -> bool {
    args.undirected || (ctx.config.undirected && !args.directed)
}

/// Load the graph named by `args`, applying config defaults
pub fn load(ctx: &CommandContext, args: &GraphArgs) -> Result<AdjacencyGraph<String>> {
    let path = resolve_graph_path(ctx, args)?;
    let format = args.graph_format.or(ctx.config.graph_format);

    let start = Instant::now();
    let graph = load_graph(&path, format)?;
    trace_time!(start, "load_graph", nodes = graph.node_count());

    if is_undirected(ctx, args) {
        Ok(graph.to_undirected())
    } else {
        Ok(graph)
    }
}

//! Path command

mod human;
mod json;
mod records;

use hoppath_core::error::Result;
use hoppath_core::format::OutputFormat;
use hoppath_core::graph::find_path_result;
use tracing::debug;

use crate::cli::PathArgs;

use super::dispatch::CommandContext;
use super::source;

/// Execute the path command
///
/// A missing path is reported in the output, not as an error.
pub fn execute(ctx: &CommandContext, args: &PathArgs) -> Result<()> {
    let graph = source::load(ctx, &args.source)?;
    let result = find_path_result(&graph, &args.from, &args.to);
    debug!(found = result.found, hops = result.path_length, "path command finished");

    match ctx.cli.format {
        OutputFormat::Human => human::output_path_human(ctx.cli, &result),
        OutputFormat::Json => json::output_path_json(&result)?,
        OutputFormat::Records => records::output_path_records(&result),
    }

    Ok(())
}

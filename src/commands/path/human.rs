use hoppath_core::graph::PathResult;

use crate::cli::Cli;

pub fn output_path_human(cli: &Cli, result: &PathResult<String>) {
    if !result.found {
        println!("No path found from {} to {}", result.from, result.to);
        return;
    }

    println!("{}", result.nodes.join(" -> "));

    if !cli.quiet {
        let unit = if result.path_length == 1 { "hop" } else { "hops" };
        println!("Path length: {} {}", result.path_length, unit);
    }
}

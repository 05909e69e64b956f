//! Hoppath - shortest hop paths through adjacency-list graphs
//!
//! Loads a graph file and answers shortest-path queries with breadth-first
//! search, printing human, JSON or records output.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use cli::Cli;
use hoppath_core::error::{ExitCode as HoppathExitCode, HoppathError};
use hoppath_core::format::OutputFormat;
use hoppath_core::logging;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {e}");
    }
    debug!(format = %cli.format, config = ?cli.config, "arguments parsed");

    match commands::dispatch::run(&cli) {
        Ok(()) => exit_with(HoppathExitCode::Success),
        Err(e) => {
            report(&cli, &e);
            exit_with(e.exit_code())
        }
    }
}

/// Clap owns help, version and plain-text errors; JSON callers get an envelope
fn parse_failure(err: clap::Error) -> ExitCode {
    if !cli::error::requests_json(std::env::args().skip(1)) {
        err.exit();
    }
    match cli::error::from_clap(&err) {
        Some(e) => {
            eprintln!("{}", e.to_json());
            exit_with(e.exit_code())
        }
        None => err.exit(),
    }
}

fn report(cli: &Cli, err: &HoppathError) {
    match cli.format {
        OutputFormat::Json => eprintln!("{}", err.to_json()),
        _ if cli.quiet => {}
        _ => eprintln!("error: {err}"),
    }
}

fn exit_with(code: HoppathExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}

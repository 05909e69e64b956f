//! Command dispatch logic for hoppath

use hoppath_core::config::Config;
use hoppath_core::error::Result;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: Config,
}

impl<'a> CommandContext<'a> {
    /// Load the config named on the command line, or the user config
    pub fn new(cli: &'a Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        debug!(?config, "config loaded");
        Ok(Self { cli, config })
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("hoppath {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest hop paths through adjacency-list graphs.");
        println!();
        println!("Run `hoppath --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Path(args) => commands::path::execute(ctx, args),
            Commands::Check(args) => commands::check::execute(ctx, args),
        }
    }
}

pub fn run(cli: &Cli) -> Result<()> {
    let ctx = CommandContext::new(cli)?;

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

//! Command dispatch logic for noted

use std::time::Instant;

use crate::cli::Cli;
use noted_core::error::Result;
use tracing::debug;

mod command;
mod commands;

pub use command::CommandContext;
use command::{load_config, Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = load_config(cli)?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);

    let result = match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    };

    ctx.selectors.log_metrics();
    debug!(elapsed = ?start.elapsed(), "command_complete");
    result
}

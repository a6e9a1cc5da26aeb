//! Command implementations for all noted commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{autolink, index, links, list, search};
use noted_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Index(args) => index::execute(ctx, args),
            Commands::Links(args) => links::execute(ctx, args),
            Commands::List(args) => list::execute(ctx, args),
            Commands::Search(args) => search::execute(ctx, args),
            Commands::Autolink(args) => autolink::execute(ctx, args),
        }
    }
}

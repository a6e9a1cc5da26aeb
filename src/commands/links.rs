//! `noted links` command - print the title token map

use serde_json::{Map, Value};

use crate::cli::{LinksArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use noted_core::error::Result;

/// Execute the links command
pub fn execute(ctx: &CommandContext, args: &LinksArgs) -> Result<()> {
    let store = ctx.load_snapshot(&args.snapshot)?;
    let links = ctx.selectors.link_map(&store);

    match ctx.cli.format {
        OutputFormat::Json => {
            let mut tokens = Map::new();
            for (token, _) in links.iter() {
                if let Some(target) = links.target(token) {
                    tokens.insert(token.to_string(), serde_json::to_value(target)?);
                }
            }
            println!("{}", serde_json::to_string_pretty(&Value::Object(tokens))?);
        }
        OutputFormat::Human => {
            if links.is_empty() && !ctx.cli.quiet {
                println!("No titles found");
            }
            for (token, _) in links.iter() {
                if let Some(target) = links.target(token) {
                    println!("{:?} -> {}", token, target.href());
                }
            }
        }
    }
    Ok(())
}

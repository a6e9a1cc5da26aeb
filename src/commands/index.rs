//! `noted index` command - print merged search documents
//!
//! Each document holds a note's title, body and tags joined with those of
//! every note nested inside it.

use std::sync::Arc;

use crate::cli::{IndexArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use noted_core::error::Result;
use noted_core::index::{filtered_search_index, SearchIndex};

/// Execute the index command
pub fn execute(ctx: &CommandContext, args: &IndexArgs) -> Result<()> {
    let store = ctx.load_snapshot(&args.snapshot)?;
    let index = match args.scope {
        Some(scope) => Arc::new(filtered_search_index(&store, Some(scope))),
        None => ctx.selectors.search_index(&store),
    };

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(index.as_ref())?);
        }
        OutputFormat::Human => output_human(ctx, &index),
    }
    Ok(())
}

fn output_human(ctx: &CommandContext, index: &SearchIndex) {
    if index.is_empty() {
        if !ctx.cli.quiet {
            println!("No notes found");
        }
        return;
    }

    for (id, doc) in index.iter() {
        println!("{} {}", id, doc.title);
        if !doc.tags.is_empty() {
            println!("  tags: {}", doc.tags.join(", "));
        }
        if !doc.body.is_empty() {
            println!("  body: {}", doc.body);
        }
    }
}

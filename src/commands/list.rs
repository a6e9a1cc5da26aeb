//! `noted list` command - list notes in recency order
//!
//! - `--view default` shows notes that are not archived
//! - `--view archive` shows archived notes and the notes containing them
//! - Pinned notes first, archived notes last, then by the freshest edit at
//!   or directly below each note

use serde_json::json;

use crate::cli::{ListArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use noted_core::error::Result;
use noted_core::note::Note;
use noted_core::sort::sort_keys;

/// Execute the list command
pub fn execute(ctx: &CommandContext, args: &ListArgs) -> Result<()> {
    let store = ctx.load_snapshot(&args.snapshot)?;
    let ids = ctx.selectors.visible_ids(&store, args.view);
    let notes: Vec<&Note> = ids.iter().filter_map(|&id| store.get_by_id(id)).collect();

    match ctx.cli.format {
        OutputFormat::Json => {
            let keys = sort_keys(&store);
            let output: Vec<_> = notes
                .iter()
                .map(|note| {
                    json!({
                        "id": note.id,
                        "title": note.title,
                        "pinned": note.pinned,
                        "archived": note.archived,
                        "updated_at": note.updated_at,
                        "sort_key": keys.get(&note.id),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if notes.is_empty() {
                if !ctx.cli.quiet {
                    println!("No notes found");
                }
                return Ok(());
            }
            for note in notes {
                let marker = if note.pinned { "*" } else { " " };
                let archived = if note.archived { " (archived)" } else { "" };
                println!("{}{} {}{}", marker, note.id, note.title, archived);
            }
        }
    }
    Ok(())
}

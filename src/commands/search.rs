//! `noted search` command - search notes
//!
//! - `noted search <snapshot> <query>` - every note, ranked by title > tags > body
//! - `--scope` restricts to notes directly inside one note (0 = top level)
//! - A note also matches on the text of everything nested inside it

use serde_json::json;
use tracing::debug;

use crate::cli::{OutputFormat, SearchArgs};
use crate::commands::dispatch::CommandContext;
use noted_core::error::Result;
use noted_core::index::filtered_search_index;
use noted_core::search::{SearchHit, Searcher};
use noted_core::store::NoteStore;

/// Execute the search command
pub fn execute(ctx: &CommandContext, args: &SearchArgs) -> Result<()> {
    let store = ctx.load_snapshot(&args.snapshot)?;

    let mut config = ctx.config.search.clone();
    if args.limit.is_some() {
        config.limit = args.limit;
    }
    let searcher = Searcher::new(&config);

    let hits = match args.scope {
        Some(scope) => searcher.search(&filtered_search_index(&store, Some(scope)), &args.query),
        None => searcher.search(&ctx.selectors.search_index(&store), &args.query),
    };

    debug!(query = %args.query, scope = ?args.scope, hits = hits.len(), "search");

    match ctx.cli.format {
        OutputFormat::Json => output_json(&store, &hits)?,
        OutputFormat::Human => {
            if hits.is_empty() {
                if !ctx.cli.quiet {
                    println!("No results found");
                }
                return Ok(());
            }
            for hit in &hits {
                println!("{} {} ({:.2})", hit.id, title_of(&store, hit), hit.relevance);
            }
        }
    }
    Ok(())
}

fn title_of<'s>(store: &'s NoteStore, hit: &SearchHit) -> &'s str {
    store
        .get_by_id(hit.id)
        .map(|note| note.title.as_str())
        .unwrap_or_default()
}

fn output_json(store: &NoteStore, hits: &[SearchHit]) -> Result<()> {
    let output: Vec<_> = hits
        .iter()
        .map(|hit| {
            json!({
                "id": hit.id,
                "title": title_of(store, hit),
                "relevance": hit.relevance,
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

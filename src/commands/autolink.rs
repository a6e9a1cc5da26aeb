//! `noted autolink` command - link note titles mentioned in text

use serde_json::json;

use crate::cli::{AutolinkArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use noted_core::autolink::autolink;
use noted_core::bail_usage;
use noted_core::error::{NotedError, Result};

/// Execute the autolink command
pub fn execute(ctx: &CommandContext, args: &AutolinkArgs) -> Result<()> {
    let store = ctx.load_snapshot(&args.snapshot)?;

    let text = match (args.note, &args.text) {
        (Some(id), None) => store
            .get_by_id(id)
            .map(|note| note.body.clone())
            .ok_or(NotedError::NoteNotFound { id: id.value() })?,
        (None, Some(text)) => text.clone(),
        _ => bail_usage!("pass exactly one of --note or --text"),
    };

    let links = ctx.selectors.link_map(&store);
    let linked = autolink(&text, &links);

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = json!({
                "markdown": linked.to_markdown(),
                "segments": linked,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => println!("{}", linked),
    }
    Ok(())
}

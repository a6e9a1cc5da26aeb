use clap::{ArgGroup, Args};
use std::path::PathBuf;

use super::parse::{parse_note_id, parse_view};
use noted_core::note::NoteId;
use noted_core::visibility::View;

#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Snapshot file (JSON array of notes)
    pub snapshot: PathBuf,

    /// Only notes directly inside this note (0 for top-level notes)
    #[arg(long, value_parser = parse_note_id)]
    pub scope: Option<NoteId>,
}

#[derive(Args, Debug)]
pub struct LinksArgs {
    /// Snapshot file (JSON array of notes)
    pub snapshot: PathBuf,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Snapshot file (JSON array of notes)
    pub snapshot: PathBuf,

    /// Which notes to show: default (not archived) or archive
    #[arg(long, value_parser = parse_view, default_value = "default")]
    pub view: View,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Snapshot file (JSON array of notes)
    pub snapshot: PathBuf,

    /// Search query
    pub query: String,

    /// Search only notes directly inside this note (0 for top-level notes)
    #[arg(long, value_parser = parse_note_id)]
    pub scope: Option<NoteId>,

    /// Maximum number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["note", "text"])))]
pub struct AutolinkArgs {
    /// Snapshot file (JSON array of notes)
    pub snapshot: PathBuf,

    /// Link the body of this note
    #[arg(long, value_parser = parse_note_id)]
    pub note: Option<NoteId>,

    /// Link this text
    #[arg(long)]
    pub text: Option<String>,
}

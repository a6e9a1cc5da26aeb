//! CLI argument parsing for noted
//!
//! Every command reads a snapshot file (the JSON array returned by the notes
//! list endpoint) and prints one derived view of it.
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{AutolinkArgs, IndexArgs, LinksArgs, ListArgs, SearchArgs};
pub use output::OutputFormat;

/// Noted - derived views over hierarchical notes
#[derive(Parser, Debug)]
#[command(name = "noted")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log debug diagnostics to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "trace", "noted_core=debug")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true, env = "NOTED_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the merged search document of every note
    Index(IndexArgs),

    /// Print the title token map used for auto-linking
    Links(LinksArgs),

    /// List notes in recency order
    List(ListArgs),

    /// Search notes and everything nested inside them
    Search(SearchArgs),

    /// Link note titles mentioned in text
    Autolink(AutolinkArgs),
}

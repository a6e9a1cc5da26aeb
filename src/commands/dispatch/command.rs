//! Command trait and context for dispatching commands

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::cli::Cli;
use noted_core::bail_usage;
use noted_core::config::NotedConfig;
use noted_core::error::{NotedError, Result};
use noted_core::memo::Selectors;
use noted_core::store::NoteStore;
use tracing::debug;

/// Explicit `--config` file, or the user's configuration
pub fn load_config(cli: &Cli) -> Result<NotedConfig> {
    match &cli.config {
        Some(path) => {
            if !path.exists() {
                bail_usage!(format!("config file not found: {}", path.display()));
            }
            NotedConfig::load(path)
        }
        None => NotedConfig::discover(),
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: NotedConfig,
    pub selectors: Selectors,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: NotedConfig, start: Instant) -> Self {
        let selectors = Selectors::with_link_config(config.links.clone());
        Self {
            cli,
            config,
            selectors,
            start,
        }
    }

    /// Read a snapshot file into a shareable store
    pub fn load_snapshot(&self, path: &Path) -> Result<Arc<NoteStore>> {
        if !path.exists() {
            return Err(NotedError::not_found("snapshot", path.display()));
        }
        let store = NoteStore::load(path)?;
        debug!(elapsed = ?self.start.elapsed(), notes = store.len(), "load_snapshot");
        Ok(Arc::new(store))
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
        println!("noted {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Search, link and ordering views over a notes snapshot.");
        println!();
        println!("Run `noted --help` for usage information.");
        Ok(())
    }
}

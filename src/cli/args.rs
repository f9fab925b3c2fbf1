//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `sync`: Regenerate the web listing from the mobile listing (default)
//! - `check`: Report counts and missing translations without writing anything
//! - `init`: Write a configuration file with the default paths

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// The command to run; `sync` when none was given.
    pub fn command_or_default(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Sync(SyncCommand::default()))
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Print extraction details for each listing
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Default, Args)]
pub struct SyncCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Default, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Regenerate the web country listing with flags from the mobile listing (default)
    Sync(SyncCommand),
    /// Report country counts and missing translations without writing output
    Check(CheckCommand),
    /// Initialize a new .dialsyncrc.json configuration file
    Init,
}

use std::{env, fs, path::Path};

use anyhow::{Context, Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, CommandSummary, InitSummary, check::check, sync::sync},
};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Dispatch to the handler for the parsed command.
///
/// Runs `sync` when no subcommand was given.
pub fn run(args: Arguments) -> Result<CommandResult> {
    let root = env::current_dir().context("Failed to determine working directory")?;

    match args.command_or_default() {
        Command::Sync(cmd) => sync(&root, cmd),
        Command::Check(cmd) => check(&root, cmd),
        Command::Init => {
            init(&root)?;
            Ok(CommandResult {
                summary: CommandSummary::Init(InitSummary { created: true }),
                exit_on_missing: false,
            })
        }
    }
}

fn init(root: &Path) -> Result<()> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write file: {}", config_path.display()))?;
    Ok(())
}

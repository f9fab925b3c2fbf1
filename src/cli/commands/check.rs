use std::path::Path;

use anyhow::Result;

use super::{CheckSummary, CommandResult, CommandSummary, helper::load_inputs};
use crate::cli::CheckCommand;

/// Extract and reconcile without writing output.
pub fn check(root: &Path, cmd: CheckCommand) -> Result<CommandResult> {
    let (ctx, vocabularies) = load_inputs(root, &cmd.common)?;

    Ok(CommandResult {
        summary: CommandSummary::Check(CheckSummary {
            reconciliation: ctx.reconcile(&vocabularies),
        }),
        exit_on_missing: true,
    })
}

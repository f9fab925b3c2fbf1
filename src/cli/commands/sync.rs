use std::path::Path;

use anyhow::Result;

use super::{CommandResult, CommandSummary, SyncSummary, helper::load_inputs};
use crate::cli::SyncCommand;

/// Run the full pipeline and write the regenerated web listing.
///
/// The output file is written only after every input has loaded.
pub fn sync(root: &Path, cmd: SyncCommand) -> Result<CommandResult> {
    let (ctx, vocabularies) = load_inputs(root, &cmd.common)?;
    let reconciliation = ctx.reconcile(&vocabularies);

    ctx.write_listing()?;

    Ok(CommandResult {
        summary: CommandSummary::Sync(SyncSummary {
            reconciliation,
            output: ctx.config.output.clone(),
        }),
        exit_on_missing: false,
    })
}

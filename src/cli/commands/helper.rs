use std::path::Path;

use anyhow::Result;

use super::{ExtractionStats, ListingCounts};
use crate::{
    cli::{CommonArgs, report},
    config::load_config,
    core::{SyncContext, Vocabularies},
};

/// Load config from `root` (or its ancestors), extract both listings and
/// report their counts, then load both vocabularies.
///
/// The counts reach stdout before any message file is opened.
pub fn load_inputs(root: &Path, common: &CommonArgs) -> Result<(SyncContext, Vocabularies)> {
    let loaded = load_config(root)?;
    let ctx = SyncContext::load(root, loaded.config)?;

    report::print_counts(&listing_counts(&ctx, loaded.from_file), common.verbose);

    let vocabularies = ctx.load_vocabularies()?;
    Ok((ctx, vocabularies))
}

fn listing_counts(ctx: &SyncContext, config_from_file: bool) -> ListingCounts {
    ListingCounts {
        mobile: ExtractionStats::from(&ctx.mobile_countries),
        web: ExtractionStats::from(&ctx.web_countries),
        config_from_file,
    }
}

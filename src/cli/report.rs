//! Report formatting and printing utilities.
//!
//! Results go to stdout; verbose extraction notes go to stderr.
//! Each printer has a `_to` variant taking a writer, for tests.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CheckSummary, CommandResult, CommandSummary, ExtractionStats, InitSummary, ListingCounts,
    SyncSummary,
};
use crate::{config::CONFIG_FILE_NAME, core::Reconciliation};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

pub fn print_to<W: Write>(result: &CommandResult, out: &mut W) {
    match &result.summary {
        CommandSummary::Sync(summary) => print_sync(summary, out),
        CommandSummary::Check(summary) => print_check(summary, out),
        CommandSummary::Init(summary) => print_init(summary, out),
    }
}

/// The two count lines, plus extraction notes on stderr when verbose.
pub fn print_counts(counts: &ListingCounts, verbose: bool) {
    print_counts_to(
        counts,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

pub fn print_counts_to<W: Write, E: Write>(
    counts: &ListingCounts,
    verbose: bool,
    out: &mut W,
    err: &mut E,
) {
    if verbose {
        if !counts.config_from_file {
            let _ = writeln!(
                err,
                "{} no {} found, using default paths",
                "note:".bold(),
                CONFIG_FILE_NAME
            );
        }
        print_extraction_note("mobile listing", &counts.mobile, err);
        print_extraction_note("web listing", &counts.web, err);
    }

    let _ = writeln!(out, "Mobile listing countries found: {}", counts.mobile.records);
    let _ = writeln!(out, "Web listing countries found: {}", counts.web.records);
}

fn print_sync<W: Write>(summary: &SyncSummary, out: &mut W) {
    print_missing(&summary.reconciliation, out);
    let _ = writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Generated {}", summary.output).green()
    );
}

fn print_check<W: Write>(summary: &CheckSummary, out: &mut W) {
    print_missing(&summary.reconciliation, out);

    let missing = summary.reconciliation.missing_count();
    if missing == 0 {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            "All countries are translated".green()
        );
    } else {
        let noun = if missing == 1 {
            "translation"
        } else {
            "translations"
        };
        let _ = writeln!(
            out,
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} missing country {}", missing, noun).red()
        );
    }
}

fn print_init<W: Write>(summary: &InitSummary, out: &mut W) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

/// Both missing-name lists, in mobile listing order.
fn print_missing<W: Write>(reconciliation: &Reconciliation, out: &mut W) {
    let _ = writeln!(
        out,
        "Missing in mobile translations: {:?}",
        reconciliation.missing_mobile
    );
    let _ = writeln!(
        out,
        "Missing in web translations: {:?}",
        reconciliation.missing_web
    );
}

fn print_extraction_note<E: Write>(listing: &str, stats: &ExtractionStats, err: &mut E) {
    let _ = writeln!(
        err,
        "{} {}: {} of {} candidate records extracted",
        "note:".bold(),
        listing,
        stats.records,
        stats.candidates
    );

    let dropped = stats.dropped();
    if dropped > 0 {
        let _ = writeln!(
            err,
            "{} {} {} in {} did not match the expected format",
            "warning:".bold().yellow(),
            dropped,
            if dropped == 1 { "record" } else { "records" },
            listing
        );
    }
}

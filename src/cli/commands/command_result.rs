use crate::core::{Extraction, Reconciliation};

use crate::cli::ExitStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionStats {
    pub records: usize,
    pub candidates: usize,
}

impl ExtractionStats {
    pub fn dropped(&self) -> usize {
        self.candidates.saturating_sub(self.records)
    }
}

impl From<&Extraction> for ExtractionStats {
    fn from(extraction: &Extraction) -> Self {
        Self {
            records: extraction.len(),
            candidates: extraction.candidates,
        }
    }
}

/// Listing counts, reported before the message files are loaded.
#[derive(Debug)]
pub struct ListingCounts {
    pub mobile: ExtractionStats,
    pub web: ExtractionStats,
    /// True if paths came from a config file, false if using defaults.
    pub config_from_file: bool,
}

#[derive(Debug)]
pub struct SyncSummary {
    pub reconciliation: Reconciliation,
    /// Output path as configured.
    pub output: String,
}

#[derive(Debug)]
pub struct CheckSummary {
    pub reconciliation: Reconciliation,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

#[derive(Debug)]
pub enum CommandSummary {
    Sync(SyncSummary),
    Check(CheckSummary),
    Init(InitSummary),
}

/// Result of running dialsync commands
pub struct CommandResult {
    pub summary: CommandSummary,
    /// If true, missing translations turn into `ExitStatus::Failure`.
    pub exit_on_missing: bool,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        let complete = match &self.summary {
            CommandSummary::Sync(summary) => summary.reconciliation.is_complete(),
            CommandSummary::Check(summary) => summary.reconciliation.is_complete(),
            CommandSummary::Init(_) => true,
        };

        if self.exit_on_missing && !complete {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

//! Record extraction from listing source files.
//!
//! Each listing syntax has its own extractor:
//! - `dart`: `Country(name: ..., code: ..., flag: ..., min: ..., max: ...)` calls
//! - `typescript`: `{ "name": ..., "code": ..., "min": ..., "max": ..., "flag"?: ... }` objects
//!
//! Extraction is pattern based. A construct that does not match its grammar
//! exactly is skipped without an error; the `candidates` counter on
//! [`Extraction`] is the only trace such a record leaves.

mod dart;
mod typescript;

pub use dart::extract_dart_countries;
pub use typescript::extract_ts_countries;

use crate::core::CountryRecord;

/// Records extracted from one listing, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub records: Vec<CountryRecord>,
    /// Number of constructs in the text that looked like a record.
    pub candidates: usize,
}

impl Extraction {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Candidates that did not match the full record grammar.
    pub fn dropped(&self) -> usize {
        self.candidates.saturating_sub(self.records.len())
    }
}

/// Parse an integer field captured by `[0-9]+`.
///
/// Values above `u64::MAX` are treated like any other non-match.
fn parse_length(text: &str) -> Option<u64> {
    text.parse().ok()
}

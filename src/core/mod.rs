//! Core sync pipeline.
//!
//! 1. **Extraction**: listing sources → [`Extraction`] (records in source order)
//! 2. **Reconciliation**: mobile records × vocabularies → missing names
//! 3. **Generation**: mobile records → TypeScript listing
//!
//! [`SyncContext`] loads both listings and drives the three stages.

pub mod context;
pub mod extract;
pub mod generate;
pub mod messages;
pub mod reconcile;
mod record;

pub use context::{SyncContext, Vocabularies};
pub use extract::{Extraction, extract_dart_countries, extract_ts_countries};
pub use generate::render_listing;
pub use messages::{Vocabulary, load_vocabulary, parse_vocabulary};
pub use reconcile::{Reconciliation, find_missing, reconcile};
pub use record::CountryRecord;

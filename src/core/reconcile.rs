//! Cross-reference of listing records against translation vocabularies.

use crate::core::{CountryRecord, Vocabulary};

/// Names missing from each vocabulary, in record order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub missing_mobile: Vec<String>,
    pub missing_web: Vec<String>,
}

impl Reconciliation {
    pub fn is_complete(&self) -> bool {
        self.missing_mobile.is_empty() && self.missing_web.is_empty()
    }

    pub fn missing_count(&self) -> usize {
        self.missing_mobile.len() + self.missing_web.len()
    }
}

/// Check every record against both vocabularies.
pub fn reconcile(
    records: &[CountryRecord],
    mobile: &Vocabulary,
    web: &Vocabulary,
) -> Reconciliation {
    Reconciliation {
        missing_mobile: find_missing(records, mobile),
        missing_web: find_missing(records, web),
    }
}

/// Names of records whose name is not a vocabulary key.
///
/// Checked per record: a record name repeated in the listing is reported
/// once for each occurrence that is missing.
pub fn find_missing(records: &[CountryRecord], vocabulary: &Vocabulary) -> Vec<String> {
    records
        .iter()
        .filter(|record| !vocabulary.contains(&record.name))
        .map(|record| record.name.clone())
        .collect()
}

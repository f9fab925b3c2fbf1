//! Country name vocabularies loaded from translation message files.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

/// Top-level key holding the country name translations.
pub const COUNTRIES_KEY: &str = "countries";

/// Translated country names keyed by canonical name.
///
/// Only key presence matters to reconciliation; values are kept as loaded.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    entries: Map<String, Value>,
}

impl Vocabulary {
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(name, display)| (name.into(), Value::String(display.into())))
            .collect::<Map<String, Value>>();
        Self { entries }
    }
}

/// Parse a message document and take its `countries` object.
///
/// A document without `countries` (or with a non-object value there) gives
/// an empty vocabulary. A document whose root is not an object is rejected.
pub fn parse_vocabulary(content: &str) -> Result<Vocabulary> {
    let json: Value = serde_json::from_str(content)?;

    let Value::Object(mut root) = json else {
        bail!("Root of message file must be an object");
    };

    let entries = match root.remove(COUNTRIES_KEY) {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    };

    Ok(Vocabulary { entries })
}

pub fn load_vocabulary(path: &Path) -> Result<Vocabulary> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read message file: {}", path.display()))?;

    parse_vocabulary(&content)
        .with_context(|| format!("Failed to parse message file: {}", path.display()))
}

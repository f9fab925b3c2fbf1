use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};

use crate::{
    config::Config,
    core::{
        Extraction, Reconciliation, Vocabulary, extract_dart_countries, extract_ts_countries,
        load_vocabulary, reconcile, render_listing,
    },
};

/// The two listings of one run, extracted up front.
///
/// Construction reads both listings; a missing file fails the whole load.
/// Message files are loaded separately through [`SyncContext::load_vocabularies`].
pub struct SyncContext {
    pub config: Config,
    /// Directory that relative config paths are resolved against.
    pub root: PathBuf,

    /// Records from the Dart listing. Source of truth for order and flags.
    pub mobile_countries: Extraction,
    /// Records from the TypeScript listing. Only counted, never merged.
    pub web_countries: Extraction,
}

/// Country vocabularies from the mobile and web message files.
#[derive(Debug)]
pub struct Vocabularies {
    pub mobile: Vocabulary,
    pub web: Vocabulary,
}

impl SyncContext {
    pub fn load(root: &Path, config: Config) -> Result<Self> {
        let mobile_source = read_listing(&root.join(&config.mobile_listing), "mobile listing")?;
        let mobile_countries = extract_dart_countries(&mobile_source);

        let web_source = read_listing(&root.join(&config.web_listing), "web listing")?;
        let web_countries = extract_ts_countries(&web_source);

        Ok(Self {
            config,
            root: root.to_path_buf(),
            mobile_countries,
            web_countries,
        })
    }

    pub fn load_vocabularies(&self) -> Result<Vocabularies> {
        let mobile = load_vocabulary(&self.root.join(&self.config.mobile_messages))?;
        let web = load_vocabulary(&self.root.join(&self.config.web_messages))?;
        Ok(Vocabularies { mobile, web })
    }

    /// Mobile listing names missing from each vocabulary.
    pub fn reconcile(&self, vocabularies: &Vocabularies) -> Reconciliation {
        reconcile(
            &self.mobile_countries.records,
            &vocabularies.mobile,
            &vocabularies.web,
        )
    }

    pub fn render_listing(&self) -> Result<String> {
        render_listing(&self.mobile_countries.records)
    }

    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.config.output)
    }

    /// Render the web listing from mobile records and write it to the output path.
    pub fn write_listing(&self) -> Result<PathBuf> {
        let content = self.render_listing()?;
        let path = self.output_path();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        Ok(path)
    }
}

fn read_listing(path: &Path, what: &str) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}: {}", what, path.display()))
}

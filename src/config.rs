use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".dialsyncrc.json";

/// Locations of the listings, message files and generated output.
///
/// Relative paths are resolved against the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_mobile_listing")]
    pub mobile_listing: String,
    #[serde(default = "default_web_listing")]
    pub web_listing: String,
    #[serde(default = "default_mobile_messages")]
    pub mobile_messages: String,
    #[serde(default = "default_web_messages")]
    pub web_messages: String,
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_mobile_listing() -> String {
    "mobile-app/lib/data/countries.dart".to_string()
}

fn default_web_listing() -> String {
    "web-platform/src/lib/countries.ts".to_string()
}

fn default_mobile_messages() -> String {
    "mobile-app/lib/i18n/strings.i18n.json".to_string()
}

fn default_web_messages() -> String {
    "web-platform/messages/en.json".to_string()
}

fn default_output() -> String {
    "new_countries.ts".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mobile_listing: default_mobile_listing(),
            web_listing: default_web_listing(),
            mobile_messages: default_mobile_messages(),
            web_messages: default_web_messages(),
            output: default_output(),
        }
    }
}

impl Config {
    fn inputs(&self) -> [(&'static str, &str); 4] {
        [
            ("mobileListing", self.mobile_listing.as_str()),
            ("webListing", self.web_listing.as_str()),
            ("mobileMessages", self.mobile_messages.as_str()),
            ("webMessages", self.web_messages.as_str()),
        ]
    }

    /// Validate configuration values.
    ///
    /// Every path must be set, and the output must not be one of the inputs.
    pub fn validate(&self) -> Result<()> {
        for (field, path) in self.inputs() {
            if path.trim().is_empty() {
                bail!("Empty path in '{}'", field);
            }
        }
        if self.output.trim().is_empty() {
            bail!("Empty path in 'output'");
        }

        let output = normalized(&self.output);
        for (field, path) in self.inputs() {
            if normalized(path) == output {
                bail!(
                    "'output' must not overwrite an input file: \"{}\" is also '{}'",
                    self.output,
                    field
                );
            }
        }

        Ok(())
    }
}

/// Drop `.` components so `./a/b` and `a/b` compare equal.
fn normalized(path: &str) -> PathBuf {
    Path::new(path)
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

//! Default configuration file generation.
//!
//! The generated file is built with a small builder that aligns the trailing
//! comments of every setting into one column.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::common::constants::*;

/// Create a default config file at `path`, creating parent directories as needed.
pub fn create_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    fs::write(path, default_config_content())
        .with_context(|| format!("Failed to write default config to {}", path.display()))
}

/// Content of a freshly generated `suntable.toml`.
pub(crate) fn default_config_content() -> String {
    let mut content = ConfigBuilder::new()
        .add_section("Location")
        .add_setting(
            "latitude",
            &format!("{DEFAULT_LATITUDE:.4}"),
            &format!("Geographic latitude ({MINIMUM_LATITUDE} to {MAXIMUM_LATITUDE})"),
        )
        .add_setting(
            "longitude",
            &format!("{DEFAULT_LONGITUDE:.4}"),
            &format!("Geographic longitude ({MINIMUM_LONGITUDE} to {MAXIMUM_LONGITUDE})"),
        )
        .add_commented_setting(
            "timezone",
            "\"Europe/London\"",
            "IANA timezone for displayed times (default: system)",
        )
        .add_section("Calendar")
        .add_setting(
            "days_before",
            &DEFAULT_DAYS_BEFORE.to_string(),
            &format!("Days shown before today (0-{MAXIMUM_DAYS_RANGE})"),
        )
        .add_setting(
            "days_after",
            &DEFAULT_DAYS_AFTER.to_string(),
            &format!("Days shown after today (0-{MAXIMUM_DAYS_RANGE})"),
        )
        .build();
    content.push('\n');
    content
}

struct ConfigBuilder {
    entries: Vec<ConfigEntry>,
}

enum ConfigEntry {
    Section(String),
    Setting { line: String, comment: String },
}

impl ConfigBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn add_section(mut self, title: &str) -> Self {
        self.entries.push(ConfigEntry::Section(format!("#[{title}]")));
        self
    }

    fn add_setting(mut self, key: &str, value: &str, comment: &str) -> Self {
        self.entries.push(ConfigEntry::Setting {
            line: format!("{key} = {value}"),
            comment: format!("# {comment}"),
        });
        self
    }

    /// A setting that is shown as an example but left disabled.
    fn add_commented_setting(mut self, key: &str, value: &str, comment: &str) -> Self {
        self.entries.push(ConfigEntry::Setting {
            line: format!("#{key} = {value}"),
            comment: format!("# {comment}"),
        });
        self
    }

    fn build(self) -> String {
        // Align all comments one space after the longest setting line
        let max_width = self
            .entries
            .iter()
            .filter_map(|entry| match entry {
                ConfigEntry::Setting { line, .. } => Some(line.len()),
                ConfigEntry::Section(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;

        let mut result = Vec::new();
        let mut first_section = true;

        for entry in self.entries {
            match entry {
                ConfigEntry::Section(title) => {
                    if !first_section {
                        result.push(String::new());
                    }
                    result.push(title);
                    first_section = false;
                }
                ConfigEntry::Setting { line, comment } => {
                    let padding = " ".repeat(max_width - line.len());
                    result.push(format!("{line}{padding}{comment}"));
                }
            }
        }

        result.join("\n")
    }
}

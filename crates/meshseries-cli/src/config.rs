//! `.meshseries.toml` discovery and merging
//!
//! Configuration files can be placed in:
//! - User home directory: `~/.meshseries.toml` (user defaults)
//! - Project directory: `./.meshseries.toml` (project defaults)
//! - Custom location via `--config` (replaces both)
//!
//! Precedence order (highest to lowest):
//! 1. Command-line arguments
//! 2. Project config
//! 3. User config
//! 4. Built-in defaults

use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use meshseries_core::EntryOrder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in home and working directories
pub const CONFIG_FILE_NAME: &str = ".meshseries.toml";

/// Output written by `meshseries load`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Markdown geometry summary (default)
    #[default]
    Summary,
    /// Full mesh data as JSON
    Json,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Defaults for how inputs are resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load: Option<LoadConfig>,

    /// Defaults for what gets written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    /// Directory entry order (listing or lexicographic)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_order: Option<EntryOrder>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format (summary or json)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretty: Option<bool>,
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path must load; discovered files that fail to parse are
    /// reported and ignored.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        let user_config = dirs::home_dir()
            .map(|home| home.join(CONFIG_FILE_NAME))
            .and_then(|path| Self::load_optional(&path));
        let project_config = Self::load_optional(&PathBuf::from(CONFIG_FILE_NAME));
        Ok(Self::merge(user_config, project_config))
    }

    fn load_optional(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        match Self::load_from_file(path) {
            Ok(config) => {
                log::debug!("Loaded config from {}", path.display());
                Some(config)
            }
            Err(e) => {
                eprintln!("{} {e:#}", "Warning:".yellow().bold());
                None
            }
        }
    }

    /// Merge configs with precedence project > user > defaults
    pub fn merge(user_config: Option<Self>, project_config: Option<Self>) -> Self {
        let mut merged = user_config.unwrap_or_default();

        if let Some(project) = project_config {
            if let Some(load) = project.load {
                let mut merged_load = merged.load.unwrap_or_default();
                if let Some(entry_order) = load.entry_order {
                    merged_load.entry_order = Some(entry_order);
                }
                merged.load = Some(merged_load);
            }

            if let Some(output) = project.output {
                let mut merged_output = merged.output.unwrap_or_default();
                if let Some(format) = output.format {
                    merged_output.format = Some(format);
                }
                if let Some(pretty) = output.pretty {
                    merged_output.pretty = Some(pretty);
                }
                merged.output = Some(merged_output);
            }
        }

        merged
    }

    /// Directory ordering: `--sort` flag, then config, then listing order
    pub fn resolve_entry_order(&self, sort_flag: bool) -> EntryOrder {
        if sort_flag {
            return EntryOrder::Lexicographic;
        }
        self.load
            .and_then(|load| load.entry_order)
            .unwrap_or_default()
    }

    /// Output format: CLI value, then config, then summary
    pub fn resolve_format(&self, cli_value: Option<OutputFormat>) -> OutputFormat {
        cli_value
            .or_else(|| self.output.and_then(|output| output.format))
            .unwrap_or_default()
    }

    /// JSON pretty-printing: `--compact` flag, then config, then pretty
    pub fn resolve_pretty(&self, compact_flag: bool) -> bool {
        if compact_flag {
            return false;
        }
        self.output
            .and_then(|output| output.pretty)
            .unwrap_or(true)
    }
}

//! Report configuration stored in `listings.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::criteria::DEFAULT_STATES;

/// Config file read from the working directory unless `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "listings.toml";
/// Listing export read unless configured otherwise.
pub const DEFAULT_INPUT_FILE: &str = "property_listings.json";

/// How the listing array is split into records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framing {
    /// One array element per line; read incrementally.
    #[default]
    Lines,
    /// A standard JSON array with any layout; read as one document.
    Array,
}

/// What to do with a line that does not parse as a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidRecordPolicy {
    /// Abort the run.
    #[default]
    Fail,
    /// Log a warning and continue with the next line.
    Skip,
}

/// Report configuration (TOML).
///
/// Missing fields default to the stock export layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListingsConfig {
    /// Listing export path, relative to the working directory.
    pub input_path: PathBuf,

    /// State codes accepted on the command line.
    pub allowed_states: Vec<String>,

    pub framing: Framing,

    pub on_invalid_record: InvalidRecordPolicy,
}

impl Default for ListingsConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            allowed_states: DEFAULT_STATES.iter().map(|s| s.to_string()).collect(),
            framing: Framing::default(),
            on_invalid_record: InvalidRecordPolicy::default(),
        }
    }
}

impl ListingsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(anyhow!("input_path must not be empty"));
        }
        if self.allowed_states.is_empty() {
            return Err(anyhow!("allowed_states must be a non-empty array"));
        }
        if self.allowed_states.iter().any(|state| state.trim().is_empty()) {
            return Err(anyhow!("allowed_states entries must not be blank"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ListingsConfig::default()`.
pub fn load_config(path: &Path) -> Result<ListingsConfig> {
    if !path.exists() {
        let cfg = ListingsConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ListingsConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

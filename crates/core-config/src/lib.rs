//! Configuration loading and parsing.
//!
//! Parses `tailpad.toml` (or an override path provided by the binary) for the
//! capacities of the engine's bounded resources:
//!
//! ```toml
//! [history]
//! capacity = 5000
//!
//! [clipboard]
//! capacity = 5000
//! ```
//!
//! Missing sections fall back to defaults. Unknown fields are ignored. A file
//! that fails to parse is logged and replaced by defaults rather than aborting
//! startup.

use anyhow::Result;
use core_state::{CLIPBOARD_CAPACITY_DEFAULT, EngineLimits, HISTORY_CAPACITY_DEFAULT};
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "tailpad.toml";

#[derive(Debug, Deserialize, Clone)]
pub struct HistoryConfig {
    #[serde(default = "HistoryConfig::default_capacity")]
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: Self::default_capacity(),
        }
    }
}

impl HistoryConfig {
    const fn default_capacity() -> usize {
        HISTORY_CAPACITY_DEFAULT
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClipboardConfig {
    #[serde(default = "ClipboardConfig::default_capacity")]
    pub capacity: usize,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            capacity: Self::default_capacity(),
        }
    }
}

impl ClipboardConfig {
    const fn default_capacity() -> usize {
        CLIPBOARD_CAPACITY_DEFAULT
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub file: ConfigFile,    // parsed (or default) data
    pub source: Option<PathBuf>,
}

/// Best-effort config path following platform conventions (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("tailpad").join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), "config_loaded");
            Ok(Config {
                file,
                source: Some(path),
            })
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed");
            Ok(Config::default())
        }
    }
}

impl Config {
    /// Engine capacities. History capacity is raised to at least 1 so undo is
    /// never silently disabled; clipboard capacity is raised to at least 1 (a
    /// clipboard of capacity 1 holds nothing).
    pub fn engine_limits(&self) -> EngineLimits {
        let raw_history = self.file.history.capacity;
        let raw_clipboard = self.file.clipboard.capacity;
        let history_capacity = raw_history.max(1);
        let clipboard_capacity = raw_clipboard.max(1);
        if history_capacity != raw_history || clipboard_capacity != raw_clipboard {
            info!(
                target: "config",
                raw_history,
                raw_clipboard,
                history_capacity,
                clipboard_capacity,
                "capacity_clamped"
            );
        }
        EngineLimits {
            history_capacity,
            clipboard_capacity,
        }
    }
}

//! Application Configuration
//!
//! Optional JSON document stored next to the room list.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::labels::Locale;
use crate::storage::{KeyValueStore, StorageError};

/// Default storage key for the room list.
pub const DEFAULT_STORAGE_KEY: &str = "salas";

/// Storage key holding the configuration document.
pub const CONFIG_KEY: &str = "room-manager.config";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Storage(#[from] StorageError),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Key the room list is stored under.
    pub storage_key: String,

    /// UI and alert language.
    pub locale: Locale,

    /// Accept an edit that resubmits the room's current number.
    pub allow_unchanged_edit: bool,

    /// Maximum level sent to the browser console.
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            locale: Locale::default(),
            allow_unchanged_edit: true,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from [`CONFIG_KEY`].
    ///
    /// Returns default config if the key is not set.
    pub fn load<S: KeyValueStore>(store: &S) -> Result<Self, ConfigError> {
        match store.get(CONFIG_KEY)? {
            Some(json) => Self::from_json(&json),
            None => Ok(Self::default()),
        }
    }
}

//! Configuration for the tuit CLI.
//!
//! Settings come from an optional `tuit.toml` in the working directory (or
//! an explicit `--config` path); command-line flags override whatever the
//! file provides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TuitError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "tuit.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Directory searched for `.tui` files when no inputs are given.
    #[serde(default)]
    pub input_dir: Option<String>,

    /// Directory generated `.go` files are written to.
    #[serde(default)]
    pub output_dir: Option<String>,
}

impl Config {
    /// Load from the default location; a missing file yields defaults.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load_from_path(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load from an explicit path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TuitError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| TuitError::Config(format!("cannot parse {}: {}", path.display(), e)))
    }
}

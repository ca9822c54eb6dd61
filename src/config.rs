//! Configuration loading
//!
//! Reads `~/.config/typeahead/config.toml`. A missing file is not an error;
//! every field falls back to its default.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{Config, ServerConfig, WidgetConfig};

use crate::error::TypeaheadError;

const CONFIG_DIR: &str = "typeahead";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from an explicit path, or from the default location
///
/// An explicit path must exist and parse. The default location is optional:
/// when it is absent or unreadable, defaults are used and a warning is logged.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, TypeaheadError> {
    if let Some(path) = explicit {
        return load_config_from_path(path);
    }

    let Some(path) = config_path() else {
        return Ok(Config::default());
    };

    if !path.exists() {
        log::debug!("No config file at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    match load_config_from_path(&path) {
        Ok(config) => Ok(config),
        Err(e) => {
            log::warn!("Ignoring config at {}: {}", path.display(), e);
            Ok(Config::default())
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, TypeaheadError> {
    let contents = fs::read_to_string(path)?;
    parse_config_toml(&contents)
}

pub fn parse_config_toml(content: &str) -> Result<Config, TypeaheadError> {
    let config: Config = toml::from_str(content)?;
    // Surface source list problems at load time rather than at first search
    config.source_list()?;
    Ok(config)
}

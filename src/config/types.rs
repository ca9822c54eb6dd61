// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

use crate::error::TypeaheadError;
use crate::suggestion::{SourceList, Suggestion};

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_BLUR_GRACE_MS: u64 = 200;

/// Query endpoint section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_addr")]
    pub addr: String,
}

fn default_addr() -> String {
    DEFAULT_ADDR.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            addr: default_addr(),
        }
    }
}

/// Typeahead widget section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WidgetConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_blur_grace_ms")]
    pub blur_grace_ms: u64,
    /// Search endpoint URL; the widget queries in-process when unset
    #[serde(default)]
    pub endpoint: Option<String>,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_blur_grace_ms() -> u64 {
    DEFAULT_BLUR_GRACE_MS
}

impl WidgetConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn blur_grace(&self) -> Duration {
        Duration::from_millis(self.blur_grace_ms)
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        WidgetConfig {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            blur_grace_ms: DEFAULT_BLUR_GRACE_MS,
            endpoint: None,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub widget: WidgetConfig,
    /// Replaces the built-in suggestion list when non-empty
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

impl Config {
    /// Build the validated source list this config describes
    pub fn source_list(&self) -> Result<SourceList, TypeaheadError> {
        if self.suggestions.is_empty() {
            Ok(SourceList::default())
        } else {
            SourceList::new(self.suggestions.clone())
        }
    }
}

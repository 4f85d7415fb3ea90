// config.rs - Editor options loaded from TOML or JSON

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::header::{DEFAULT_TOOLBAR_KEYS, ToolbarEntry};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AiOptions {
    pub model: String,
    pub endpoint: Option<String>,
}

/// Options the editor hands to the toolbar and every button's `on_create`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EditorOptions {
    /// Toolbar entries; absent or empty means the default layout
    pub toolbar_keys: Option<Vec<ToolbarEntry>>,
    pub locale: Option<String>,
    /// Label overrides: locale -> key -> text
    pub i18n: HashMap<String, HashMap<String, String>>,
    pub ai: Option<AiOptions>,
    pub font_families: Option<Vec<String>>,
    pub font_sizes: Option<Vec<String>>,
    pub theme: Option<String>,
}

impl EditorOptions {
    /// Load options from `path`; `.json` files are read as JSON, anything
    /// else as TOML
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(toml::from_str(&content)?)
        }
    }

    /// Entries the toolbar is built from
    pub fn toolbar_entries(&self) -> Vec<ToolbarEntry> {
        match &self.toolbar_keys {
            Some(keys) if !keys.is_empty() => keys.clone(),
            _ => DEFAULT_TOOLBAR_KEYS
                .iter()
                .map(|key| ToolbarEntry::from(*key))
                .collect(),
        }
    }

    pub fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or(crate::i18n::DEFAULT_LOCALE)
    }
}

/// `<config dir>/richbar/config.toml`, when the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("richbar").join("config.toml"))
}

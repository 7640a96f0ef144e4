//! This module handles the deployment configuration, including loading and
//! saving the `settings.toml` file that carries branding and locale defaults.
//!
//! # Examples
//!
//! ```no_run
//! use aurora_i18n::config;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Point the runtime at a deployment-specific catalog directory
//! config.catalog_dir = Some("/srv/aurora/locales".into());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;
pub mod paths;

pub use defaults::{
    DEFAULT_LOCALE_TAG, DEFAULT_SITE_NAME, DIAGNOSTICS_CHANNEL_CAPACITY, LANGUAGE_PREF_KEY,
    TITLE_RESYNC_DELAY_MS, WELCOME_PLACEHOLDER,
};

const CONFIG_FILE: &str = "settings.toml";

/// Deployment configuration for the locale subsystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Product name injected into catalog branding fields.
    pub site_name: Option<String>,
    /// Locale tag used when detection finds nothing better.
    #[serde(default)]
    pub default_locale: Option<String>,
    /// Optional on-disk catalog directory overriding the embedded bundles.
    #[serde(default)]
    pub catalog_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_name: Some(DEFAULT_SITE_NAME.to_string()),
            default_locale: Some(DEFAULT_LOCALE_TAG.to_string()),
            catalog_dir: None,
        }
    }
}

impl Config {
    /// Effective site name, falling back to [`DEFAULT_SITE_NAME`].
    #[must_use]
    pub fn effective_site_name(&self) -> &str {
        self.site_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_SITE_NAME)
    }

    /// Effective default locale, coercing unknown or absent tags to the
    /// crate fallback.
    #[must_use]
    pub fn effective_default_locale(&self) -> crate::locale::Locale {
        self.default_locale
            .as_deref()
            .and_then(crate::locale::Locale::from_tag)
            .unwrap_or(crate::locale::Locale::FALLBACK)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    paths::get_config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

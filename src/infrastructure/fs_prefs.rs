// SPDX-License-Identifier: MPL-2.0
//! Preference store backed by a TOML file.
//!
//! Values live in `preferences.toml` inside the panel config directory,
//! next to `settings.toml`. The file is read on every `get`, so a value
//! written by another process in the meantime is picked up; writes go
//! through a read-modify-write of the whole table.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::config::paths;
use crate::error::Result;
use crate::port::prefs::PreferenceStore;

const PREFS_FILE: &str = "preferences.toml";

/// Durable key/value preference store.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    /// Store in the default config directory. Returns `None` when the
    /// platform exposes no config directory.
    #[must_use]
    pub fn new_default() -> Option<Self> {
        paths::get_config_dir().map(|mut path| {
            path.push(PREFS_FILE);
            Self { path }
        })
    }

    /// Store inside an explicit directory. For tests and portable
    /// deployments.
    #[must_use]
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let mut path = dir.into();
        path.push(PREFS_FILE);
        Self { path }
    }

    fn read_table(&self) -> BTreeMap<String, String> {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        toml::from_str(&content).unwrap_or_default()
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.read_table().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut table = self.read_table();
        table.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(&table)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LANGUAGE_PREF_KEY;
    use tempfile::tempdir;

    #[test]
    fn get_on_missing_file_returns_none() {
        let dir = tempdir().expect("temp dir");
        let prefs = FilePreferences::in_dir(dir.path());
        assert_eq!(prefs.get(LANGUAGE_PREF_KEY), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let dir = tempdir().expect("temp dir");
        let prefs = FilePreferences::in_dir(dir.path());

        prefs.set(LANGUAGE_PREF_KEY, "zh-TW").expect("set succeeds");
        assert_eq!(prefs.get(LANGUAGE_PREF_KEY).as_deref(), Some("zh-TW"));
    }

    #[test]
    fn values_survive_a_new_instance() {
        let dir = tempdir().expect("temp dir");
        FilePreferences::in_dir(dir.path())
            .set(LANGUAGE_PREF_KEY, "fa-IR")
            .expect("set succeeds");

        let reopened = FilePreferences::in_dir(dir.path());
        assert_eq!(reopened.get(LANGUAGE_PREF_KEY).as_deref(), Some("fa-IR"));
    }

    #[test]
    fn set_preserves_other_keys() {
        let dir = tempdir().expect("temp dir");
        let prefs = FilePreferences::in_dir(dir.path());
        prefs.set("theme", "dark").expect("set theme");
        prefs.set(LANGUAGE_PREF_KEY, "ko-KR").expect("set language");

        assert_eq!(prefs.get("theme").as_deref(), Some("dark"));
        assert_eq!(prefs.get(LANGUAGE_PREF_KEY).as_deref(), Some("ko-KR"));
    }

    #[test]
    fn set_creates_missing_directories() {
        let dir = tempdir().expect("temp dir");
        let nested = dir.path().join("deep").join("config");
        let prefs = FilePreferences::in_dir(&nested);

        prefs.set(LANGUAGE_PREF_KEY, "ru-RU").expect("set succeeds");
        assert!(nested.join(PREFS_FILE).exists());
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join(PREFS_FILE), "not = valid = toml").expect("write");
        let prefs = FilePreferences::in_dir(dir.path());
        assert_eq!(prefs.get(LANGUAGE_PREF_KEY), None);
    }
}

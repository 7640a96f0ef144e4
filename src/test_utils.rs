// SPDX-License-Identifier: MPL-2.0
//! In-memory doubles for the collaborator ports.
//!
//! Used by the unit tests beside each module and by the integration suite
//! in `tests/`. Host applications may also find them useful when testing
//! their own wiring, so the module is part of the public API.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::catalog::{Catalog, CatalogIndex};
use crate::error::{Error, Result};
use crate::locale::Locale;
use crate::port::auth::AuthStatus;
use crate::port::fetch::{CatalogFetcher, FetchError, SourceContext};
use crate::port::platform::LocaleReporter;
use crate::port::prefs::PreferenceStore;
use crate::port::surface::{DocumentSurface, NavigationContext};

// =============================================================================
// Preferences
// =============================================================================

/// Preference store held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl MemoryPreferences {
    /// Pre-populates a value, like a previous session would have.
    pub fn seed(&self, key: &str, value: &str) -> Result<()> {
        self.set(key, value)
    }

    /// Makes every subsequent `set` fail, to exercise the degraded path.
    pub fn reject_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().expect("prefs lock").get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::Io("write rejected by test double".to_string()));
        }
        self.values
            .lock()
            .expect("prefs lock")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// Authentication
// =============================================================================

/// Authentication status that tests can flip between operations.
#[derive(Debug)]
pub struct ToggleAuth {
    authenticated: AtomicBool,
}

impl ToggleAuth {
    #[must_use]
    pub fn new(authenticated: bool) -> Self {
        Self {
            authenticated: AtomicBool::new(authenticated),
        }
    }

    pub fn set_authenticated(&self, authenticated: bool) {
        self.authenticated.store(authenticated, Ordering::SeqCst);
    }
}

impl AuthStatus for ToggleAuth {
    fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }
}

// =============================================================================
// Platform locale
// =============================================================================

/// Locale reporter with a scripted answer.
#[derive(Debug, Clone)]
pub struct FixedReporter {
    tag: Option<String>,
}

impl FixedReporter {
    #[must_use]
    pub fn reporting(tag: &str) -> Self {
        Self {
            tag: Some(tag.to_string()),
        }
    }

    /// A platform that does not report a usable value.
    #[must_use]
    pub fn silent() -> Self {
        Self { tag: None }
    }
}

impl LocaleReporter for FixedReporter {
    fn current_tag(&self) -> Option<String> {
        self.tag.clone()
    }
}

// =============================================================================
// Document surface and navigation
// =============================================================================

/// Records every title and language tag written to it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    titles: Mutex<Vec<String>>,
    languages: Mutex<Vec<String>>,
}

impl RecordingSurface {
    #[must_use]
    pub fn titles(&self) -> Vec<String> {
        self.titles.lock().expect("titles lock").clone()
    }

    #[must_use]
    pub fn languages(&self) -> Vec<String> {
        self.languages.lock().expect("languages lock").clone()
    }
}

impl DocumentSurface for RecordingSurface {
    fn set_title(&self, title: &str) {
        self.titles.lock().expect("titles lock").push(title.to_string());
    }

    fn set_language(&self, tag: &str) {
        self.languages
            .lock()
            .expect("languages lock")
            .push(tag.to_string());
    }
}

/// Navigation context with a fixed title key.
#[derive(Debug, Clone, Default)]
pub struct StaticNav {
    key: Option<String>,
}

impl StaticNav {
    #[must_use]
    pub fn with_key(key: &str) -> Self {
        Self {
            key: Some(key.to_string()),
        }
    }

    /// A view without a title key.
    #[must_use]
    pub fn untitled() -> Self {
        Self { key: None }
    }
}

impl NavigationContext for StaticNav {
    fn title_key(&self) -> Option<String> {
        self.key.clone()
    }
}

// =============================================================================
// Catalog fetcher
// =============================================================================

/// Catalog fetcher serving scripted payloads, with optional per-fetch
/// latency for interleaving tests.
#[derive(Debug, Default)]
pub struct ScriptedFetcher {
    indexes: HashMap<SourceContext, CatalogIndex>,
    locales: HashMap<(SourceContext, Locale), Catalog>,
    failing: HashSet<(SourceContext, Locale)>,
    delay: Option<Duration>,
}

impl ScriptedFetcher {
    /// A minimal catalog whose `common.origin` field carries `marker`, so
    /// tests can tell payloads apart.
    #[must_use]
    pub fn catalog_for(marker: &str) -> Catalog {
        serde_json::from_str(&format!(
            r#"{{
                "common": {{
                    "appName": "Aurora",
                    "welcome": "Welcome to Aurora Admin",
                    "origin": "{marker}"
                }},
                "titles": {{ "dashboard": "Dashboard ({marker})" }}
            }}"#
        ))
        .expect("scripted catalog parses")
    }

    /// A fetcher whose `context` index covers every supported locale.
    /// Other contexts have no resources at all.
    #[must_use]
    pub fn with_full_index(context: SourceContext) -> Self {
        let mut index = BTreeMap::new();
        for locale in Locale::SUPPORTED {
            index.insert(
                locale.as_tag().to_string(),
                Self::catalog_for(&format!("{context}:{locale}")),
            );
        }
        let mut fetcher = Self::default();
        fetcher.indexes.insert(context, index);
        fetcher
    }

    /// A fetcher with no index but a dedicated file per supported locale
    /// in `context`.
    #[must_use]
    pub fn with_per_locale_files(context: SourceContext) -> Self {
        let mut fetcher = Self::default();
        for locale in Locale::SUPPORTED {
            fetcher.locales.insert(
                (context, locale),
                Self::catalog_for(&format!("{context}:{locale}")),
            );
        }
        fetcher
    }

    /// Adds (or creates) an index entry under a raw tag.
    pub fn add_index_entry(&mut self, context: SourceContext, tag: &str, catalog: Catalog) {
        self.indexes
            .entry(context)
            .or_default()
            .insert(tag.to_string(), catalog);
    }

    /// Makes one locale's dedicated fetch fail in `context`.
    pub fn fail_locale(&mut self, context: SourceContext, locale: Locale) {
        self.locales.remove(&(context, locale));
        self.failing.insert((context, locale));
    }

    /// Folds another fetcher's resources into this one.
    pub fn merge(&mut self, other: ScriptedFetcher) {
        self.indexes.extend(other.indexes);
        self.locales.extend(other.locales);
        self.failing.extend(other.failing);
    }

    /// Delays every fetch, so tests can interleave concurrent operations.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl CatalogFetcher for ScriptedFetcher {
    async fn fetch_index(&self, context: SourceContext) -> std::result::Result<CatalogIndex, FetchError> {
        self.pause().await;
        self.indexes.get(&context).cloned().ok_or(FetchError::NotFound)
    }

    async fn fetch_locale(
        &self,
        context: SourceContext,
        locale: Locale,
    ) -> std::result::Result<Catalog, FetchError> {
        self.pause().await;
        if self.failing.contains(&(context, locale)) {
            return Err(FetchError::Io("scripted failure".to_string()));
        }
        self.locales
            .get(&(context, locale))
            .cloned()
            .ok_or(FetchError::NotFound)
    }
}

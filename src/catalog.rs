// SPDX-License-Identifier: MPL-2.0
//! Message catalog data model.
//!
//! A catalog is a nested key→string table for one locale. Keys are looked up
//! by dot-path (`"common.appName"`). Catalogs deserialize directly from the
//! JSON payloads served by the catalog sources.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// A single catalog entry: either a leaf string or a nested namespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Message {
    Text(String),
    Group(BTreeMap<String, Message>),
}

/// The translation table for one locale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: BTreeMap<String, Message>,
}

/// Aggregate index payload: one catalog per raw locale tag.
///
/// Keys are left as raw strings; the loader discards entries that do not
/// name a supported locale.
pub type CatalogIndex = BTreeMap<String, Catalog>;

impl Catalog {
    /// Builds a catalog from top-level entries.
    #[must_use]
    pub fn from_entries(entries: BTreeMap<String, Message>) -> Self {
        Self { entries }
    }

    /// Returns `true` if the catalog holds no entries at all.
    ///
    /// Cleared slots in the runtime are represented by empty catalogs, so
    /// this doubles as the "not populated" test.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a leaf string by dot-path.
    ///
    /// Returns `None` if any path segment is missing or resolves to a
    /// namespace instead of a leaf.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let mut segments = key.split('.');
        let first = segments.next()?;
        let mut current = self.entries.get(first)?;
        for segment in segments {
            match current {
                Message::Group(group) => current = group.get(segment)?,
                Message::Text(_) => return None,
            }
        }
        match current {
            Message::Text(text) => Some(text),
            Message::Group(_) => None,
        }
    }

    /// Returns a mutable view of a top-level namespace, if present.
    pub fn namespace_mut(&mut self, name: &str) -> Option<&mut BTreeMap<String, Message>> {
        match self.entries.get_mut(name) {
            Some(Message::Group(group)) => Some(group),
            _ => None,
        }
    }

    /// Number of top-level entries. Used by tests and diagnostics only.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Convenience alias for the loader's result shape: one catalog per
/// successfully populated locale.
pub type CatalogSet = BTreeMap<Locale, Catalog>;

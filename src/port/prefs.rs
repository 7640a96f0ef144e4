// SPDX-License-Identifier: MPL-2.0
//! Durable preference storage port.

use crate::error::Result;

/// Key/value store persisting user choices across sessions.
///
/// The subsystem writes a single key, [`crate::config::LANGUAGE_PREF_KEY`],
/// and only after a successful locale switch. Reads happen at startup and
/// on every manual switch.
pub trait PreferenceStore: Send + Sync {
    /// Returns the stored value for `key`, or `None` if absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value could not be made durable. Callers in
    /// this crate swallow the error and report it on the diagnostics
    /// channel; a failed write must never block a locale switch.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for the panel's configuration directory.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **Environment variable** (`AURORA_CONFIG_DIR`)
//! 3. **Platform default** - via the `dirs` crate
//!
//! The explicit override has highest priority because it's the most
//! specific - when code explicitly passes a path, it should always be
//! respected.

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "Aurora";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "AURORA_CONFIG_DIR";

/// Returns the panel config directory path.
///
/// This directory holds the deployment configuration (`settings.toml`) and
/// the persisted locale preference (`preferences.toml`).
///
/// # Resolution Order
///
/// 1. `AURORA_CONFIG_DIR` environment variable (if set and non-empty)
/// 2. Platform-specific config directory:
///    - Linux: `~/.config/Aurora/`
///    - macOS: `~/Library/Application Support/Aurora/`
///    - Windows: `C:\Users\<User>\AppData\Roaming\Aurora\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_config_dir() -> Option<PathBuf> {
    get_config_dir_with_override(None)
}

/// Returns the panel config directory path with an optional override.
///
/// # Arguments
///
/// * `override_path` - Optional path to use instead of default. Takes
///   highest priority; intended for tests.
pub fn get_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override (for tests)
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: Environment variable
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    // Priority 3: Platform default with app name
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

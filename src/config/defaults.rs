// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for deployment configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the subsystem. Constants are organized by category.

// ==========================================================================
// Branding Defaults
// ==========================================================================

/// Product name shown when a deployment does not configure its own.
pub const DEFAULT_SITE_NAME: &str = "Aurora";

/// Upstream product name baked into the stock catalogs' welcome message.
/// Branding injection replaces this literal with the deployment's name.
pub const WELCOME_PLACEHOLDER: &str = "Aurora Admin";

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Tag of the locale used when detection finds nothing better.
pub const DEFAULT_LOCALE_TAG: &str = "en-US";

/// Preference-store key under which the chosen locale tag is persisted.
pub const LANGUAGE_PREF_KEY: &str = "language";

// ==========================================================================
// Title Synchronization Defaults
// ==========================================================================

/// Delay before the second title sync that covers asynchronous UI
/// re-render races (in milliseconds).
pub const TITLE_RESYNC_DELAY_MS: u64 = 300;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Bounded capacity of the diagnostics event channel. Events beyond this
/// are dropped rather than blocking a load in progress.
pub const DIAGNOSTICS_CHANNEL_CAPACITY: usize = 256;

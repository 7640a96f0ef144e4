// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for the subsystem's external collaborators.
//!
//! This module defines abstract interfaces that infrastructure adapters and
//! the host application implement. The traits use only crate-local types,
//! keeping the loading and runtime logic independent of concrete
//! implementations.
//!
//! # Available Ports
//!
//! - [`auth`]: authentication status, queried to pick the catalog source context
//! - [`fetch`]: catalog resource fetching for both source contexts
//! - [`platform`]: platform-reported locale tag
//! - [`prefs`]: durable per-user preference storage
//! - [`surface`]: navigation context and document title/language surface
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so the runtime handle can be shared freely
//! - Only [`fetch`] is async; every other collaborator answers synchronously
//! - Fetch failures carry [`fetch::FetchError`] and never escape the loader

pub mod auth;
pub mod fetch;
pub mod platform;
pub mod prefs;
pub mod surface;

// Re-export main types for convenience
pub use auth::AuthStatus;
pub use fetch::{CatalogFetcher, FetchError, SourceContext};
pub use platform::{LocaleReporter, SystemLocaleReporter};
pub use prefs::PreferenceStore;
pub use surface::{DocumentSurface, NavigationContext};

// SPDX-License-Identifier: MPL-2.0
//! Concrete adapters for the collaborator ports.
//!
//! - [`embedded`]: catalogs bundled into the binary (the default source)
//! - [`fs_catalogs`]: catalogs read from a deployment directory
//! - [`fs_prefs`]: preference store backed by a TOML file

pub mod embedded;
pub mod fs_catalogs;
pub mod fs_prefs;
mod layout;

pub use embedded::EmbeddedCatalogs;
pub use fs_catalogs::DirCatalogs;
pub use fs_prefs::FilePreferences;

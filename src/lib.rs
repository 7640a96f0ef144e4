// SPDX-License-Identifier: MPL-2.0
//! `aurora_i18n` is the locale-resolution and message-loading subsystem of
//! the Aurora client panel.
//!
//! It decides which language to display, loads translation catalogs from
//! one of two source contexts (authenticated or unauthenticated), injects
//! deployment branding, and keeps the active locale consistent across
//! authentication transitions. Failures degrade instead of propagating:
//! missing catalogs fall back, missing keys echo the key, and every
//! swallowed failure is observable on the diagnostics channel.

#![doc(html_root_url = "https://docs.rs/aurora-i18n/0.3.0")]

pub mod branding;
pub mod catalog;
pub mod config;
pub mod detect;
pub mod diagnostics;
pub mod error;
pub mod infrastructure;
pub mod loader;
pub mod locale;
pub mod port;
pub mod runtime;
pub mod test_utils;
pub mod title;

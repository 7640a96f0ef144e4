// SPDX-License-Identifier: MPL-2.0
//! Catalogs bundled into the binary.
//!
//! The stock catalogs under `assets/locales/` are embedded at compile time,
//! so a fresh deployment serves every supported locale without any on-disk
//! or network resources. No aggregate index is bundled: the per-locale
//! files are the single source of truth, and the loader's index phase
//! degrades cleanly.

use async_trait::async_trait;
use rust_embed::RustEmbed;
use serde::de::DeserializeOwned;

use super::layout;
use crate::catalog::{Catalog, CatalogIndex};
use crate::locale::Locale;
use crate::port::fetch::{CatalogFetcher, FetchError, SourceContext};

#[derive(RustEmbed)]
#[folder = "assets/locales/"]
struct Asset;

/// Fetcher serving the embedded stock catalogs.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedCatalogs;

fn read<T: DeserializeOwned>(path: &str) -> Result<T, FetchError> {
    let file = Asset::get(path).ok_or(FetchError::NotFound)?;
    serde_json::from_slice(file.data.as_ref())
        .map_err(|error| FetchError::Malformed(error.to_string()))
}

#[async_trait]
impl CatalogFetcher for EmbeddedCatalogs {
    async fn fetch_index(&self, context: SourceContext) -> Result<CatalogIndex, FetchError> {
        read(&layout::index_path(context))
    }

    async fn fetch_locale(
        &self,
        context: SourceContext,
        locale: Locale,
    ) -> Result<Catalog, FetchError> {
        read(&layout::locale_path(context, locale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn every_supported_locale_is_bundled_in_both_contexts() {
        for context in [
            SourceContext::Authenticated,
            SourceContext::Unauthenticated,
        ] {
            for locale in Locale::SUPPORTED {
                let catalog = EmbeddedCatalogs
                    .fetch_locale(context, locale)
                    .await
                    .unwrap_or_else(|e| panic!("{context} {locale} should be bundled: {e}"));
                assert!(!catalog.is_empty());
                assert!(catalog.lookup("common.appName").is_some());
            }
        }
    }

    #[tokio::test]
    async fn bundled_welcome_carries_the_placeholder() {
        let catalog = EmbeddedCatalogs
            .fetch_locale(SourceContext::Authenticated, Locale::EnUs)
            .await
            .expect("en-US bundled");
        let welcome = catalog.lookup("common.welcome").expect("welcome present");
        assert!(welcome.contains("Aurora Admin"));
    }

    #[tokio::test]
    async fn no_index_is_bundled() {
        let result = EmbeddedCatalogs
            .fetch_index(SourceContext::Authenticated)
            .await;
        assert!(matches!(result, Err(FetchError::NotFound)));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Directory-backed catalog source.
//!
//! Serves catalogs from a deployment-managed directory using the shared
//! layout (per-locale JSON files, `auth/` subdirectory for the
//! unauthenticated context, optional `index.json` aggregate per context).
//! Deployments point the runtime here via `Config::catalog_dir` to
//! override the embedded stock catalogs.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::layout;
use crate::catalog::{Catalog, CatalogIndex};
use crate::locale::Locale;
use crate::port::fetch::{CatalogFetcher, FetchError, SourceContext};

/// Fetcher reading catalogs from a root directory.
#[derive(Debug, Clone)]
pub struct DirCatalogs {
    root: PathBuf,
}

impl DirCatalogs {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    async fn read<T: DeserializeOwned>(&self, relative: &str) -> Result<T, FetchError> {
        let path = self.root.join(relative);
        let bytes = read_bytes(&path).await?;
        serde_json::from_slice(&bytes).map_err(|error| FetchError::Malformed(error.to_string()))
    }
}

async fn read_bytes(path: &Path) -> Result<Vec<u8>, FetchError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(bytes),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Err(FetchError::NotFound),
        Err(error) => Err(FetchError::Io(error.to_string())),
    }
}

#[async_trait]
impl CatalogFetcher for DirCatalogs {
    async fn fetch_index(&self, context: SourceContext) -> Result<CatalogIndex, FetchError> {
        self.read(&layout::index_path(context)).await
    }

    async fn fetch_locale(
        &self,
        context: SourceContext,
        locale: Locale,
    ) -> Result<Catalog, FetchError> {
        self.read(&layout::locale_path(context, locale)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_catalog(dir: &Path, relative: &str, origin: &str) {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create catalog dirs");
        }
        fs::write(
            path,
            format!(r#"{{ "common": {{ "appName": "Aurora", "origin": "{origin}" }} }}"#),
        )
        .expect("write catalog file");
    }

    #[tokio::test]
    async fn reads_locale_files_from_both_contexts() {
        let dir = tempdir().expect("temp dir");
        write_catalog(dir.path(), "ja-JP.json", "main");
        write_catalog(dir.path(), "auth/ja-JP.json", "auth");
        let catalogs = DirCatalogs::new(dir.path());

        let main = catalogs
            .fetch_locale(SourceContext::Authenticated, Locale::JaJp)
            .await
            .expect("main catalog");
        let auth = catalogs
            .fetch_locale(SourceContext::Unauthenticated, Locale::JaJp)
            .await
            .expect("auth catalog");

        assert_eq!(main.lookup("common.origin"), Some("main"));
        assert_eq!(auth.lookup("common.origin"), Some("auth"));
    }

    #[tokio::test]
    async fn missing_file_maps_to_not_found() {
        let dir = tempdir().expect("temp dir");
        let catalogs = DirCatalogs::new(dir.path());

        let result = catalogs
            .fetch_locale(SourceContext::Authenticated, Locale::KoKr)
            .await;
        assert!(matches!(result, Err(FetchError::NotFound)));
    }

    #[tokio::test]
    async fn malformed_payload_maps_to_malformed() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("ru-RU.json"), "{ not json").expect("write file");
        let catalogs = DirCatalogs::new(dir.path());

        let result = catalogs
            .fetch_locale(SourceContext::Authenticated, Locale::RuRu)
            .await;
        assert!(matches!(result, Err(FetchError::Malformed(_))));
    }

    #[tokio::test]
    async fn index_aggregate_is_served_when_present() {
        let dir = tempdir().expect("temp dir");
        fs::write(
            dir.path().join("index.json"),
            r#"{ "en-US": { "common": { "appName": "Aurora" } },
                 "zh-CN": { "common": { "appName": "Aurora" } } }"#,
        )
        .expect("write index");
        let catalogs = DirCatalogs::new(dir.path());

        let index = catalogs
            .fetch_index(SourceContext::Authenticated)
            .await
            .expect("index loads");
        assert_eq!(index.len(), 2);
        assert!(index.contains_key("en-US"));
    }
}

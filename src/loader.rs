// SPDX-License-Identifier: MPL-2.0
//! Two-phase catalog loading.
//!
//! Phase A fetches the context-scoped aggregate index and adopts every
//! supported locale it carries; Phase B backfills the rest locale by
//! locale, substituting the fallback locale's catalog when a specific
//! locale is unobtainable. The loader never fails outright: the result may
//! simply hold fewer entries than the supported set, and every degradation
//! is reported on the diagnostics channel.

use std::sync::Arc;

use crate::catalog::CatalogSet;
use crate::diagnostics::DiagnosticsHandle;
use crate::locale::Locale;
use crate::port::fetch::{CatalogFetcher, SourceContext};

/// Loads message catalogs for every supported locale.
#[derive(Clone)]
pub struct CatalogLoader {
    fetcher: Arc<dyn CatalogFetcher>,
    diagnostics: DiagnosticsHandle,
}

impl CatalogLoader {
    pub fn new(fetcher: Arc<dyn CatalogFetcher>, diagnostics: DiagnosticsHandle) -> Self {
        Self {
            fetcher,
            diagnostics,
        }
    }

    /// Fetches catalogs for all supported locales from the given context.
    ///
    /// Always returns a mapping; locales whose sources are all unreachable
    /// are absent from it.
    pub async fn load(&self, context: SourceContext) -> CatalogSet {
        let mut catalogs = CatalogSet::new();

        // Phase A: one aggregate index for the whole context
        match self.fetcher.fetch_index(context).await {
            Ok(index) => {
                for (tag, catalog) in index {
                    if let Some(locale) = Locale::from_tag(&tag) {
                        catalogs.insert(locale, catalog);
                    }
                }
            }
            Err(error) => self.diagnostics.index_unavailable(context, &error),
        }

        // Phase B: per-locale backfill for whatever the index did not cover
        for locale in Locale::SUPPORTED {
            if catalogs.contains_key(&locale) {
                continue;
            }
            match self.fetcher.fetch_locale(context, locale).await {
                Ok(catalog) => {
                    catalogs.insert(locale, catalog);
                }
                Err(error) => {
                    self.diagnostics.catalog_unavailable(context, locale, &error);
                    if locale != Locale::FALLBACK {
                        self.substitute_fallback(context, locale, &mut catalogs).await;
                    }
                }
            }
        }

        catalogs
    }

    /// Installs the fallback locale's catalog under `locale` so the UI is
    /// never left without translatable strings for a selectable locale.
    async fn substitute_fallback(
        &self,
        context: SourceContext,
        locale: Locale,
        catalogs: &mut CatalogSet,
    ) {
        match self.fetcher.fetch_locale(context, Locale::FALLBACK).await {
            Ok(catalog) => {
                catalogs.insert(locale, catalog);
                self.diagnostics.fallback_substituted(locale);
            }
            Err(error) => {
                // Degraded but non-fatal: the locale stays absent
                self.diagnostics
                    .catalog_unavailable(context, Locale::FALLBACK, &error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{self, LocaleEventKind};
    use crate::test_utils::ScriptedFetcher;

    fn loader_with(
        fetcher: ScriptedFetcher,
    ) -> (CatalogLoader, diagnostics::DiagnosticsCollector) {
        let (handle, collector) = diagnostics::channel(64);
        (CatalogLoader::new(Arc::new(fetcher), handle), collector)
    }

    #[tokio::test]
    async fn index_alone_populates_every_locale() {
        let fetcher = ScriptedFetcher::with_full_index(SourceContext::Authenticated);
        let (loader, collector) = loader_with(fetcher);

        let catalogs = loader.load(SourceContext::Authenticated).await;

        assert_eq!(catalogs.len(), Locale::SUPPORTED.len());
        assert!(collector.drain().is_empty());
    }

    #[tokio::test]
    async fn missing_index_backfills_per_locale() {
        let fetcher = ScriptedFetcher::with_per_locale_files(SourceContext::Unauthenticated);
        let (loader, collector) = loader_with(fetcher);

        let catalogs = loader.load(SourceContext::Unauthenticated).await;

        assert_eq!(catalogs.len(), Locale::SUPPORTED.len());
        let events = collector.drain();
        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0].kind,
            LocaleEventKind::IndexUnavailable { .. }
        ));
    }

    #[tokio::test]
    async fn index_entries_with_unknown_tags_are_discarded() {
        let mut fetcher = ScriptedFetcher::with_full_index(SourceContext::Authenticated);
        fetcher.add_index_entry(
            SourceContext::Authenticated,
            "xx-XX",
            ScriptedFetcher::catalog_for("xx-XX"),
        );
        let (loader, _collector) = loader_with(fetcher);

        let catalogs = loader.load(SourceContext::Authenticated).await;

        assert_eq!(catalogs.len(), Locale::SUPPORTED.len());
    }

    #[tokio::test]
    async fn failed_locale_receives_fallback_substitution() {
        let mut fetcher = ScriptedFetcher::with_per_locale_files(SourceContext::Authenticated);
        fetcher.fail_locale(SourceContext::Authenticated, Locale::FaIr);
        let (loader, collector) = loader_with(fetcher);

        let catalogs = loader.load(SourceContext::Authenticated).await;

        let fallback = catalogs.get(&Locale::FALLBACK).expect("fallback loaded");
        assert_eq!(catalogs.get(&Locale::FaIr), Some(fallback));

        let events = collector.drain();
        assert!(events.iter().any(|e| matches!(
            e.kind,
            LocaleEventKind::FallbackSubstituted {
                locale: Locale::FaIr
            }
        )));
    }

    #[tokio::test]
    async fn locale_stays_absent_when_fallback_also_fails() {
        let mut fetcher = ScriptedFetcher::with_per_locale_files(SourceContext::Authenticated);
        fetcher.fail_locale(SourceContext::Authenticated, Locale::RuRu);
        fetcher.fail_locale(SourceContext::Authenticated, Locale::EnUs);
        let (loader, _collector) = loader_with(fetcher);

        let catalogs = loader.load(SourceContext::Authenticated).await;

        assert!(!catalogs.contains_key(&Locale::RuRu));
        assert!(!catalogs.contains_key(&Locale::EnUs));
        assert_eq!(catalogs.len(), Locale::SUPPORTED.len() - 2);
    }

    #[tokio::test]
    async fn failed_fallback_locale_gets_no_substitution() {
        let mut fetcher = ScriptedFetcher::with_per_locale_files(SourceContext::Authenticated);
        fetcher.fail_locale(SourceContext::Authenticated, Locale::EnUs);
        let (loader, collector) = loader_with(fetcher);

        let catalogs = loader.load(SourceContext::Authenticated).await;

        assert!(!catalogs.contains_key(&Locale::EnUs));
        let events = collector.drain();
        assert!(!events
            .iter()
            .any(|e| matches!(e.kind, LocaleEventKind::FallbackSubstituted { .. })));
    }

    #[tokio::test]
    async fn partial_index_is_backfilled_from_per_locale_files() {
        let mut fetcher = ScriptedFetcher::with_per_locale_files(SourceContext::Authenticated);
        fetcher.add_index_entry(
            SourceContext::Authenticated,
            "ja-JP",
            ScriptedFetcher::catalog_for("index-ja"),
        );
        let (loader, _collector) = loader_with(fetcher);

        let catalogs = loader.load(SourceContext::Authenticated).await;

        assert_eq!(catalogs.len(), Locale::SUPPORTED.len());
        // The index entry wins for ja-JP; no per-locale fetch overwrites it
        assert_eq!(
            catalogs[&Locale::JaJp].lookup("common.origin"),
            Some("index-ja")
        );
    }

    #[tokio::test]
    async fn contexts_resolve_to_disjoint_content() {
        let mut fetcher = ScriptedFetcher::with_per_locale_files(SourceContext::Authenticated);
        fetcher.merge(ScriptedFetcher::with_per_locale_files(
            SourceContext::Unauthenticated,
        ));
        let (loader, _collector) = loader_with(fetcher);

        let authed = loader.load(SourceContext::Authenticated).await;
        let anon = loader.load(SourceContext::Unauthenticated).await;

        assert_ne!(
            authed[&Locale::EnUs].lookup("common.origin"),
            anon[&Locale::EnUs].lookup("common.origin")
        );
    }
}

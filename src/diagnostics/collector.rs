// SPDX-License-Identifier: MPL-2.0
//! Handle/collector pair for diagnostic events.

use crossbeam_channel::{bounded, Receiver, Sender};

use super::events::{LocaleEvent, LocaleEventKind};
use crate::locale::Locale;
use crate::port::fetch::{FetchError, SourceContext};

/// Handle for reporting diagnostic events.
///
/// Cheap to clone and shared across the loader and runtime. Sends are
/// non-blocking; events are dropped when the channel is full or when the
/// handle was built with [`DiagnosticsHandle::sink`].
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Option<Sender<LocaleEvent>>,
}

impl DiagnosticsHandle {
    /// A handle that discards every event. For embedders that do not
    /// consume diagnostics.
    #[must_use]
    pub fn sink() -> Self {
        Self { event_tx: None }
    }

    fn report(&self, kind: LocaleEventKind) {
        if let Some(tx) = &self.event_tx {
            // Non-blocking send - drop if channel is full
            let _ = tx.try_send(LocaleEvent::new(kind));
        }
    }

    pub fn index_unavailable(&self, context: SourceContext, error: &FetchError) {
        self.report(LocaleEventKind::IndexUnavailable {
            context,
            detail: error.to_string(),
        });
    }

    pub fn catalog_unavailable(&self, context: SourceContext, locale: Locale, error: &FetchError) {
        self.report(LocaleEventKind::CatalogUnavailable {
            context,
            locale,
            detail: error.to_string(),
        });
    }

    pub fn fallback_substituted(&self, locale: Locale) {
        self.report(LocaleEventKind::FallbackSubstituted { locale });
    }

    pub fn locale_coerced(&self, requested: &str) {
        self.report(LocaleEventKind::LocaleCoerced {
            requested: requested.to_string(),
        });
    }

    pub fn load_superseded(&self) {
        self.report(LocaleEventKind::LoadSuperseded);
    }

    pub fn preference_write_failed(&self, detail: &str) {
        self.report(LocaleEventKind::PreferenceWriteFailed {
            detail: detail.to_string(),
        });
    }
}

/// Receiving end of the diagnostics channel.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    event_rx: Receiver<LocaleEvent>,
}

impl DiagnosticsCollector {
    /// Drains every event currently buffered, without blocking.
    pub fn drain(&self) -> Vec<LocaleEvent> {
        self.event_rx.try_iter().collect()
    }
}

/// Creates a connected handle/collector pair with a bounded buffer.
#[must_use]
pub fn channel(capacity: usize) -> (DiagnosticsHandle, DiagnosticsCollector) {
    let (event_tx, event_rx) = bounded(capacity);
    (
        DiagnosticsHandle {
            event_tx: Some(event_tx),
        },
        DiagnosticsCollector { event_rx },
    )
}

// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for the locale subsystem.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::locale::Locale;
use crate::port::fetch::SourceContext;

/// Failures and notable decisions the subsystem handled silently.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LocaleEventKind {
    /// The aggregate catalog index for a context could not be fetched.
    /// Routine for deployments that ship per-locale files only.
    IndexUnavailable {
        context: SourceContext,
        detail: String,
    },

    /// One locale's dedicated catalog could not be fetched.
    CatalogUnavailable {
        context: SourceContext,
        locale: Locale,
        detail: String,
    },

    /// The fallback locale's catalog was installed under another locale's
    /// identifier. Runtime state carries no marker for this; the event is
    /// the only place the substitution is observable.
    FallbackSubstituted { locale: Locale },

    /// A requested or stored locale tag was not in the supported set and
    /// was coerced to the fallback locale.
    LocaleCoerced { requested: String },

    /// A switch/reload was superseded by a newer request; its results were
    /// discarded without being installed.
    LoadSuperseded,

    /// The preference store rejected a locale write. The switch itself
    /// still completed.
    PreferenceWriteFailed { detail: String },
}

/// A timestamped diagnostic event.
#[derive(Debug, Clone, Serialize)]
pub struct LocaleEvent {
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: LocaleEventKind,
}

impl LocaleEvent {
    pub(crate) fn new(kind: LocaleEventKind) -> Self {
        Self {
            at: Utc::now(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_tag() {
        let event = LocaleEvent::new(LocaleEventKind::FallbackSubstituted {
            locale: Locale::FaIr,
        });
        let json = serde_json::to_string(&event).expect("serialize");
        assert!(json.contains("\"event\":\"fallback_substituted\""));
        assert!(json.contains("\"fa-IR\""));
    }

    #[test]
    fn coercion_event_carries_requested_tag() {
        let event = LocaleEvent::new(LocaleEventKind::LocaleCoerced {
            requested: "xx-XX".to_string(),
        });
        let json = serde_json::to_string(&event).expect("serialize");
        assert!(json.contains("xx-XX"));
    }
}

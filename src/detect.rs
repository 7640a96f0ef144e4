// SPDX-License-Identifier: MPL-2.0
//! Initial locale detection.
//!
//! Derives a candidate locale from environment signals: the stored user
//! preference, then the platform-reported language tag, then the configured
//! default. Infallible; the result is always a member of the supported set.

use crate::config::LANGUAGE_PREF_KEY;
use crate::locale::Locale;
use crate::port::platform::LocaleReporter;
use crate::port::prefs::PreferenceStore;

/// Resolution result, carrying the tag that was coerced when the stored
/// preference named an unsupported locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub locale: Locale,
    /// The stored preference value, when it was present but unrecognized
    /// and therefore coerced to the fallback locale.
    pub coerced_from: Option<String>,
}

impl Detection {
    fn of(locale: Locale) -> Self {
        Self {
            locale,
            coerced_from: None,
        }
    }
}

/// Resolves the locale to activate at startup. First match wins.
#[must_use]
pub fn resolve_initial_locale(
    prefs: &dyn PreferenceStore,
    platform: &dyn LocaleReporter,
    default: Locale,
) -> Detection {
    // 1. Stored preference, if present and non-empty
    if let Some(stored) = prefs.get(LANGUAGE_PREF_KEY) {
        if !stored.is_empty() {
            return match Locale::from_tag(&stored) {
                Some(locale) => Detection::of(locale),
                // Unrecognized identifiers coerce to the fallback locale
                None => Detection {
                    locale: Locale::FALLBACK,
                    coerced_from: Some(stored),
                },
            };
        }
    }

    // 2. Platform-reported tag, when the platform exposes a usable value
    if let Some(tag) = platform.current_tag() {
        if let Some(locale) = Locale::match_platform_tag(&tag) {
            return Detection::of(locale);
        }
    }

    // 3. Configured default
    Detection::of(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FixedReporter, MemoryPreferences};

    #[test]
    fn stored_preference_wins_over_platform() {
        let prefs = MemoryPreferences::default();
        prefs
            .seed(LANGUAGE_PREF_KEY, "ja-JP")
            .expect("seed preference");
        let platform = FixedReporter::reporting("ru-RU");

        let detection = resolve_initial_locale(&prefs, &platform, Locale::EnUs);
        assert_eq!(detection.locale, Locale::JaJp);
        assert!(detection.coerced_from.is_none());
    }

    #[test]
    fn unrecognized_stored_preference_coerces_to_fallback() {
        let prefs = MemoryPreferences::default();
        prefs.seed(LANGUAGE_PREF_KEY, "eo-EO").expect("seed");
        let platform = FixedReporter::reporting("ja-JP");

        let detection = resolve_initial_locale(&prefs, &platform, Locale::ZhCn);
        assert_eq!(detection.locale, Locale::FALLBACK);
        assert_eq!(detection.coerced_from.as_deref(), Some("eo-EO"));
    }

    #[test]
    fn empty_stored_preference_is_ignored() {
        let prefs = MemoryPreferences::default();
        prefs.seed(LANGUAGE_PREF_KEY, "").expect("seed");
        let platform = FixedReporter::reporting("ko-KR");

        let detection = resolve_initial_locale(&prefs, &platform, Locale::EnUs);
        assert_eq!(detection.locale, Locale::KoKr);
    }

    #[test]
    fn platform_hong_kong_maps_to_traditional_chinese() {
        let prefs = MemoryPreferences::default();
        let platform = FixedReporter::reporting("zh-HK");

        let detection = resolve_initial_locale(&prefs, &platform, Locale::EnUs);
        assert_eq!(detection.locale, Locale::ZhTw);
    }

    #[test]
    fn unmapped_platform_tag_falls_to_default() {
        let prefs = MemoryPreferences::default();
        let platform = FixedReporter::reporting("fr-FR");

        let detection = resolve_initial_locale(&prefs, &platform, Locale::EnUs);
        assert_eq!(detection.locale, Locale::EnUs);
    }

    #[test]
    fn silent_platform_falls_to_default() {
        let prefs = MemoryPreferences::default();
        let platform = FixedReporter::silent();

        let detection = resolve_initial_locale(&prefs, &platform, Locale::FaIr);
        assert_eq!(detection.locale, Locale::FaIr);
    }

    #[test]
    fn result_is_always_supported() {
        let tags = ["", "zh-HK", "fr-FR", "garbage", "ja"];
        for tag in tags {
            let prefs = MemoryPreferences::default();
            let platform = FixedReporter::reporting(tag);
            let detection = resolve_initial_locale(&prefs, &platform, Locale::EnUs);
            assert!(Locale::SUPPORTED.contains(&detection.locale));
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Locale identifiers and platform-tag matching.
//!
//! The panel recognizes a fixed set of locales; every identifier that flows
//! through the runtime belongs to this set. Tags arriving from the outside
//! world (stored preferences, switch requests, platform locale reports) are
//! either matched against the set or coerced to [`Locale::FALLBACK`].

use std::fmt;

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

/// One supported language/region combination.
///
/// Serialized as its BCP-47-style tag (e.g. `"zh-CN"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "zh-TW")]
    ZhTw,
    #[serde(rename = "ja-JP")]
    JaJp,
    #[serde(rename = "ko-KR")]
    KoKr,
    #[serde(rename = "ru-RU")]
    RuRu,
    #[serde(rename = "fa-IR")]
    FaIr,
}

/// Exact platform tags that map onto a supported locale.
///
/// Region-specific Chinese tags resolve to distinct locales; the other
/// languages accept both the bare language tag and the full tag.
const EXACT_MATCHES: &[(&str, Locale)] = &[
    ("zh-CN", Locale::ZhCn),
    ("zh-TW", Locale::ZhTw),
    ("zh-HK", Locale::ZhTw),
    ("ja", Locale::JaJp),
    ("ja-JP", Locale::JaJp),
    ("ko", Locale::KoKr),
    ("ko-KR", Locale::KoKr),
    ("ru", Locale::RuRu),
    ("ru-RU", Locale::RuRu),
    ("fa", Locale::FaIr),
    ("fa-IR", Locale::FaIr),
];

/// Primary-language-subtag fallbacks for tags with unmapped regions.
const PRIMARY_MATCHES: &[(&str, Locale)] = &[
    ("zh", Locale::ZhCn),
    ("ja", Locale::JaJp),
    ("ko", Locale::KoKr),
    ("ru", Locale::RuRu),
    ("fa", Locale::FaIr),
];

impl Locale {
    /// Every locale the panel ships catalogs for.
    pub const SUPPORTED: [Locale; 7] = [
        Locale::ZhCn,
        Locale::EnUs,
        Locale::ZhTw,
        Locale::JaJp,
        Locale::KoKr,
        Locale::RuRu,
        Locale::FaIr,
    ];

    /// The locale used when no better match exists or a specific locale's
    /// catalog is unobtainable.
    pub const FALLBACK: Locale = Locale::EnUs;

    /// Returns the canonical tag for this locale.
    #[must_use]
    pub fn as_tag(self) -> &'static str {
        match self {
            Locale::ZhCn => "zh-CN",
            Locale::EnUs => "en-US",
            Locale::ZhTw => "zh-TW",
            Locale::JaJp => "ja-JP",
            Locale::KoKr => "ko-KR",
            Locale::RuRu => "ru-RU",
            Locale::FaIr => "fa-IR",
        }
    }

    /// Parses an exact supported tag. Returns `None` for anything else.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Locale> {
        Locale::SUPPORTED.iter().copied().find(|l| l.as_tag() == tag)
    }

    /// Parses a tag, coercing anything unsupported to [`Locale::FALLBACK`].
    #[must_use]
    pub fn coerce(tag: &str) -> Locale {
        Locale::from_tag(tag).unwrap_or(Locale::FALLBACK)
    }

    /// Maps a platform-reported language tag onto a supported locale.
    ///
    /// Exact matches win (so `zh-HK` resolves to `zh-TW`, not `zh-CN`);
    /// otherwise the primary language subtag is matched, so e.g. `ja-Kana-JP`
    /// still resolves to Japanese. Unparseable or unmapped tags return
    /// `None` and the caller falls through to its configured default.
    #[must_use]
    pub fn match_platform_tag(tag: &str) -> Option<Locale> {
        let tag = tag.trim();
        if tag.is_empty() {
            return None;
        }

        if let Some((_, locale)) = EXACT_MATCHES.iter().find(|(t, _)| *t == tag) {
            return Some(*locale);
        }

        let parsed: LanguageIdentifier = tag.parse().ok()?;
        let primary = parsed.language.as_str();
        PRIMARY_MATCHES
            .iter()
            .find(|(t, _)| *t == primary)
            .map(|(_, locale)| *locale)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Resource layout shared by the catalog adapters.
//!
//! Both catalog sources use the same layout: authenticated catalogs at the
//! root, unauthenticated ones under `auth/`, one JSON file per locale plus
//! an optional `index.json` aggregate per context. Locators are derived
//! from the locale tag rather than branched per locale.

use crate::locale::Locale;
use crate::port::fetch::SourceContext;

/// Directory prefix for a source context's namespace.
fn context_prefix(context: SourceContext) -> &'static str {
    match context {
        SourceContext::Authenticated => "",
        SourceContext::Unauthenticated => "auth/",
    }
}

/// Relative path of a context's aggregate index.
pub(crate) fn index_path(context: SourceContext) -> String {
    format!("{}index.json", context_prefix(context))
}

/// Relative path of one locale's dedicated catalog.
pub(crate) fn locale_path(context: SourceContext, locale: Locale) -> String {
    format!("{}{}.json", context_prefix(context), locale.as_tag())
}

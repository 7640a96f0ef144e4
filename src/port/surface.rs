// SPDX-License-Identifier: MPL-2.0
//! Navigation context and document surface ports.

/// Exposes the currently displayed view's title key, if it has one.
pub trait NavigationContext: Send + Sync {
    /// Translation key for the active view's title (e.g. `"titles.dashboard"`).
    fn title_key(&self) -> Option<String>;
}

/// Accepts the composed document title and the active language tag.
///
/// Both operations are idempotent single-writer side effects; implementors
/// must not fail.
pub trait DocumentSurface: Send + Sync {
    fn set_title(&self, title: &str);

    /// Reflects the active locale to assistive/rendering layers.
    fn set_language(&self, tag: &str);
}

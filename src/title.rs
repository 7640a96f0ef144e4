// SPDX-License-Identifier: MPL-2.0
//! Document title synchronization.
//!
//! Derives the page title from the active view's title key and the
//! deployment branding. Translation goes through the [`Translator`] seam so
//! the runtime supplies lookups without a circular dependency.

use std::sync::Arc;

use crate::port::surface::{DocumentSurface, NavigationContext};

/// Translation lookup seam, implemented by the locale runtime.
pub trait Translator {
    /// Resolves `key` to a display string. Implementations never fail; a
    /// missing key yields the key itself.
    fn translate(&self, key: &str) -> String;
}

/// Keeps the document title consistent with the active locale.
#[derive(Clone)]
pub struct TitleSynchronizer {
    nav: Arc<dyn NavigationContext>,
    surface: Arc<dyn DocumentSurface>,
    site_name: String,
}

impl TitleSynchronizer {
    pub fn new(
        nav: Arc<dyn NavigationContext>,
        surface: Arc<dyn DocumentSurface>,
        site_name: String,
    ) -> Self {
        Self {
            nav,
            surface,
            site_name,
        }
    }

    /// Recomputes and writes the document title.
    ///
    /// With a title key present, the title is
    /// `"<translated title> - <site name>"`; without one, the site name
    /// stands alone. Never fails.
    pub fn sync(&self, translator: &dyn Translator) {
        match self.nav.title_key() {
            Some(key) => {
                let translated = translator.translate(&key);
                self.surface
                    .set_title(&format!("{} - {}", translated, self.site_name));
            }
            None => self.surface.set_title(&self.site_name),
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Platform locale reporting port.

/// Reports the platform's current language tag.
pub trait LocaleReporter: Send + Sync {
    /// The platform-reported tag (e.g. `"zh-HK"`), or `None` if the
    /// platform does not expose a usable value.
    fn current_tag(&self) -> Option<String>;
}

/// Default reporter backed by the operating system locale.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLocaleReporter;

impl LocaleReporter for SystemLocaleReporter {
    fn current_tag(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Branding injection into loaded catalogs.
//!
//! Stock catalogs ship with the upstream product name; after every load the
//! deployment-configured name is written into the `common` namespace so the
//! UI never shows the placeholder.

use crate::catalog::{CatalogSet, Message};
use crate::config::{Config, WELCOME_PLACEHOLDER};

const COMMON_NAMESPACE: &str = "common";
const APP_NAME_FIELD: &str = "appName";
const WELCOME_FIELD: &str = "welcome";

/// Deployment branding, derived from [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branding {
    pub site_name: String,
}

impl Branding {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            site_name: config.effective_site_name().to_string(),
        }
    }
}

/// Rewrites branding fields in every loaded catalog, in place.
///
/// For each catalog with a `common` namespace: `common.appName` is set to
/// the configured site name, and a `common.welcome` value containing the
/// upstream placeholder gets a literal substring replacement. Catalogs or
/// fields that are absent are left untouched. Idempotent.
pub fn inject(catalogs: &mut CatalogSet, branding: &Branding) {
    for catalog in catalogs.values_mut() {
        let Some(common) = catalog.namespace_mut(COMMON_NAMESPACE) else {
            continue;
        };

        common.insert(
            APP_NAME_FIELD.to_string(),
            Message::Text(branding.site_name.clone()),
        );

        if let Some(Message::Text(welcome)) = common.get_mut(WELCOME_FIELD) {
            if welcome.contains(WELCOME_PLACEHOLDER) {
                *welcome = welcome.replace(WELCOME_PLACEHOLDER, &branding.site_name);
            }
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Catalog resource fetching port.
//!
//! A fetcher resolves a (source context, locale or index) pair to a catalog
//! payload. The two contexts are disjoint resource namespaces: the same
//! locale fetched under different contexts may yield entirely different
//! content, and nothing fetched under one context is ever served under the
//! other.

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;

use crate::catalog::{Catalog, CatalogIndex};
use crate::locale::Locale;

// =============================================================================
// SourceContext
// =============================================================================

/// Selector for which of the two catalog origins is consulted.
///
/// Recomputed from [`crate::port::auth::AuthStatus`] at every load; never
/// part of persisted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceContext {
    Authenticated,
    Unauthenticated,
}

impl SourceContext {
    /// Derives the context from an authentication flag.
    #[must_use]
    pub fn from_authenticated(authenticated: bool) -> Self {
        if authenticated {
            SourceContext::Authenticated
        } else {
            SourceContext::Unauthenticated
        }
    }
}

impl fmt::Display for SourceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceContext::Authenticated => write!(f, "authenticated"),
            SourceContext::Unauthenticated => write!(f, "unauthenticated"),
        }
    }
}

// =============================================================================
// FetchError
// =============================================================================

/// Errors that can occur while fetching a catalog resource.
///
/// These never propagate past the loader; every variant is an input to the
/// fallback chain and is reported on the diagnostics channel.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// The resource does not exist in this context's namespace.
    NotFound,

    /// The resource could not be read (I/O, network, permission).
    Io(String),

    /// The resource was read but its payload could not be parsed.
    Malformed(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NotFound => write!(f, "Resource not found"),
            FetchError::Io(msg) => write!(f, "I/O error: {msg}"),
            FetchError::Malformed(msg) => write!(f, "Malformed payload: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

// =============================================================================
// CatalogFetcher Trait
// =============================================================================

/// Port for fetching catalog resources.
///
/// Implementations resolve resources within two independent namespaces,
/// one per [`SourceContext`]. Both methods are expected to fail often in
/// degraded deployments; callers treat every failure as a normal input to
/// the fallback logic.
#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    /// Fetches the aggregate catalog index for a context.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if the index resource is missing,
    /// unreadable, or malformed. A missing index is routine: deployments
    /// are not required to ship one.
    async fn fetch_index(&self, context: SourceContext) -> Result<CatalogIndex, FetchError>;

    /// Fetches one locale's dedicated catalog for a context.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if the catalog resource is missing,
    /// unreadable, or malformed.
    async fn fetch_locale(
        &self,
        context: SourceContext,
        locale: Locale,
    ) -> Result<Catalog, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_derives_from_flag() {
        assert_eq!(
            SourceContext::from_authenticated(true),
            SourceContext::Authenticated
        );
        assert_eq!(
            SourceContext::from_authenticated(false),
            SourceContext::Unauthenticated
        );
    }

    #[test]
    fn fetch_error_display() {
        assert_eq!(format!("{}", FetchError::NotFound), "Resource not found");
        assert!(format!("{}", FetchError::Io("denied".into())).contains("denied"));
        assert!(format!("{}", FetchError::Malformed("bad json".into())).contains("bad json"));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Authentication status port.

/// Reports whether the current session is authenticated.
///
/// Queried at the start of every load/switch/reload to select the catalog
/// source context; the answer is never cached across operations, so an
/// authentication transition between two loads is always observed.
pub trait AuthStatus: Send + Sync {
    fn is_authenticated(&self) -> bool;
}

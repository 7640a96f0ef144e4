// SPDX-License-Identifier: MPL-2.0
//! Diagnostics channel for failures the subsystem swallows by design.
//!
//! Every failure path in the loader and runtime has a defined degraded
//! behavior and never propagates to the caller. To keep those failures
//! visible to operators, each one is reported as a [`LocaleEvent`] on a
//! bounded, non-blocking channel the host application can drain.
//!
//! # Architecture
//!
//! - [`DiagnosticsHandle`]: cheap-to-clone sender used throughout the crate
//! - [`DiagnosticsCollector`]: receiving end, drained by the host
//! - [`LocaleEvent`] / [`LocaleEventKind`]: the event payloads
//!
//! Events are dropped (never blocking) when the channel is full or when no
//! collector exists; diagnostics must not interfere with loading.

mod collector;
mod events;

pub use collector::{channel, DiagnosticsCollector, DiagnosticsHandle};
pub use events::{LocaleEvent, LocaleEventKind};

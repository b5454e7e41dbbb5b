//! # wayfare-core
//!
//! Core traits for the Wayfare path router.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! host integrations (history ports, handler libraries) that don't need the
//! full `wayfare` implementation.
//!
//! # Architecture
//!
//! Wayfare splits routing into three seams, each a trait in this crate:
//!
//! ## History port ([`HistoryPort`])
//!
//! The host's session history is global mutable state, so it sits behind a
//! capability trait: push an entry, request back/forward traversal, read the
//! current location, subscribe for traversal notifications. A browser host
//! wires this to `pushState`/`popstate`; tests use an in-process port.
//!
//! ## Location listeners ([`LocationListener`])
//!
//! The async callback a port fires when the location changes underneath the
//! application (back/forward traversal). The router subscribes one of these
//! and re-dispatches from it; `push` does not fire listeners because the
//! router dispatches that path itself.
//!
//! ## Route handlers ([`RouteHandler`])
//!
//! The terminal endpoint of a dispatch. Receives a fresh [`RouteMatch`]
//! (ordered [`Params`], parsed [`Query`], matched pathname) and runs async
//! application logic. First registered match wins; there is no fallthrough.
//!
//! # Error Types
//!
//! - [`RouterError`] - handler failures surfaced by a dispatch
//! - [`BoxError`] - the opaque error handlers may return

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod handler;
mod history;
mod params;
mod query;
mod route_match;

// Re-exports
pub use error::{BoxError, RouterError};
pub use handler::{DynRouteHandler, RouteHandler};
pub use history::{HistoryPort, HistoryState, Listen, LocationListener, SubscriptionId};
pub use params::Params;
pub use query::Query;
pub use route_match::{DispatchOutcome, RouteMatch};

//! # wayfare - History-Driven Path Routing
//!
//! `wayfare` maps a location (path plus query string) to a registered handler
//! using placeholder-based template matching, and manages history-based
//! navigation through an injected [`HistoryPort`]. It is the client-side
//! routing layer of an application shell: programmatic navigation and host
//! back/forward traversals both funnel into one dispatch path.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use wayfare::{MemoryHistory, RouteMatch, Router};
//!
//! let router = Router::new(Arc::new(MemoryHistory::new()));
//!
//! router.add_route("/", |_: RouteMatch| async { Ok(()) });
//! router.add_route("/editor/:id", |m: RouteMatch| async move {
//!     println!("editing {}", m.params.get("id").unwrap());
//!     Ok(())
//! });
//!
//! router.start().await?;              // dispatches the current location
//! router.navigate("/editor/42?tab=view").await?;
//! ```
//!
//! ## Matching model
//!
//! Templates mix literal segments, `:name` placeholders (one or more
//! non-separator characters, captured into [`RouteMatch::params`]) and `*`
//! wildcards (greedy, uncaptured). Patterns are anchored start-to-end and
//! scanned in registration order; the first match wins, so order encodes
//! priority and overlapping templates are the caller's hazard. An unmatched
//! location logs a warning and is dropped - register a `*` catch-all for 404
//! handling.
//!
//! ## Hosts
//!
//! The router never touches global browsing state directly; it goes through
//! the [`HistoryPort`] capability. [`MemoryHistory`] is the in-process port
//! used by the test suite and by hosts without a session history of their
//! own.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod memory;
mod route;
mod router;
mod template;

pub mod testing;

pub use wayfare_core::{
    // Errors
    BoxError,
    // Dispatch data
    DispatchOutcome,
    // Handler traits
    DynRouteHandler,
    // History port
    HistoryPort,
    HistoryState,
    Listen,
    LocationListener,
    Params,
    Query,
    RouteHandler,
    RouteMatch,
    RouterError,
    SubscriptionId,
};

pub use memory::MemoryHistory;
pub use route::Route;
pub use router::Router;
pub use template::{CompiledTemplate, TemplateError};

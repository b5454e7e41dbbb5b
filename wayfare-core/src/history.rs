//! The history port: the router's view of the host's session history.
//!
//! Browsing state is global and mutable (a host has exactly one current
//! location), so it is abstracted behind a capability trait instead of being
//! touched directly. The router only ever:
//!
//! - pushes a new entry ([`HistoryPort::push`]),
//! - asks to traverse ([`HistoryPort::back`] / [`HistoryPort::forward`]),
//! - reads the current location ([`HistoryPort::current_location`]),
//! - subscribes for traversal notifications ([`HistoryPort::subscribe`]).
//!
//! A browser-backed port wires these to `pushState`/`history.back()`/
//! `popstate`; an in-process port backs them with a plain `Vec` for tests
//! and non-browser hosts.
//!
//! # Notification timing
//!
//! `back()` and `forward()` request a traversal; the resulting location
//! change is observed *asynchronously* through the subscribed listeners,
//! matching browser popstate semantics. A port must not deliver the change
//! notification from inside `back()`/`forward()` themselves.

use crate::error::BoxError;
use std::{any::Any, future::Future, pin::Pin, sync::Arc};

/// Opaque state attached to a history entry.
///
/// The router attaches this value to pushed entries and never interprets it;
/// it travels with the entry and comes back out of the port untouched.
pub type HistoryState = Arc<dyn Any + Send + Sync>;

/// Identifies one subscription on a history port.
///
/// Returned by [`HistoryPort::subscribe`]; pass it back to
/// [`HistoryPort::unsubscribe`] to detach the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(
    /// The port-assigned raw id.
    pub u64,
);

/// The host session-history capability consumed by the router.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a history port",
    label = "missing `HistoryPort` implementation",
    note = "Implement `HistoryPort` (push/back/forward/current_location/subscribe) to host a router."
)]
pub trait HistoryPort: Send + Sync {
    /// Push a new entry with the given url and optional opaque state,
    /// making it the current location.
    fn push(&self, url: &str, state: Option<HistoryState>);

    /// Request a traversal one entry back. The location change, if any, is
    /// delivered later through subscribed listeners.
    fn back(&self);

    /// Request a traversal one entry forward. Same delivery contract as
    /// [`back`](HistoryPort::back).
    fn forward(&self);

    /// The current location: path plus query string as a single string, with
    /// no normalization beyond what the host provides.
    fn current_location(&self) -> String;

    /// Attach a listener for traversal-driven location changes.
    fn subscribe(&self, listener: Arc<dyn LocationListener>) -> SubscriptionId;

    /// Detach a previously attached listener. Unknown ids are ignored.
    fn unsubscribe(&self, id: SubscriptionId);
}

/// An async callback fired when the location changes via history traversal.
///
/// Object-safe so ports can hold heterogeneous listeners; the port awaits the
/// returned future when delivering a change, and a listener error propagates
/// to whatever drives the delivery.
pub trait LocationListener: Send + Sync {
    /// Called with the new location (path plus query string).
    fn on_change<'a>(
        &'a self,
        location: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send + 'a>>;
}

/// An async location-change callback.
///
/// Counterpart to [`LocationListener`] with native `async fn` for
/// implementors that do not need to be stored as trait objects directly; a
/// blanket impl converts automatically.
pub trait Listen: Send + Sync {
    /// Called with the new location (path plus query string).
    fn changed(&self, location: &str) -> impl Future<Output = Result<(), BoxError>> + Send;
}

impl<T: Listen> LocationListener for T {
    fn on_change<'a>(
        &'a self,
        location: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send + 'a>> {
        Box::pin(self.changed(location))
    }
}

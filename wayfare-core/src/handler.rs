//! Route handler traits.
//!
//! Handlers are the terminal point of a dispatch: the router matches a
//! location, builds a [`RouteMatch`], and awaits the winning handler. There
//! is no propagation past a handler - first match wins and scanning stops.
//!
//! # Static vs Dynamic Dispatch
//!
//! [`RouteHandler`] uses native `async fn` for zero-cost static dispatch.
//! The router stores handlers as trait objects, so it goes through
//! [`DynRouteHandler`]; a blanket impl converts automatically.
//!
//! # Usage Patterns
//!
//! 1. **Closure**: `|m: RouteMatch| async move { ... }` returning
//!    `Result<(), BoxError>`
//! 2. **Struct implementation**: `impl RouteHandler for MyScreen`
//!
//! # Failure
//!
//! A handler error is propagated unmodified out of the dispatch that invoked
//! it; the router applies no recovery or retry. Handlers triggered by a
//! history-change notification fail into whatever drives the notification.

use crate::{error::BoxError, route_match::RouteMatch};
use std::{future::Future, pin::Pin};

/// An async route handler.
///
/// Invoked with a fresh [`RouteMatch`] on every navigation that selects its
/// route. The router awaits the returned future but does not serialize
/// overlapping navigations: a second dispatch may start while this one is
/// suspended, so handlers mutating shared state should check that their
/// triggering navigation is still current.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle a route match",
    label = "missing `RouteHandler` implementation",
    note = "Route handlers are async functions of `RouteMatch` returning `Result<(), BoxError>`."
)]
pub trait RouteHandler: Send + Sync {
    /// Called when a navigation matches this handler's route.
    fn handle(&self, matched: RouteMatch) -> impl Future<Output = Result<(), BoxError>> + Send;
}

/// Dynamic object-safe version of [`RouteHandler`].
///
/// Use this trait when you need runtime polymorphism (the router's route
/// table stores `Arc<dyn DynRouteHandler>`).
pub trait DynRouteHandler: Send + Sync {
    /// Called when a navigation matches this handler's route (dynamic
    /// dispatch version).
    fn handle_dyn<'a>(
        &'a self,
        matched: RouteMatch,
    ) -> Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send + 'a>>;
}

// Blanket implementation: any RouteHandler is a DynRouteHandler.
impl<T: RouteHandler> DynRouteHandler for T {
    fn handle_dyn<'a>(
        &'a self,
        matched: RouteMatch,
    ) -> Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send + 'a>> {
        Box::pin(self.handle(matched))
    }
}

// Blanket impl for closures
impl<F, Fut> RouteHandler for F
where
    F: Fn(RouteMatch) -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), BoxError>> + Send,
{
    fn handle(&self, matched: RouteMatch) -> impl Future<Output = Result<(), BoxError>> + Send {
        (self)(matched)
    }
}

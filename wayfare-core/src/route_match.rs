//! Per-navigation match data handed to route handlers.

use crate::{params::Params, query::Query};

/// Everything a handler learns about the navigation that selected it.
///
/// A `RouteMatch` is a transient value object: it is built fresh for every
/// successful dispatch, handed to the winning handler, and discarded when the
/// handler completes. Nothing about it is shared between navigations.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// Values captured by the template's `:name` placeholders, in template
    /// order.
    pub params: Params,
    /// The parsed query string (empty accessor when the location had none).
    pub query: Query,
    /// The matched pathname, without the query string.
    pub path: String,
}

impl RouteMatch {
    /// Build a match for the given pathname.
    pub fn new(path: impl Into<String>, params: Params, query: Query) -> Self {
        Self {
            params,
            query,
            path: path.into(),
        }
    }
}

/// The result of a dispatch operation.
///
/// An unmatched location is a normal outcome, not an error: the router logs a
/// warning and drops the navigation, leaving 404 handling to a caller-
/// registered catch-all route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchOutcome {
    /// Whether any registered route matched (and its handler ran).
    pub matched: bool,
}

impl DispatchOutcome {
    /// A dispatch that found a route and ran its handler.
    pub const fn matched() -> Self {
        Self { matched: true }
    }

    /// A dispatch that fell through every registered route.
    pub const fn unmatched() -> Self {
        Self { matched: false }
    }
}

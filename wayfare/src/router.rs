//! The router: registration, navigation, and dispatch.

use crate::route::Route;
use crate::template::TemplateError;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tracing::{debug, trace, warn};
use wayfare_core::{
    BoxError, DispatchOutcome, HistoryPort, HistoryState, Listen, Query, RouteHandler, RouteMatch,
    RouterError, SubscriptionId,
};

/// Translates navigation requests and history traversals into handler
/// invocations.
///
/// A router owns an ordered route table and a handle to the host's
/// [`HistoryPort`]. [`navigate`] pushes a history entry and dispatches
/// immediately; back/forward traversals arrive asynchronously through the
/// port subscription opened by [`start`] and are re-dispatched from there.
///
/// # Lifecycle
///
/// Two states: *stopped* (initial) and *started*. [`start`] subscribes to the
/// port and dispatches the current location; [`stop`] unsubscribes. Both are
/// idempotent, and routes may be added in either state.
///
/// # Overlapping navigations
///
/// Dispatches are not serialized or queued. A `navigate` call issued while a
/// previous handler's async work is still pending starts a fully independent
/// dispatch, and the two may interleave; handlers that mutate shared state
/// must tolerate this, e.g. by checking that their triggering navigation is
/// still current. An in-flight handler is never cancelled.
///
/// # Example
///
/// ```rust,ignore
/// let history = Arc::new(MemoryHistory::new());
/// let router = Router::new(history);
/// router.add_route("/editor/:id", |m: RouteMatch| async move {
///     open_editor(m.params.get("id").unwrap()).await
/// });
/// router.start().await?;
/// router.navigate("/editor/42?tab=view").await?;
/// ```
///
/// [`navigate`]: Router::navigate
/// [`start`]: Router::start
/// [`stop`]: Router::stop
pub struct Router {
    inner: Arc<RouterInner>,
}

struct RouterInner {
    port: Arc<dyn HistoryPort>,
    routes: Mutex<Vec<Route>>,
    // Some = started. Holding the id here keeps "started" and "subscribed"
    // from drifting apart.
    subscription: Mutex<Option<SubscriptionId>>,
}

// A poisoned table means a panic elsewhere mid-registration; the table itself
// is still a valid Vec, so dispatch keeps working.
fn relock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Router {
    /// Create a stopped router over the given history port.
    pub fn new(port: Arc<dyn HistoryPort>) -> Self {
        Self {
            inner: Arc::new(RouterInner {
                port,
                routes: Mutex::new(Vec::new()),
                subscription: Mutex::new(None),
            }),
        }
    }

    /// Register a route. Order matters: the first registered template to
    /// match a pathname wins at dispatch time, so overlapping templates are
    /// resolved by registration order, not specificity.
    ///
    /// # Panics
    ///
    /// Panics if the template fails pattern compilation. Templates are not
    /// otherwise validated; use [`try_add_route`](Router::try_add_route) or
    /// [`CompiledTemplate::compile`] to pre-validate.
    ///
    /// [`CompiledTemplate::compile`]: crate::CompiledTemplate::compile
    pub fn add_route<H>(&self, template: &str, handler: H)
    where
        H: RouteHandler + 'static,
    {
        self.try_add_route(template, handler)
            .unwrap_or_else(|e| panic!("invalid route template '{template}': {e}"));
    }

    /// Fallible counterpart to [`add_route`](Router::add_route).
    pub fn try_add_route<H>(&self, template: &str, handler: H) -> Result<(), TemplateError>
    where
        H: RouteHandler + 'static,
    {
        let route = Route::new(template, handler)?;
        trace!(template, "route registered");
        relock(&self.inner.routes).push(route);
        Ok(())
    }

    /// Push a new history entry for `path` and dispatch it immediately.
    ///
    /// The pushed entry carries no state; see
    /// [`navigate_with_state`](Router::navigate_with_state).
    pub async fn navigate(&self, path: &str) -> Result<DispatchOutcome, RouterError> {
        self.inner.port.push(path, None);
        self.inner.dispatch(path).await
    }

    /// Like [`navigate`](Router::navigate), attaching an opaque state value
    /// to the history entry. The router never interprets the state; it
    /// travels with the entry and is readable back out of the port.
    pub async fn navigate_with_state(
        &self,
        path: &str,
        state: HistoryState,
    ) -> Result<DispatchOutcome, RouterError> {
        self.inner.port.push(path, Some(state));
        self.inner.dispatch(path).await
    }

    /// Request a traversal one entry back.
    ///
    /// Does not dispatch: the resulting location change is observed
    /// asynchronously through the port subscription and re-dispatched there
    /// (only while started).
    pub fn back(&self) {
        self.inner.port.back();
    }

    /// Request a traversal one entry forward. Same contract as
    /// [`back`](Router::back).
    pub fn forward(&self) {
        self.inner.port.forward();
    }

    /// The current location: path plus query string as a single string, with
    /// no normalization beyond what the port provides.
    pub fn current_path(&self) -> String {
        self.inner.port.current_location()
    }

    /// Subscribe to history traversals and dispatch the current location.
    ///
    /// Idempotent: a second call while started attaches no additional
    /// listener and performs no additional dispatch (the outcome reports
    /// unmatched).
    pub async fn start(&self) -> Result<DispatchOutcome, RouterError> {
        {
            let mut subscription = relock(&self.inner.subscription);
            if subscription.is_some() {
                return Ok(DispatchOutcome::unmatched());
            }
            let listener = Arc::new(RouterListener {
                inner: Arc::downgrade(&self.inner),
            });
            *subscription = Some(self.inner.port.subscribe(listener));
        }
        debug!("router started");
        let location = self.inner.port.current_location();
        self.inner.dispatch(&location).await
    }

    /// Stop listening for history traversals. Idempotent.
    pub fn stop(&self) {
        if let Some(id) = relock(&self.inner.subscription).take() {
            self.inner.port.unsubscribe(id);
            debug!("router stopped");
        }
    }

    /// Whether the router is currently listening for history traversals.
    pub fn is_started(&self) -> bool {
        relock(&self.inner.subscription).is_some()
    }
}

impl Clone for Router {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("routes", &relock(&self.inner.routes).len())
            .field("started", &self.is_started())
            .finish()
    }
}

impl RouterInner {
    /// Match `location` against the route table and run the winning handler.
    async fn dispatch(&self, location: &str) -> Result<DispatchOutcome, RouterError> {
        let (pathname, search) = match location.split_once('?') {
            Some((path, search)) => (path, Some(search)),
            None => (location, None),
        };
        let query = Query::from(search);

        // Scan under the lock, run the handler outside it: the handler may
        // itself navigate or register routes.
        let hit = relock(&self.routes).iter().find_map(|route| {
            route
                .match_path(pathname)
                .map(|params| (route.template().to_owned(), route.handler(), params))
        });

        let Some((template, handler, params)) = hit else {
            warn!(path = pathname, "no route matched");
            return Ok(DispatchOutcome::unmatched());
        };

        debug!(template = %template, path = pathname, "dispatching");
        let matched = RouteMatch::new(pathname, params, query);
        handler
            .handle_dyn(matched)
            .await
            .map_err(|e| RouterError::handler(pathname, e))?;
        Ok(DispatchOutcome::matched())
    }
}

/// The listener the router subscribes on its port: re-dispatches every
/// traversal-driven location change.
struct RouterListener {
    // Weak, so a dropped router cannot be kept alive by a port that was
    // never asked to unsubscribe.
    inner: Weak<RouterInner>,
}

impl Listen for RouterListener {
    async fn changed(&self, location: &str) -> Result<(), BoxError> {
        let Some(inner) = self.inner.upgrade() else {
            return Ok(());
        };
        inner
            .dispatch(location)
            .await
            .map(|_| ())
            .map_err(|e| Box::new(e) as BoxError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryHistory;
    use crate::testing::RecordingHandler;

    fn fixture() -> (Router, Arc<MemoryHistory>) {
        let history = Arc::new(MemoryHistory::new());
        let router = Router::new(history.clone());
        (router, history)
    }

    #[tokio::test]
    async fn first_registered_route_wins() {
        let (router, _history) = fixture();
        let by_param = RecordingHandler::new();
        let by_literal = RecordingHandler::new();
        router.add_route("/a/:id", by_param.clone());
        router.add_route("/a/fixed", by_literal.clone());

        let outcome = router.navigate("/a/fixed").await.unwrap();
        assert!(outcome.matched);
        // Registration order, not specificity: the placeholder route fires.
        assert_eq!(by_param.count(), 1);
        assert_eq!(by_literal.count(), 0);
        assert_eq!(by_param.matches()[0].params.get("id"), Some("fixed"));
    }

    #[tokio::test]
    async fn unmatched_navigation_is_not_an_error() {
        let (router, _history) = fixture();
        let handler = RecordingHandler::new();
        router.add_route("/known", handler.clone());

        let outcome = router.navigate("/missing").await.unwrap();
        assert!(!outcome.matched);
        assert_eq!(handler.count(), 0);
    }

    #[tokio::test]
    async fn start_is_idempotent() {
        let (router, _history) = fixture();
        let root = RecordingHandler::new();
        router.add_route("/", root.clone());

        router.start().await.unwrap();
        router.start().await.unwrap();
        assert!(router.is_started());
        assert_eq!(root.count(), 1);
    }

    #[tokio::test]
    async fn stop_detaches_the_listener() {
        let (router, history) = fixture();
        let root = RecordingHandler::new();
        router.add_route("/", root.clone());
        router.add_route("/away", RecordingHandler::new());

        router.start().await.unwrap();
        router.navigate("/away").await.unwrap();
        router.stop();
        router.stop(); // idempotent

        history.back();
        history.deliver().await.unwrap();
        assert_eq!(root.count(), 1); // only the initial dispatch
    }

    #[tokio::test]
    async fn handler_failure_propagates() {
        let (router, _history) = fixture();
        router.add_route("/boom", crate::testing::FailingHandler::new("db offline"));

        let err = router.navigate("/boom").await.unwrap_err();
        let RouterError::Handler { path, source } = err;
        assert_eq!(path, "/boom");
        assert_eq!(source.to_string(), "db offline");
    }
}

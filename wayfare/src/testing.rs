//! Testing utilities for Wayfare.
//!
//! - [`RecordingHandler`]: records every [`RouteMatch`] it receives
//! - [`FailingHandler`]: always returns an error, for failure-path tests
//!
//! Both are cheap to clone; clones share the same recorded state, so a test
//! can keep one clone and hand the other to `add_route`.

use std::sync::{Arc, Mutex};
use wayfare_core::{BoxError, RouteHandler, RouteMatch};

/// A handler that records every match it is invoked with.
///
/// # Example
///
/// ```rust,ignore
/// let handler = RecordingHandler::new();
/// router.add_route("/editor/:id", handler.clone());
///
/// router.navigate("/editor/7").await?;
///
/// assert_eq!(handler.count(), 1);
/// assert_eq!(handler.matches()[0].params.get("id"), Some("7"));
/// ```
pub struct RecordingHandler {
    matches: Arc<Mutex<Vec<RouteMatch>>>,
}

impl RecordingHandler {
    /// Create a handler with an empty record.
    pub fn new() -> Self {
        Self {
            matches: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A clone of the recorded matches, in invocation order.
    pub fn matches(&self) -> Vec<RouteMatch> {
        self.matches.lock().unwrap().clone()
    }

    /// The number of recorded invocations.
    pub fn count(&self) -> usize {
        self.matches.lock().unwrap().len()
    }

    /// Clear the record.
    pub fn clear(&self) {
        self.matches.lock().unwrap().clear();
    }
}

impl Default for RecordingHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RecordingHandler {
    fn clone(&self) -> Self {
        Self {
            matches: self.matches.clone(),
        }
    }
}

impl RouteHandler for RecordingHandler {
    async fn handle(&self, matched: RouteMatch) -> Result<(), BoxError> {
        self.matches.lock().unwrap().push(matched);
        Ok(())
    }
}

/// A handler that always fails with the given message.
pub struct FailingHandler {
    message: String,
}

impl FailingHandler {
    /// Create a handler failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl RouteHandler for FailingHandler {
    async fn handle(&self, _matched: RouteMatch) -> Result<(), BoxError> {
        Err(self.message.clone().into())
    }
}

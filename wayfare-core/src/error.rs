//! Error types for Wayfare.
//!
//! The router deliberately has a small error surface:
//!
//! - [`RouterError`] - Failures surfaced by a dispatch
//! - [`BoxError`] - The opaque error type handlers may return
//!
//! An unmatched location is *not* an error (see [`DispatchOutcome`]); it is
//! logged as a warning and dropped, so only handler failures travel this path.
//!
//! [`DispatchOutcome`]: crate::DispatchOutcome

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by a router dispatch.
#[derive(Error, Debug)]
pub enum RouterError {
    /// The matched route's handler returned an error.
    ///
    /// The router applies no recovery, retry, or suppression; the failure is
    /// propagated unmodified to whoever triggered the dispatch.
    #[error("route handler failed for '{path}'")]
    Handler {
        /// The pathname that matched the failing route.
        path: String,
        /// The handler's own error.
        #[source]
        source: BoxError,
    },
}

impl RouterError {
    /// Wrap a handler failure for the given pathname.
    pub fn handler(path: impl Into<String>, source: BoxError) -> Self {
        Self::Handler {
            path: path.into(),
            source,
        }
    }
}

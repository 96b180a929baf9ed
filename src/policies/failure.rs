//! # Failure policy for synchronous dispatch.
//!
//! [`FailurePolicy`] decides what `emit` does when a synchronous listener
//! returns an error.
//!
//! ```text
//! FailurePolicy::Abort     → stop at the first failure, skip the rest,
//!                            return EmitError::ListenerFailed (default)
//! FailurePolicy::Continue  → run every listener, log each failure,
//!                            return EmitError::ListenersFailed at the end
//! ```
//!
//! Asynchronous listeners are unaffected: their failures are always logged at
//! the boundary of the detached execution and never reach the caller.

/// Policy controlling how `emit` reacts to a failing synchronous listener.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Propagate the first failure and skip the remaining listeners (default).
    #[default]
    Abort,
    /// Isolate failures: keep dispatching and report all of them afterwards.
    Continue,
}

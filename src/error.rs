//! Error types used by the emitter and its listeners.
//!
//! This module defines two error enums:
//!
//! - [`ListenerError`]: errors returned by an individual listener invocation.
//! - [`EmitError`]: errors surfaced to the caller of [`EventEmitter::emit`](crate::EventEmitter::emit).
//!
//! Both types provide `as_label` for logs/metrics. Unknown keys and unknown
//! handles are never errors: they are no-ops by definition.

use thiserror::Error;

/// # Errors produced by listener execution.
///
/// A listener returns `Err(ListenerError)` to signal that it could not handle
/// the payload. During synchronous dispatch the error reaches the caller of
/// `emit`; during asynchronous dispatch it is logged and dropped.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListenerError {
    /// Listener failed while handling the payload.
    #[error("listener failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// Listener refused the payload (validation, unexpected state, ...).
    #[error("payload rejected: {reason}")]
    Rejected {
        /// Why the payload was refused.
        reason: String,
    },
}

impl ListenerError {
    /// Shorthand for [`ListenerError::Fail`].
    ///
    /// # Example
    /// ```
    /// use eventvisor::ListenerError;
    ///
    /// let err = ListenerError::fail("disk full");
    /// assert_eq!(err.to_string(), "listener failed: disk full");
    /// ```
    pub fn fail(error: impl Into<String>) -> Self {
        ListenerError::Fail {
            error: error.into(),
        }
    }

    /// Shorthand for [`ListenerError::Rejected`].
    pub fn rejected(reason: impl Into<String>) -> Self {
        ListenerError::Rejected {
            reason: reason.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use eventvisor::ListenerError;
    ///
    /// assert_eq!(ListenerError::fail("x").as_label(), "listener_failed");
    /// assert_eq!(ListenerError::rejected("x").as_label(), "listener_rejected");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ListenerError::Fail { .. } => "listener_failed",
            ListenerError::Rejected { .. } => "listener_rejected",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ListenerError::Fail { error } => format!("error: {error}"),
            ListenerError::Rejected { reason } => format!("rejected: {reason}"),
        }
    }
}

/// # Errors produced by an emission.
///
/// Which variant is returned depends on the emitter's
/// [`FailurePolicy`](crate::FailurePolicy):
/// - `Abort` stops at the first failing listener → [`EmitError::ListenerFailed`];
/// - `Continue` runs every listener → [`EmitError::ListenersFailed`].
///
/// `key` holds the `Debug` rendering of the event key, so the error type does
/// not depend on the key type.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmitError {
    /// A synchronous listener failed; listeners after it were skipped.
    #[error("listener #{position} for {key} failed: {source}")]
    ListenerFailed {
        /// Event key (debug-formatted).
        key: String,
        /// Index of the failing listener in the dispatch snapshot.
        position: usize,
        /// The listener's error.
        #[source]
        source: ListenerError,
    },

    /// One or more synchronous listeners failed; all listeners ran.
    #[error("{} listener(s) for {key} failed", .failures.len())]
    ListenersFailed {
        /// Event key (debug-formatted).
        key: String,
        /// Snapshot index and error of every failed listener, in dispatch order.
        failures: Vec<(usize, ListenerError)>,
    },
}

impl EmitError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            EmitError::ListenerFailed { .. } => "emit_listener_failed",
            EmitError::ListenersFailed { .. } => "emit_listeners_failed",
        }
    }

    /// Errors of the failed listeners, in dispatch order.
    pub fn listener_errors(&self) -> Vec<&ListenerError> {
        match self {
            EmitError::ListenerFailed { source, .. } => vec![source],
            EmitError::ListenersFailed { failures, .. } => {
                failures.iter().map(|(_, e)| e).collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listener_error_labels() {
        assert_eq!(ListenerError::fail("boom").as_label(), "listener_failed");
        assert_eq!(ListenerError::rejected("no").as_message(), "rejected: no");
    }

    #[test]
    fn test_emit_error_display() {
        let err = EmitError::ListenerFailed {
            key: "\"move\"".into(),
            position: 2,
            source: ListenerError::fail("boom"),
        };
        assert_eq!(
            err.to_string(),
            "listener #2 for \"move\" failed: listener failed: boom"
        );
        assert_eq!(err.as_label(), "emit_listener_failed");
        assert_eq!(err.listener_errors(), vec![&ListenerError::fail("boom")]);
    }

    #[test]
    fn test_emit_error_many() {
        let err = EmitError::ListenersFailed {
            key: "k".into(),
            failures: vec![
                (0, ListenerError::fail("a")),
                (3, ListenerError::rejected("b")),
            ],
        };
        assert_eq!(err.to_string(), "2 listener(s) for k failed");
        assert_eq!(err.listener_errors().len(), 2);
    }
}

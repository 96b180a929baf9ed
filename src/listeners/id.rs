//! Opaque listener handles.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

/// Global sequence counter for listener handles.
static LISTENER_SEQ: AtomicU64 = AtomicU64::new(1);

/// Opaque handle identifying one registration.
///
/// Returned by `register`/`register_once` and used as the only key for
/// targeted removal. Handles are unique across every emitter in the process
/// and are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Allocates the next handle.
    pub(crate) fn next() -> Self {
        ListenerId(LISTENER_SEQ.fetch_add(1, AtomicOrdering::Relaxed))
    }

    /// Raw numeric value (for logs/metrics).
    #[inline]
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

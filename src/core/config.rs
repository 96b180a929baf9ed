//! # Emitter configuration.
//!
//! Provides [`EmitterConfig`] centralized settings for one [`EventEmitter`](crate::EventEmitter).
//!
//! ## Sentinel values
//! - `listener_warn_threshold = 0` → disabled (no warning however many listeners a key holds)

use tokio::runtime::Handle;

use crate::policies::FailurePolicy;

/// Where asynchronous listeners run.
///
/// - [`Spawner::Auto`]: the current Tokio runtime's blocking pool if one is
///   reachable from the emitting thread, otherwise a fresh OS thread (default).
/// - [`Spawner::Tokio`]: always the given runtime's blocking pool.
/// - [`Spawner::Thread`]: always a fresh, named OS thread.
#[derive(Clone, Debug, Default)]
pub enum Spawner {
    /// Use the ambient Tokio runtime when present, else an OS thread.
    #[default]
    Auto,
    /// Use this runtime's blocking pool.
    Tokio(Handle),
    /// Spawn a dedicated OS thread per async invocation.
    Thread,
}

/// Configuration for an [`EventEmitter`](crate::EventEmitter).
///
/// ## Field semantics
/// - `failure_policy`: What `emit` does when a synchronous listener fails
/// - `spawner`: Execution mechanism for asynchronous listeners
/// - `listener_warn_threshold`: Warn when one key holds more listeners than this (`0` = off)
/// - `thread_name`: Name given to OS threads spawned for async listeners
///
/// ## Notes
/// All fields are public for flexibility. Prefer the helper accessors over
/// repeating sentinel checks (`0`).
#[derive(Clone, Debug)]
pub struct EmitterConfig {
    /// Abort on the first failing synchronous listener, or run them all.
    pub failure_policy: FailurePolicy,

    /// Execution mechanism for `Options::ASYNC` listeners.
    pub spawner: Spawner,

    /// Number of listeners per key above which registration logs a warning.
    ///
    /// A key that keeps growing usually means listeners are registered in a
    /// loop and never removed.
    pub listener_warn_threshold: usize,

    /// Thread name for `Spawner::Thread` (and `Spawner::Auto` without a runtime).
    pub thread_name: String,
}

impl EmitterConfig {
    /// Returns the listener warning threshold as an `Option`.
    ///
    /// - `None` → disabled
    /// - `Some(n)` → warn once a key holds more than `n` listeners
    #[inline]
    pub fn warn_threshold(&self) -> Option<usize> {
        if self.listener_warn_threshold == 0 {
            None
        } else {
            Some(self.listener_warn_threshold)
        }
    }
}

impl Default for EmitterConfig {
    /// Default configuration:
    ///
    /// - `failure_policy = FailurePolicy::Abort`
    /// - `spawner = Spawner::Auto`
    /// - `listener_warn_threshold = 0` (disabled)
    /// - `thread_name = "eventvisor-async"`
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::default(),
            spawner: Spawner::default(),
            listener_warn_threshold: 0,
            thread_name: "eventvisor-async".to_string(),
        }
    }
}

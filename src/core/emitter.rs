//! # EventEmitter - registry and dispatcher.
//!
//! [`EventEmitter`] maps event keys to ordered listener sequences and invokes
//! them on [`emit`](EventEmitter::emit).
//!
//! ## Architecture
//! ```text
//! EventEmitter (Clone, Arc inside)
//!   └─► Shared
//!         ├─ registry: Mutex<Registry>   (held for mutation / snapshot only)
//!         └─ config:   EmitterConfig
//!
//! emit(key, &payload)
//!   ├─► lock → snapshot(key) → unlock
//!   └─► for record in snapshot:
//!         ├─ Sync  ─► call inline ─► Err? FailurePolicy::{Abort, Continue}
//!         └─ Async ─► spawn_detached(listener.clone(), payload.clone())
//! ```
//!
//! ## Rules
//! - Unknown keys and handles are no-ops, never errors.
//! - Dispatch walks a snapshot, so listeners may register, remove or emit
//!   (even their own key) while running; changes apply to the next emission.
//! - No lock is held while a listener runs.
//!
//! ## Example
//! ```rust
//! use eventvisor::EventEmitter;
//!
//! let emitter: EventEmitter<u32> = EventEmitter::new();
//! let id = emitter.on("tick", |n: &u32| {
//!     println!("tick {n}");
//!     Ok(())
//! });
//! emitter.once("tick", |_: &u32| Ok(()));
//! assert_eq!(emitter.listeners_count("tick"), 2);
//!
//! emitter.emit("tick", &1).unwrap();
//! assert_eq!(emitter.listeners_count("tick"), 1);
//!
//! assert!(emitter.remove_listener("tick", id));
//! assert!(emitter.event_keys().is_empty());
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use crate::error::{EmitError, ListenerError};
use crate::listeners::{Listener, ListenerId, ListenerRecord};
use crate::policies::{Dispatch, FailurePolicy, Options};

use super::config::EmitterConfig;
use super::dispatch::{self, AsyncJob};
use super::once;
use super::registry::{EventKey, Registry};

/// State shared by every clone of an emitter (and weakly by once wrappers).
pub(crate) struct Shared<P, K> {
    registry: Mutex<Registry<P, K>>,
    config: EmitterConfig,
}

impl<P, K: EventKey> Shared<P, K> {
    /// Removes a once record after it fired.
    pub(crate) fn detach(&self, key: &K, id: ListenerId) {
        let removed = self.registry.lock().remove(key, id);
        if removed.is_some() {
            debug!(key = ?key, listener = %id, "once listener detached");
        }
    }
}

/// Generic event registry and dispatcher.
///
/// `P` is the payload handed to listeners, `K` the key addressing a channel
/// (default `String`). Cloning an emitter yields another handle to the same
/// registry.
pub struct EventEmitter<P, K = String> {
    shared: Arc<Shared<P, K>>,
}

impl<P, K> EventEmitter<P, K>
where
    P: 'static,
    K: EventKey,
{
    /// Creates an empty emitter with [`EmitterConfig::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    /// Creates an empty emitter with the given configuration.
    #[must_use]
    pub fn with_config(config: EmitterConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                registry: Mutex::new(Registry::new()),
                config,
            }),
        }
    }

    /// Configuration this emitter was built with.
    pub fn config(&self) -> &EmitterConfig {
        &self.shared.config
    }

    /// Registers `listener` under `key` and returns its handle.
    ///
    /// `options` picks placement and dispatch; see [`Options`] for the
    /// `ASYNC` over `PREPEND` precedence. Never fails.
    pub fn register(
        &self,
        key: impl Into<K>,
        listener: impl Into<Listener<P>>,
        options: Options,
    ) -> ListenerId {
        self.insert(key.into(), listener.into(), ListenerId::next(), options, false)
    }

    /// Registers a listener that fires at most once, then removes itself.
    ///
    /// Each call creates an independent single-shot registration.
    pub fn register_once(
        &self,
        key: impl Into<K>,
        listener: impl Into<Listener<P>>,
        options: Options,
    ) -> ListenerId {
        let key = key.into();
        let id = ListenerId::next();
        let wrapped = once::wrap(listener.into(), key.clone(), id, Arc::downgrade(&self.shared));
        self.insert(key, wrapped, id, options, true)
    }

    /// Shorthand for `register(key, f, Options::NONE)`.
    pub fn on<F>(&self, key: impl Into<K>, f: F) -> ListenerId
    where
        F: Fn(&P) -> Result<(), ListenerError> + Send + Sync + 'static,
    {
        self.register(key, Listener::new(f), Options::NONE)
    }

    /// Shorthand for `register_once(key, f, Options::NONE)`.
    pub fn once<F>(&self, key: impl Into<K>, f: F) -> ListenerId
    where
        F: Fn(&P) -> Result<(), ListenerError> + Send + Sync + 'static,
    {
        self.register_once(key, Listener::new(f), Options::NONE)
    }

    fn insert(
        &self,
        key: K,
        listener: Listener<P>,
        id: ListenerId,
        options: Options,
        once: bool,
    ) -> ListenerId {
        let (placement, dispatch) = options.resolve();
        debug!(key = ?key, listener = %id, ?placement, ?dispatch, once, "listener registered");

        let record = ListenerRecord::new(id, listener, dispatch, once);
        let len = self.shared.registry.lock().insert(key.clone(), record, placement);

        if let Some(limit) = self.shared.config.warn_threshold() {
            if len > limit {
                warn!(
                    key = ?key,
                    listener = %id,
                    count = len,
                    limit,
                    "listener count above threshold; possible leak"
                );
            }
        }
        id
    }

    /// Fires `key`, invoking a snapshot of its listeners in order.
    ///
    /// - No listeners: returns `Ok(())` without doing anything.
    /// - Sync records run inline with `payload`; async records get their own
    ///   clone of the payload on a detached execution.
    /// - A failing sync listener is handled per [`FailurePolicy`].
    pub fn emit<Q>(&self, key: &Q, payload: &P) -> Result<(), EmitError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
        P: Clone + Send,
    {
        let snapshot = self.shared.registry.lock().snapshot(key);
        if snapshot.is_empty() {
            trace!(key = ?key, "emit without listeners");
            return Ok(());
        }
        trace!(key = ?key, listeners = snapshot.len(), "emit");

        let policy = self.shared.config.failure_policy;
        let mut failures = Vec::new();

        for (position, record) in snapshot.into_iter().enumerate() {
            match record.dispatch() {
                Dispatch::Async => {
                    let job = AsyncJob {
                        key: format!("{key:?}"),
                        id: record.id(),
                        listener: record.listener().clone(),
                        payload: payload.clone(),
                    };
                    dispatch::spawn_detached(&self.shared.config, job);
                }
                Dispatch::Sync => {
                    let Err(err) = record.call(payload) else {
                        continue;
                    };
                    match policy {
                        FailurePolicy::Abort => {
                            return Err(EmitError::ListenerFailed {
                                key: format!("{key:?}"),
                                position,
                                source: err,
                            });
                        }
                        FailurePolicy::Continue => {
                            warn!(
                                key = ?key,
                                listener = %record.id(),
                                position,
                                label = err.as_label(),
                                error = %err,
                                "listener failed; continuing"
                            );
                            failures.push((position, err));
                        }
                    }
                }
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(EmitError::ListenersFailed {
                key: format!("{key:?}"),
                failures,
            })
        }
    }

    /// Removes the record `id` under `key`. Returns `true` if it was present.
    pub fn remove_listener<Q>(&self, key: &Q, id: ListenerId) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        // The guard is released at the end of this statement; `removed` is
        // dropped afterwards, outside the lock.
        let removed = self.shared.registry.lock().remove(key, id);
        if removed.is_some() {
            debug!(key = ?key, listener = %id, "listener removed");
        }
        removed.is_some()
    }

    /// Removes every listener under `key`.
    pub fn remove_all_listeners<Q>(&self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        let removed = self.shared.registry.lock().remove_key(key);
        if !removed.is_empty() {
            debug!(key = ?key, dropped = removed.len(), "listeners removed for key");
        }
    }

    /// Removes every listener under every key.
    pub fn clear(&self) {
        let removed = self.shared.registry.lock().clear();
        let dropped: usize = removed.values().map(Vec::len).sum();
        debug!(keys = removed.len(), dropped, "registry cleared");
    }

    /// Independent copy of the listener records under `key` (empty if absent).
    pub fn listeners<Q>(&self, key: &Q) -> Vec<ListenerRecord<P>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.shared.registry.lock().snapshot(key)
    }

    /// Number of listeners under `key` (0 if absent).
    pub fn listeners_count<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.shared.registry.lock().count(key)
    }

    /// `true` if `key` holds at least one listener.
    pub fn has_listeners<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.shared.registry.lock().contains(key)
    }

    /// Keys currently holding at least one listener, in unspecified order.
    pub fn event_keys(&self) -> Vec<K> {
        self.shared.registry.lock().keys()
    }

    /// `true` if no key holds a listener.
    pub fn is_empty(&self) -> bool {
        self.shared.registry.lock().is_empty()
    }
}

impl<P, K> Default for EventEmitter<P, K>
where
    P: 'static,
    K: EventKey,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P, K> Clone for EventEmitter<P, K> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<P, K: EventKey> fmt::Debug for EventEmitter<P, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("keys", &self.shared.registry.lock().len())
            .field("config", &self.shared.config)
            .finish()
    }
}

//! # eventvisor
//!
//! **eventvisor** is a small, generic in-process event emitter.
//!
//! An [`EventEmitter<P, K>`](EventEmitter) associates event keys (`K`, default
//! `String`) with ordered listener sequences and invokes them with a payload
//! (`P`) when the key is emitted. Listeners run inline or on detached
//! executions, may be one-shot, and are removed through opaque handles.
//!
//! ## Architecture
//! ```text
//!   register(key, listener, Options)        register_once(key, listener, Options)
//!            │                                        │ (self-removing wrapper)
//!            ▼                                        ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  EventEmitter<P, K>                                               │
//! │  - Mutex<Registry>: K → [ListenerRecord { id, listener, mode }]   │
//! │  - EmitterConfig: failure policy, spawner, warn threshold         │
//! └───────────────────────────────┬───────────────────────────────────┘
//!                                 │ emit(key, &payload)
//!                                 ▼
//!                     snapshot of key's sequence
//!                    (lock released before dispatch)
//!                                 │
//!              ┌──────────────────┴──────────────────┐
//!              ▼                                     ▼
//!      Dispatch::Sync                          Dispatch::Async
//!   call(&payload) inline                 clone(listener, payload)
//!   Err → FailurePolicy                   ─► spawn_blocking / thread
//!     Abort:    stop, return error           errors & panics logged
//!     Continue: run all, report all          (never reach the caller)
//! ```
//!
//! ### Listener lifecycle
//! ```text
//! Registered ──(emit, once)──► Invoked ──► Removed
//! Registered ──remove_listener / remove_all_listeners / clear──► Removed
//! ```
//!
//! ## Features
//! | Area              | Description                                                  | Key types / traits                          |
//! |-------------------|--------------------------------------------------------------|---------------------------------------------|
//! | **Registry**      | Register, emit, remove and inspect listeners per key.        | [`EventEmitter`], [`ListenerRecord`]        |
//! | **Listeners**     | Owned callables with handle-based removal.                   | [`Listener`], [`ListenerId`]                |
//! | **Policies**      | Append/prepend, sync/async, abort/continue on failure.       | [`Options`], [`FailurePolicy`]              |
//! | **Capability**    | Give host types event support by composition.                | [`Emitting`]                                |
//! | **Errors**        | Typed listener and emission errors.                          | [`ListenerError`], [`EmitError`]            |
//! | **Configuration** | Per-emitter settings.                                        | [`EmitterConfig`], [`Spawner`]              |
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use eventvisor::{EventEmitter, Listener, ListenerError, Options};
//!
//! #[derive(Clone, Debug)]
//! struct Event {
//!     name: String,
//! }
//!
//! let emitter: EventEmitter<Event> = EventEmitter::new();
//! let seen = Arc::new(AtomicUsize::new(0));
//!
//! let s = Arc::clone(&seen);
//! emitter.on("move", move |evt: &Event| {
//!     assert_eq!(evt.name, "move event info");
//!     s.fetch_add(1, Ordering::SeqCst);
//!     Ok(())
//! });
//!
//! // Arity-0 listener, runs before everything else.
//! emitter.register("move", Listener::unit(|| Ok(())), Options::PREPEND);
//!
//! // Fires on the first emission only.
//! emitter.once("move", |_: &Event| Err(ListenerError::fail("first move only")));
//!
//! let evt = Event { name: "move event info".into() };
//! assert!(emitter.emit("move", &evt).is_err());
//! emitter.emit("move", &evt).unwrap();
//! assert_eq!(seen.load(Ordering::SeqCst), 2);
//!
//! emitter.remove_all_listeners("move");
//! assert_eq!(emitter.listeners_count("move"), 0);
//! ```
mod capability;
mod core;
mod error;
mod listeners;
mod policies;

// ---- Public re-exports ----

pub use capability::Emitting;
pub use crate::core::{EmitterConfig, EventEmitter, EventKey, Spawner};
pub use error::{EmitError, ListenerError};
pub use listeners::{Listener, ListenerFn, ListenerId, ListenerRecord};
pub use policies::{Dispatch, FailurePolicy, Options, Placement};

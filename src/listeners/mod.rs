//! # Listeners: callables, handles and registry records.
//!
//! ## Architecture
//! ```text
//! register(key, impl Into<Listener<P>>, Options)
//!        │
//!        ▼
//!   ListenerRecord { id: ListenerId, listener: Listener<P>, dispatch, once }
//!        │
//!        └──► stored in the key's sequence (append / prepend)
//!
//! emit(key, &payload)
//!        │  (snapshot = Vec<ListenerRecord<P>> clones, Arc-shared callables)
//!        ├──► Dispatch::Sync  ─► listener.call(&payload) on the caller's thread
//!        └──► Dispatch::Async ─► listener.clone() + payload.clone() ─► detached
//! ```
//!
//! ## Rules
//! - A listener is owned by the registry; registration never borrows from the caller.
//! - Handles ([`ListenerId`]) are the only removal key; callables are not compared.
//! - Registering the same callable twice yields two records with distinct handles.

mod id;
mod listener;
mod record;

pub use id::ListenerId;
pub use listener::{Listener, ListenerFn};
pub use record::ListenerRecord;

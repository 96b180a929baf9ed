//! # Self-removing ("once") listener wrapper.
//!
//! The wrapper captures only its own handle, its key and a `Weak` reference to
//! the emitter state, never itself:
//!
//! ```text
//! wrapper(&payload)
//!   ├─ fired.swap(true) was already true ─► return Ok (another emission won)
//!   ├─ listener.call(&payload)
//!   └─ on scope exit (also on panic): detach(key, id) if the emitter is alive
//! ```
//!
//! The atomic flag makes the at-most-once guarantee hold even when two threads
//! emit concurrently from snapshots that both contain the wrapper, or when the
//! listener re-emits its own key.

use std::sync::Weak;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::listeners::{Listener, ListenerId};

use super::emitter::Shared;
use super::registry::EventKey;

/// Removes the once record when dropped.
struct Detach<'a, P, K: EventKey> {
    shared: &'a Weak<Shared<P, K>>,
    key: &'a K,
    id: ListenerId,
}

impl<P, K: EventKey> Drop for Detach<'_, P, K> {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            shared.detach(self.key, self.id);
        }
    }
}

/// Wraps `listener` so it fires at most once and then removes record `id`.
pub(crate) fn wrap<P, K>(
    listener: Listener<P>,
    key: K,
    id: ListenerId,
    shared: Weak<Shared<P, K>>,
) -> Listener<P>
where
    P: 'static,
    K: EventKey,
{
    let fired = AtomicBool::new(false);
    Listener::new(move |payload: &P| {
        if fired.swap(true, Ordering::AcqRel) {
            return Ok(());
        }
        let _detach = Detach {
            shared: &shared,
            key: &key,
            id,
        };
        listener.call(payload)
    })
}

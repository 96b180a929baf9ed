//! # Listener record
//!
//! One entry in a key's sequence: the callable, its handle and how it is
//! dispatched. [`EventEmitter::listeners`](crate::EventEmitter::listeners)
//! returns clones of these records; mutating a returned `Vec` never touches
//! the registry.

use crate::error::ListenerError;
use crate::policies::Dispatch;

use super::{Listener, ListenerId};

/// Registered listener with its handle and dispatch mode.
#[derive(Debug)]
pub struct ListenerRecord<P> {
    id: ListenerId,
    listener: Listener<P>,
    dispatch: Dispatch,
    once: bool,
}

impl<P> ListenerRecord<P> {
    pub(crate) fn new(
        id: ListenerId,
        listener: Listener<P>,
        dispatch: Dispatch,
        once: bool,
    ) -> Self {
        Self {
            id,
            listener,
            dispatch,
            once,
        }
    }

    /// Handle of this registration.
    #[inline]
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// The stored callable.
    #[inline]
    pub fn listener(&self) -> &Listener<P> {
        &self.listener
    }

    /// How the record is invoked on emission.
    #[inline]
    pub fn dispatch(&self) -> Dispatch {
        self.dispatch
    }

    /// `true` if the record was registered with `register_once`.
    #[inline]
    pub fn is_once(&self) -> bool {
        self.once
    }

    /// Invokes the stored callable inline, regardless of its dispatch mode.
    ///
    /// For a once record this consumes the registration like an emission would.
    pub fn call(&self, payload: &P) -> Result<(), ListenerError> {
        self.listener.call(payload)
    }
}

impl<P> Clone for ListenerRecord<P> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            listener: self.listener.clone(),
            dispatch: self.dispatch,
            once: self.once,
        }
    }
}

//! # Event capability for host types.
//!
//! A host type gains event support by **embedding** an [`EventEmitter`] and
//! implementing [`Emitting`]; the provided methods forward to the embedded
//! emitter. Hosts that want a narrower surface can skip the trait and expose
//! only the methods they need.
//!
//! ## Example
//! ```rust
//! use eventvisor::{Emitting, EventEmitter};
//!
//! #[derive(Clone, Debug)]
//! struct Moved { x: i32 }
//!
//! #[derive(Default)]
//! struct Robot {
//!     events: EventEmitter<Moved>,
//! }
//!
//! impl Emitting<Moved> for Robot {
//!     fn emitter(&self) -> &EventEmitter<Moved> {
//!         &self.events
//!     }
//! }
//!
//! let robot = Robot::default();
//! robot.on("move", |m: &Moved| {
//!     assert_eq!(m.x, 3);
//!     Ok(())
//! });
//! robot.emit("move", &Moved { x: 3 }).unwrap();
//! assert_eq!(robot.listeners_count("move"), 1);
//! ```

use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;

use crate::core::{EventEmitter, EventKey};
use crate::error::{EmitError, ListenerError};
use crate::listeners::{Listener, ListenerId};
use crate::policies::Options;

/// Implemented by types that carry an [`EventEmitter`].
///
/// Only [`emitter`](Emitting::emitter) is required.
pub trait Emitting<P: 'static, K: EventKey = String> {
    /// The embedded emitter.
    fn emitter(&self) -> &EventEmitter<P, K>;

    /// See [`EventEmitter::on`].
    fn on<F>(&self, key: impl Into<K>, f: F) -> ListenerId
    where
        F: Fn(&P) -> Result<(), ListenerError> + Send + Sync + 'static,
    {
        self.emitter().on(key, f)
    }

    /// See [`EventEmitter::once`].
    fn once<F>(&self, key: impl Into<K>, f: F) -> ListenerId
    where
        F: Fn(&P) -> Result<(), ListenerError> + Send + Sync + 'static,
    {
        self.emitter().once(key, f)
    }

    /// See [`EventEmitter::register`].
    fn register(
        &self,
        key: impl Into<K>,
        listener: impl Into<Listener<P>>,
        options: Options,
    ) -> ListenerId {
        self.emitter().register(key, listener, options)
    }

    /// See [`EventEmitter::register_once`].
    fn register_once(
        &self,
        key: impl Into<K>,
        listener: impl Into<Listener<P>>,
        options: Options,
    ) -> ListenerId {
        self.emitter().register_once(key, listener, options)
    }

    /// See [`EventEmitter::emit`].
    fn emit<Q>(&self, key: &Q, payload: &P) -> Result<(), EmitError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
        P: Clone + Send,
    {
        self.emitter().emit(key, payload)
    }

    /// See [`EventEmitter::remove_listener`].
    fn remove_listener<Q>(&self, key: &Q, id: ListenerId) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.emitter().remove_listener(key, id)
    }

    /// See [`EventEmitter::remove_all_listeners`].
    fn remove_all_listeners<Q>(&self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.emitter().remove_all_listeners(key)
    }

    /// See [`EventEmitter::listeners_count`].
    fn listeners_count<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.emitter().listeners_count(key)
    }

    /// See [`EventEmitter::event_keys`].
    fn event_keys(&self) -> Vec<K> {
        self.emitter().event_keys()
    }
}

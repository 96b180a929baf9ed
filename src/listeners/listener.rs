//! # Listener callable
//!
//! [`Listener`] wraps a callable `Fn(&P) -> Result<(), ListenerError>` behind an
//! `Arc`, so it can be stored in the registry, snapshotted on emission and
//! moved into a detached execution without borrowing from the caller.
//!
//! ## Forms
//! - [`Listener::new`]: receives the payload by reference.
//! - [`Listener::unit`]: ignores the payload (normalized to the payload form).
//! - Any matching closure converts with `Into<Listener<P>>`.
//!
//! ## Example
//! ```rust
//! use eventvisor::{Listener, ListenerError};
//!
//! let l: Listener<u32> = Listener::new(|n: &u32| {
//!     if *n == 0 {
//!         return Err(ListenerError::rejected("zero"));
//!     }
//!     Ok(())
//! });
//! assert!(l.call(&1).is_ok());
//! assert!(l.call(&0).is_err());
//!
//! let tick: Listener<u32> = Listener::unit(|| Ok(()));
//! assert!(tick.call(&7).is_ok());
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::ListenerError;

/// Boxed listener body shared by every clone of a [`Listener`].
pub type ListenerFn<P> = dyn Fn(&P) -> Result<(), ListenerError> + Send + Sync + 'static;

/// Owned, cheaply cloneable listener callable.
pub struct Listener<P> {
    f: Arc<ListenerFn<P>>,
}

impl<P: 'static> Listener<P> {
    /// Creates a listener that receives the payload.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&P) -> Result<(), ListenerError> + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    /// Creates a listener that ignores the payload.
    pub fn unit<F>(f: F) -> Self
    where
        F: Fn() -> Result<(), ListenerError> + Send + Sync + 'static,
    {
        Self::new(move |_: &P| f())
    }
}

impl<P> Listener<P> {
    /// Invokes the listener with `payload`.
    #[inline]
    pub fn call(&self, payload: &P) -> Result<(), ListenerError> {
        (self.f)(payload)
    }

    /// Returns `true` if both values share the same underlying callable.
    ///
    /// Clones of one listener compare equal; two registrations of the same
    /// closure value do not (each registration boxes its own copy).
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.f, &other.f)
    }
}

impl<P> Clone for Listener<P> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
        }
    }
}

impl<P> fmt::Debug for Listener<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener").finish_non_exhaustive()
    }
}

impl<P, F> From<F> for Listener<P>
where
    P: 'static,
    F: Fn(&P) -> Result<(), ListenerError> + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        Listener::new(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_unit_ignores_payload() {
        let hits = Arc::new(AtomicUsize::new(0));
        let h = Arc::clone(&hits);
        let l: Listener<String> = Listener::unit(move || {
            h.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        l.call(&"a".to_string()).unwrap();
        l.call(&"b".to_string()).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_clone_shares_callable() {
        let l: Listener<u8> = Listener::new(|_: &u8| Ok(()));
        let copy = l.clone();
        assert!(l.ptr_eq(&copy));

        let other: Listener<u8> = Listener::new(|_: &u8| Ok(()));
        assert!(!l.ptr_eq(&other));
    }

    #[test]
    fn test_from_closure() {
        let l: Listener<i32> = (|n: &i32| {
            if *n < 0 {
                Err(ListenerError::fail("negative"))
            } else {
                Ok(())
            }
        })
        .into();
        assert_eq!(l.call(&-1), Err(ListenerError::fail("negative")));
        assert_eq!(l.call(&1), Ok(()));
    }
}

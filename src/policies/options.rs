//! # Registration options.
//!
//! [`Options`] is a small flag set passed to
//! [`EventEmitter::register`](crate::EventEmitter::register):
//!
//! - [`Options::ASYNC`] run the listener on a detached execution instead of inline;
//! - [`Options::PREPEND`] insert at the front of the key's sequence instead of the back.
//!
//! ## Precedence
//! `ASYNC` takes precedence over `PREPEND`. When both are requested the record
//! is **appended** and dispatched asynchronously; `PREPEND` is ignored.
//! [`Options::resolve`] makes the outcome explicit:
//!
//! ```text
//! NONE              → (Append,  Sync)
//! PREPEND           → (Prepend, Sync)
//! ASYNC             → (Append,  Async)
//! ASYNC | PREPEND   → (Append,  Async)
//! ```
//!
//! ## Example
//! ```rust
//! use eventvisor::{Dispatch, Options, Placement};
//!
//! let opts = Options::ASYNC | Options::PREPEND;
//! assert_eq!(opts.resolve(), (Placement::Append, Dispatch::Async));
//! ```

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Where a new record goes in the key's sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Placement {
    /// After every existing record (registration order).
    #[default]
    Append,
    /// Before every existing record; runs first on the next emission.
    Prepend,
}

/// How a record is invoked on emission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Dispatch {
    /// Inline, on the emitting thread, before `emit` returns.
    #[default]
    Sync,
    /// On a detached execution; `emit` does not wait for it.
    Async,
}

/// Flag set controlling placement and dispatch of a registration.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Options(u8);

impl Options {
    /// Append, dispatch synchronously.
    pub const NONE: Options = Options(0);
    /// Dispatch on a detached execution. Overrides [`Options::PREPEND`].
    pub const ASYNC: Options = Options(1);
    /// Insert at index 0 of the key's sequence.
    pub const PREPEND: Options = Options(1 << 1);

    /// Returns `true` if every flag in `other` is also set in `self`.
    #[inline]
    pub const fn contains(self, other: Options) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if no flag is set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Resolves the flags into an explicit placement and dispatch mode,
    /// applying `ASYNC` over `PREPEND` precedence.
    pub const fn resolve(self) -> (Placement, Dispatch) {
        if self.contains(Options::ASYNC) {
            (Placement::Append, Dispatch::Async)
        } else if self.contains(Options::PREPEND) {
            (Placement::Prepend, Dispatch::Sync)
        } else {
            (Placement::Append, Dispatch::Sync)
        }
    }
}

impl BitOr for Options {
    type Output = Options;

    fn bitor(self, rhs: Options) -> Options {
        Options(self.0 | rhs.0)
    }
}

impl BitOrAssign for Options {
    fn bitor_assign(&mut self, rhs: Options) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::with_capacity(2);
        if self.contains(Options::ASYNC) {
            names.push("ASYNC");
        }
        if self.contains(Options::PREPEND) {
            names.push("PREPEND");
        }
        if names.is_empty() {
            f.write_str("Options(NONE)")
        } else {
            write!(f, "Options({})", names.join(" | "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_append_sync() {
        assert_eq!(Options::default(), Options::NONE);
        assert_eq!(Options::NONE.resolve(), (Placement::Append, Dispatch::Sync));
    }

    #[test]
    fn test_single_flags() {
        assert_eq!(
            Options::PREPEND.resolve(),
            (Placement::Prepend, Dispatch::Sync)
        );
        assert_eq!(Options::ASYNC.resolve(), (Placement::Append, Dispatch::Async));
    }

    #[test]
    fn test_async_overrides_prepend() {
        let mut opts = Options::PREPEND;
        opts |= Options::ASYNC;
        assert!(opts.contains(Options::PREPEND));
        assert!(opts.contains(Options::ASYNC));
        assert_eq!(opts.resolve(), (Placement::Append, Dispatch::Async));
    }

    #[test]
    fn test_debug_lists_flags() {
        assert_eq!(format!("{:?}", Options::NONE), "Options(NONE)");
        assert_eq!(
            format!("{:?}", Options::ASYNC | Options::PREPEND),
            "Options(ASYNC | PREPEND)"
        );
    }
}

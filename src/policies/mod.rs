//! Registration and dispatch policies.
//!
//! This module groups the knobs that control **where** a listener is placed,
//! **how** it is invoked and **what happens** when it fails.
//!
//! ## Contents
//! - [`Options`]       registration flags (`ASYNC`, `PREPEND`)
//! - [`Placement`]     append / prepend, resolved from [`Options`]
//! - [`Dispatch`]      sync / async, resolved from [`Options`]
//! - [`FailurePolicy`] abort or continue on a failing synchronous listener
//!
//! ## Quick wiring
//! ```text
//! register(key, listener, Options)
//!      └─► Options::resolve() → (Placement, Dispatch)
//!           - Placement picks push / insert(0)
//!           - Dispatch is stored on the ListenerRecord
//! emit(key, payload)
//!      └─► EmitterConfig::failure_policy decides abort vs continue
//! ```

mod failure;
mod options;

pub use failure::FailurePolicy;
pub use options::{Dispatch, Options, Placement};

//! Emitter core: registry state and dispatch.
//!
//! The only public types from this module are [`EventEmitter`],
//! [`EmitterConfig`], [`Spawner`] and the [`EventKey`] bound.
//!
//! Internal modules:
//! - [`registry`]: key → ordered listener records, snapshot reads;
//! - [`emitter`]: public API, locking discipline, sync dispatch and failure policy;
//! - [`dispatch`]: detached execution of async listeners with a failure boundary;
//! - [`once`]: self-removing wrapper for `register_once`;
//! - [`config`]: emitter settings.

mod config;
mod dispatch;
mod emitter;
mod once;
mod registry;

pub use config::{EmitterConfig, Spawner};
pub use emitter::EventEmitter;
pub use registry::EventKey;

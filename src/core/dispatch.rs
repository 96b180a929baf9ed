//! # Detached execution of asynchronous listeners.
//!
//! Each `Dispatch::Async` record is handed an owned clone of its listener and
//! of the payload, then scheduled on the configured [`Spawner`]. Nothing is
//! joined: `emit` continues as soon as the job is scheduled.
//!
//! ## Failure boundary
//! ```text
//! job ─► catch_unwind(listener.call(&payload))
//!          ├─ Ok(Ok)        ─► done
//!          ├─ Ok(Err(e))    ─► warn!  (caller never sees it)
//!          └─ Err(panic)    ─► error! (thread/pool survives)
//! ```

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::thread;

use tokio::runtime::Handle;
use tracing::{error, warn};

use crate::listeners::{Listener, ListenerId};

use super::config::{EmitterConfig, Spawner};

/// Owned unit of work for one asynchronous invocation.
pub(crate) struct AsyncJob<P> {
    pub(crate) key: String,
    pub(crate) id: ListenerId,
    pub(crate) listener: Listener<P>,
    pub(crate) payload: P,
}

impl<P> AsyncJob<P> {
    /// Runs the listener, absorbing errors and panics.
    fn run(self) {
        let AsyncJob {
            key,
            id,
            listener,
            payload,
        } = self;

        match panic::catch_unwind(AssertUnwindSafe(|| listener.call(&payload))) {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                warn!(
                    key = %key,
                    listener = %id,
                    label = err.as_label(),
                    error = %err,
                    "async listener failed"
                );
            }
            Err(panic_err) => {
                error!(
                    key = %key,
                    listener = %id,
                    panic = %panic_message(panic_err.as_ref()),
                    "async listener panicked"
                );
            }
        }
    }
}

/// Schedules `job` according to `config.spawner`.
pub(crate) fn spawn_detached<P: Send + 'static>(config: &EmitterConfig, job: AsyncJob<P>) {
    match &config.spawner {
        Spawner::Auto => match Handle::try_current() {
            Ok(handle) => spawn_on_runtime(&handle, job),
            Err(_) => spawn_on_thread(&config.thread_name, job),
        },
        Spawner::Tokio(handle) => spawn_on_runtime(handle, job),
        Spawner::Thread => spawn_on_thread(&config.thread_name, job),
    }
}

fn spawn_on_runtime<P: Send + 'static>(handle: &Handle, job: AsyncJob<P>) {
    // Detached: the JoinHandle is dropped, the job keeps running.
    let _ = handle.spawn_blocking(move || job.run());
}

fn spawn_on_thread<P: Send + 'static>(name: &str, job: AsyncJob<P>) {
    let key = job.key.clone();
    let id = job.id;
    if let Err(err) = thread::Builder::new()
        .name(name.to_string())
        .spawn(move || job.run())
    {
        error!(
            key = %key,
            listener = %id,
            error = %err,
            "failed to spawn thread for async listener; invocation skipped"
        );
    }
}

fn panic_message(panic_err: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_err.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic_err.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

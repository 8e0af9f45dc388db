use std::io;

use thiserror::Error;

/// Failures raised while executing a fork-join computation.
#[derive(Debug, Error)]
pub enum Error {

    /// A task panicked before producing its result.  The whole computation is
    /// abandoned since merging the remaining results would under-count.
    #[error("worker {worker} failed: {reason}")]
    WorkerFailure {
        /// Index of the chunk the worker was assigned
        worker: usize,

        /// Panic payload, when it was a string
        reason: String
    },

    /// The OS refused to start a worker thread
    #[error("cannot start worker {worker}: {source}")]
    Spawn {
        /// Index of the chunk the worker was assigned
        worker: usize,

        /// Underlying OS failure
        source: io::Error
    }
}

impl Error {
    pub(crate) fn from_panic(worker: usize, payload: Box<dyn std::any::Any + Send>) -> Self {
        let reason = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_owned()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic".to_owned()
        };
        Error::WorkerFailure { worker, reason }
    }
}

use std::panic::{self, catch_unwind, AssertUnwindSafe};
use std::thread;

use rayon::prelude::*;

use crate::error::Error;
use crate::partition::Chunk;

/// Runs one task per chunk and waits for all of them.
///
/// `compute` is a barrier: it returns only after every task has finished, and the
/// results come back in chunk order.  Tasks receive the chunk index and the chunk
/// and must not share mutable state; each returns its own private result.  If any
/// task panics the whole computation fails with `Error::WorkerFailure`.
pub trait Scheduler {
    /// Executes `task` over every chunk
    fn compute<T, F>(&self, chunks: &[Chunk], task: F) -> Result<Vec<T>, Error>
        where T: Send,
              F: Fn(usize, Chunk) -> T + Sync;
}

/// Spawns one OS thread per chunk.  Threads are scoped, so tasks may borrow from the
/// caller's stack.
#[derive(Debug,Clone,Copy,Default)]
pub struct ThreadScheduler;

impl Scheduler for ThreadScheduler {

    fn compute<T, F>(&self, chunks: &[Chunk], task: F) -> Result<Vec<T>, Error>
        where T: Send,
              F: Fn(usize, Chunk) -> T + Sync {

        debug!("Spawning {} worker threads", chunks.len());
        let out = run_scoped(chunks, &task, |idx| {
            thread::Builder::new().name(format!("{}{}", WORKER_PREFIX, idx))
        });
        debug!("Finished");
        out
    }
}

/// Name prefix of threads started by `ThreadScheduler`
pub const WORKER_PREFIX: &str = "sentimap-worker-";

// Spawns a scoped thread per chunk using `builder`.  If a spawn fails no further
// workers are started, the ones already running are joined, and the spawn error wins.
fn run_scoped<T, F, B>(chunks: &[Chunk], task: &F, builder: B) -> Result<Vec<T>, Error>
        where T: Send,
              F: Fn(usize, Chunk) -> T + Sync,
              B: Fn(usize) -> thread::Builder {
    thread::scope(|s| {
        let mut handles = Vec::with_capacity(chunks.len());
        let mut failure = None;
        for (idx, chunk) in chunks.iter().enumerate() {
            let chunk = *chunk;
            let spawned = builder(idx).spawn_scoped(s, move || {
                trace!("Worker {} processing {}", idx, chunk);
                let r = task(idx, chunk);
                trace!("Worker {} finished", idx);
                r
            });
            match spawned {
                Ok(h) => handles.push(h),
                Err(source) => {
                    let e = Error::Spawn { worker: idx, source };
                    error!("{}", e);
                    failure = Some(e);
                    break;
                }
            }
        }

        // Barrier: every started handle is joined before anything is returned
        let mut results = Vec::with_capacity(handles.len());
        for (idx, h) in handles.into_iter().enumerate() {
            match h.join() {
                Ok(r) => results.push(r),
                Err(payload) => {
                    let e = Error::from_panic(idx, payload);
                    error!("{}", e);
                    failure.get_or_insert(e);
                }
            }
        }
        match failure {
            Some(e) => Err(e),
            None    => Ok(results)
        }
    })
}

/// Replaces the panic hook so panics on worker threads are logged at debug level
/// instead of printed.  The scheduler already turns them into `WorkerFailure`, so the
/// caller reports them once.  Panics on any other named thread, `main` included, still
/// go to the previous hook.
pub fn quiet_worker_panics() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if is_worker_thread(thread::current().name()) {
            debug!("{}", info);
        } else {
            previous(info);
        }
    }));
}

// Rayon pool threads are unnamed; `ThreadScheduler` threads carry the prefix.
fn is_worker_thread(name: Option<&str>) -> bool {
    match name {
        Some(n) => n.starts_with(WORKER_PREFIX),
        None    => true
    }
}

/// Fork-join over the chunk list on rayon's global pool.  Chunks are queued as
/// independent jobs, so the number of OS threads is bounded by the pool size rather
/// than the chunk count.
#[derive(Debug,Clone,Copy,Default)]
pub struct LeveledScheduler;

impl Scheduler for LeveledScheduler {

    fn compute<T, F>(&self, chunks: &[Chunk], task: F) -> Result<Vec<T>, Error>
        where T: Send,
              F: Fn(usize, Chunk) -> T + Sync {

        debug!("Running {} chunks on {} pool threads", chunks.len(), rayon::current_num_threads());
        let results: Vec<Result<T, Error>> = chunks.par_iter().enumerate()
            .map(|(idx, chunk)| {
                trace!("Worker {} processing {}", idx, chunk);
                catch_unwind(AssertUnwindSafe(|| task(idx, *chunk)))
                    .map_err(|payload| Error::from_panic(idx, payload))
            })
            .collect();

        debug!("Finished");
        results.into_iter().collect()
    }
}

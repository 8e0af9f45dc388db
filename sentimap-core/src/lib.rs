//! sentimap-core
//!
//! `sentimap-core` provides the primitives for running fork-join computations over a
//! contiguous, indexable input.
//!
//! What is it?
//! ---
//!
//! A computation is split into three stages:
//!
//! 1. `partition` - cut an input of length L into exactly N contiguous chunks.
//! 2. `scheduler` - run one task per chunk in parallel, each producing a private result,
//!    and return only once every task has finished.
//! 3. `reduce` - fold the private results into a single value on the calling thread.
//!
//! Tasks never share mutable state, so no locks are needed until the barrier, and the
//! reduction after it is single threaded.
//!
//! Example - Sum of squares
//! ---
//! ```rust
//! use sentimap_core::partition::{chunk_ranges, Workers};
//! use sentimap_core::scheduler::{Scheduler, ThreadScheduler};
//! use sentimap_core::reduce::fold_all;
//!
//! let data: Vec<u64> = (1..=10).collect();
//! let chunks = chunk_ranges(data.len(), Workers::new(3));
//! let partials = ThreadScheduler
//!     .compute(&chunks, |_idx, chunk| data[chunk.range()].iter().map(|x| x * x).sum::<u64>())
//!     .unwrap();
//! let total = fold_all(partials, 0u64, |acc, x| *acc += x);
//! assert_eq!(total, 385);
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

/// Contains the Chunk and Workers primitives and the chunking policy
pub mod partition;

/// Contains Scheduler trait definition and implementations
pub mod scheduler;

/// Single threaded reduction helpers for merging per-task results
pub mod reduce;

mod error;

pub use error::Error;

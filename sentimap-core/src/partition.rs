use std::fmt;
use std::ops::Range;
use std::thread::available_parallelism;

/// Half-open range `[start, end)` of input indices assigned to one worker.
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash)]
pub struct Chunk {
    /// First index, inclusive
    pub start: usize,

    /// Last index, exclusive
    pub end: usize
}

impl Chunk {

    /// Creates a new chunk.  `end` is clamped to be no smaller than `start`.
    pub fn new(start: usize, end: usize) -> Self {
        Chunk { start, end: end.max(start) }
    }

    /// Number of indices covered
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True when the chunk covers nothing.  Happens whenever there are more workers
    /// than items.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Converts to a `Range` for slicing
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Degree of parallelism.  Always at least one.
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct Workers(usize);

impl Workers {

    /// Creates a worker count, forcing 0 up to 1.
    pub fn new(n: usize) -> Self {
        Workers(n.max(1))
    }

    /// Number of hardware execution units reported by the OS, or 1 if it can't tell.
    pub fn available() -> Self {
        let n = available_parallelism().map(|n| n.get()).unwrap_or_else(|e| {
            warn!("Unable to query available parallelism, using 1 worker: {}", e);
            1
        });
        Workers::new(n)
    }

    /// Returns the worker count
    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for Workers {
    fn default() -> Self {
        Workers::available()
    }
}

impl From<usize> for Workers {
    fn from(n: usize) -> Self {
        Workers::new(n)
    }
}

/// Splits `len` items into exactly `workers` contiguous chunks.
///
/// The first N-1 chunks each receive `len / N` items; the last chunk absorbs the
/// remainder.  When `len < N` the leading chunks are empty and the last one holds
/// everything.
/// ```rust
///   use sentimap_core::partition::{chunk_ranges, Chunk, Workers};
///
///   let chunks = chunk_ranges(10, Workers::new(3));
///   assert_eq!(chunks, vec![Chunk::new(0, 3), Chunk::new(3, 6), Chunk::new(6, 10)]);
/// ```
pub fn chunk_ranges(len: usize, workers: Workers) -> Vec<Chunk> {
    let n = workers.get();
    let base = len / n;
    let mut chunks = Vec::with_capacity(n);
    for i in 0..n {
        let start = i * base;
        let end = if i == n - 1 { len } else { start + base };
        chunks.push(Chunk::new(start, end));
    }

    if log_enabled!(log::Level::Debug) {
        let empty = chunks.iter().filter(|c| c.is_empty()).count();
        debug!("Split {} items into {} chunks of base size {} ({} empty)", len, n, base, empty);
    }
    chunks
}

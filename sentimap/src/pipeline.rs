use clap::ValueEnum;
use sentimap_core::partition::{chunk_ranges, Chunk, Workers};
use sentimap_core::scheduler::{LeveledScheduler, Scheduler, ThreadScheduler};

use crate::aggregate;
use crate::classifier::Classifier;
use crate::error::{Error, Result};
use crate::tally::{GlobalTally, Tally};
use crate::vocabulary::Vocabulary;

/// Which scheduler runs the map phase
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default,ValueEnum)]
pub enum SchedulerKind {
    /// One OS thread per chunk
    #[default]
    Threads,

    /// Chunks as jobs on rayon's thread pool
    Rayon
}

/// A configured map/reduce sentiment analysis.
///
/// The corpus is cut into one contiguous chunk per worker, every chunk is classified
/// in parallel into its own `Tally`, and the tallies are merged once all workers have
/// finished.
/// ```rust
///   use sentimap::pipeline::Analysis;
///   use sentimap::tally::SentimentLabel;
///   use sentimap::vocabulary::Vocabulary;
///
///   let vocab = Vocabulary::default();
///   let corpus = vec!["This is great and wonderful", "This is bad and terrible", "Okay fine"];
///   let result = Analysis::new(&vocab).with_workers(2).run(&corpus).unwrap();
///   assert_eq!(result.count(SentimentLabel::Positive), 1);
///   assert_eq!(result.count(SentimentLabel::Negative), 1);
///   assert_eq!(result.count(SentimentLabel::Neutral), 1);
///   assert_eq!(result.keyword("terrible"), 1);
/// ```
#[derive(Debug,Clone)]
pub struct Analysis<'a> {
    vocab: &'a Vocabulary,
    workers: Workers,
    scheduler: SchedulerKind
}

impl <'a> Analysis<'a> {

    /// Creates an analysis using every available hardware thread
    pub fn new(vocab: &'a Vocabulary) -> Self {
        Analysis {
            vocab,
            workers: Workers::available(),
            scheduler: SchedulerKind::default()
        }
    }

    /// Sets the number of chunks, and so workers.  Zero is treated as one.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Workers::new(workers);
        self
    }

    /// Sets the scheduler used for the map phase
    pub fn with_scheduler(mut self, scheduler: SchedulerKind) -> Self {
        self.scheduler = scheduler;
        self
    }

    /// Number of workers that will be used
    pub fn workers(&self) -> Workers {
        self.workers
    }

    /// Classifies every review in `corpus` and returns the merged tallies.
    ///
    /// An empty corpus is an error: there is nothing to report.
    pub fn run<S: AsRef<str> + Sync>(&self, corpus: &[S]) -> Result<GlobalTally> {
        if corpus.is_empty() {
            return Err(Error::EmptyCorpus { path: None });
        }

        let chunks = chunk_ranges(corpus.len(), self.workers);
        info!("Analyzing {} reviews with {} workers ({:?})",
              corpus.len(), chunks.len(), self.scheduler);

        let classifier = Classifier::new(self.vocab);
        let task = |_idx: usize, chunk: Chunk| -> Tally {
            classifier.classify_lines(&corpus[chunk.range()])
        };

        let parts = match self.scheduler {
            SchedulerKind::Threads => ThreadScheduler.compute(&chunks, task)?,
            SchedulerKind::Rayon   => LeveledScheduler.compute(&chunks, task)?
        };

        Ok(aggregate::reduce(parts))
    }
}

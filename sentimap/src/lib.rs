//! Sentimap
//! ---
//! Sentimap labels every line of a corpus, such as a file of product reviews, as
//! Positive, Negative or Neutral by counting matches against two fixed keyword lists,
//! and counts how often each keyword matched across the whole corpus.
//!
//! How does it work?
//! ---
//! The corpus is cut into one contiguous chunk per worker.  Each worker classifies its
//! chunk into a private `Tally`, so the map phase shares no mutable state.  Once every
//! worker has finished the tallies are summed on the calling thread into a
//! `GlobalTally`.
//!
//! Example - Three reviews
//! ---
//!
//! ```rust
//! use sentimap::pipeline::Analysis;
//! use sentimap::report::render_text;
//! use sentimap::vocabulary::Vocabulary;
//!
//! let vocab = Vocabulary::default();
//! let reviews = vec!["great stuff", "awful, just bad", "it arrived"];
//! let tally = Analysis::new(&vocab).run(&reviews).unwrap();
//!
//! assert_eq!(tally.total_reviews(), 3);
//! assert_eq!(tally.keyword("bad"), 1);
//! assert!(render_text(&tally).starts_with("=== Analysis Result ===\nPositive: 1 reviews\n"));
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

/// Built-in and custom keyword lists
pub mod vocabulary;

/// Sentiment labels and count tables
pub mod tally;

/// Per-line classification
pub mod classifier;

/// Merging of per-worker tallies
pub mod aggregate;

/// Parallel analysis over a corpus
pub mod pipeline;

/// Reading corpora from disk
pub mod corpus;

/// Text and JSON output
pub mod report;

/// Command line configuration
pub mod config;

mod error;

pub use error::{Error, Result};

use config::Config;
use vocabulary::Vocabulary;

/// Runs a complete analysis as configured and returns the rendered report.
///
/// Nothing is rendered unless every step succeeds.
pub fn run(config: &Config) -> Result<String> {
    let vocab = Vocabulary::load(config.positive.as_deref(), config.negative.as_deref())?;
    let reviews = corpus::read_reviews(&config.corpus)?;

    let tally = pipeline::Analysis::new(&vocab)
        .with_workers(config.workers().get())
        .with_scheduler(config.scheduler)
        .run(&reviews)?;

    Ok(report::render(&tally, config.format)?)
}

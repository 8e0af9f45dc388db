use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop an analysis run.  All of them are fatal: a run either
/// produces a complete tally or nothing.
#[derive(Debug, Error)]
pub enum Error {

    /// The corpus could not be opened or read
    #[error("cannot read corpus {}: {source}", .path.display())]
    SourceUnavailable {
        /// Location that was requested
        path: PathBuf,
        /// Underlying I/O failure
        source: io::Error
    },

    /// The corpus was readable but held no non-empty lines
    #[error("corpus {} contains no reviews", describe(.path))]
    EmptyCorpus {
        /// Location of the corpus, when it came from a file
        path: Option<PathBuf>
    },

    /// A classification worker failed
    #[error(transparent)]
    WorkerFailure(#[from] sentimap_core::Error),

    /// The finished tally could not be rendered
    #[error("cannot render report: {0}")]
    Render(#[from] serde_json::Error),

    /// A word list could not be read
    #[error("cannot read word list {}: {source}", .path.display())]
    Vocabulary {
        /// Location of the word list
        path: PathBuf,
        /// Underlying I/O failure
        source: io::Error
    },

    /// The same word appears in both the positive and negative lists
    #[error("word {word:?} appears in both the positive and negative vocabulary")]
    OverlappingVocabulary {
        /// Offending word, lowercased
        word: String
    }
}

fn describe(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => p.display().to_string(),
        None    => "<memory>".to_owned()
    }
}

/// Shorthand for results in this crate
pub type Result<T> = std::result::Result<T, Error>;

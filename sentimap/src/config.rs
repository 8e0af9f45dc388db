use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;
use sentimap_core::partition::Workers;

use crate::pipeline::SchedulerKind;
use crate::report::Format;

/// Classify reviews as Positive, Negative or Neutral by keyword counts, in parallel,
/// and report how often each keyword matched.
#[derive(Debug,Clone,Parser)]
#[command(name = "sentimap", version, about)]
pub struct Config {
    /// Corpus file, one review per line
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Number of workers (defaults to the available hardware parallelism, minimum 1)
    #[arg(short, long, env = "SENTIMAP_WORKERS")]
    pub workers: Option<usize>,

    /// Scheduler for the map phase
    #[arg(long, value_enum, default_value_t)]
    pub scheduler: SchedulerKind,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: Format,

    /// Newline delimited positive word list, replacing the built-in one
    #[arg(long, value_name = "FILE")]
    pub positive: Option<PathBuf>,

    /// Newline delimited negative word list, replacing the built-in one
    #[arg(long, value_name = "FILE")]
    pub negative: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8
}

impl Config {

    /// Resolved worker count
    pub fn workers(&self) -> Workers {
        match self.workers {
            Some(n) => Workers::new(n),
            None    => Workers::available()
        }
    }

    /// Log level implied by the verbosity flag.  `RUST_LOG` still takes precedence.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace
        }
    }
}

#[cfg(test)]
mod test_config {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = Config::try_parse_from(["sentimap", "reviews.txt"]).unwrap();
        assert_eq!(c.corpus, PathBuf::from("reviews.txt"));
        assert_eq!(c.scheduler, SchedulerKind::Threads);
        assert_eq!(c.format, Format::Text);
        assert_eq!(c.log_level(), LevelFilter::Warn);
        assert!(c.workers().get() >= 1);
    }

    #[test]
    fn test_flags() {
        let c = Config::try_parse_from([
            "sentimap", "-w", "0", "--scheduler", "rayon", "-f", "json", "-vv",
            "--positive", "pos.txt", "reviews.txt"
        ]).unwrap();
        assert_eq!(c.workers().get(), 1);
        assert_eq!(c.scheduler, SchedulerKind::Rayon);
        assert_eq!(c.format, Format::Json);
        assert_eq!(c.log_level(), LevelFilter::Debug);
        assert_eq!(c.positive, Some(PathBuf::from("pos.txt")));
        assert_eq!(c.negative, None);
    }

    #[test]
    fn test_corpus_required() {
        assert!(Config::try_parse_from(["sentimap"]).is_err());
    }
}

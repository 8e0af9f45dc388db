//! Fixed keyword lists used to classify reviews.
//!
//! A `Vocabulary` holds two disjoint sets of lowercase words.  It is built once,
//! before any work starts, and only read afterwards, so workers share it by reference
//! without synchronization.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Built-in positive keywords
pub const POSITIVE_WORDS: &[&str] = &["good", "excellent", "great", "fantastic", "love"];

/// Built-in negative keywords
pub const NEGATIVE_WORDS: &[&str] = &["bad", "terrible", "horrible", "disastrous", "awful"];

/// Which list a keyword belongs to
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash)]
pub enum Polarity {
    /// Listed in the positive words
    Positive,

    /// Listed in the negative words
    Negative
}

/// Two disjoint sets of lowercase keywords.
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct Vocabulary {
    positive: HashSet<String>,
    negative: HashSet<String>
}

impl Vocabulary {

    /// Creates a vocabulary from two word lists.  Entries are trimmed and ASCII
    /// lowercased; blank entries are skipped.  Fails if any word is in both lists.
    /// ```rust
    ///   use sentimap::vocabulary::{Polarity, Vocabulary};
    ///
    ///   let vocab = Vocabulary::new(&["Nice"], &["meh"]).unwrap();
    ///   assert_eq!(vocab.polarity("nice"), Some(Polarity::Positive));
    ///   assert!(Vocabulary::new(&["ok"], &["OK"]).is_err());
    /// ```
    pub fn new<P, N>(positive: P, negative: N) -> Result<Self>
            where P: IntoIterator,
                  P::Item: AsRef<str>,
                  N: IntoIterator,
                  N::Item: AsRef<str> {
        let positive = normalize(positive);
        let negative = normalize(negative);

        let mut overlap: Vec<_> = positive.intersection(&negative).collect();
        overlap.sort();
        if let Some(word) = overlap.first() {
            return Err(Error::OverlappingVocabulary { word: (*word).clone() });
        }

        debug!("Vocabulary: {} positive, {} negative", positive.len(), negative.len());
        Ok(Vocabulary { positive, negative })
    }

    /// Builds a vocabulary, reading either list from a file when a path is given and
    /// falling back to the built-in list otherwise.
    pub fn load(positive: Option<&Path>, negative: Option<&Path>) -> Result<Self> {
        let pos = match positive {
            Some(p) => read_word_list(p)?,
            None    => POSITIVE_WORDS.iter().map(|w| w.to_string()).collect()
        };
        let neg = match negative {
            Some(p) => read_word_list(p)?,
            None    => NEGATIVE_WORDS.iter().map(|w| w.to_string()).collect()
        };
        Vocabulary::new(pos, neg)
    }

    /// Looks up a normalized token.  Returns `None` for words in neither list.
    pub fn polarity(&self, token: &str) -> Option<Polarity> {
        if self.positive.contains(token) {
            Some(Polarity::Positive)
        } else if self.negative.contains(token) {
            Some(Polarity::Negative)
        } else {
            None
        }
    }

    /// Positive keywords
    pub fn positive(&self) -> &HashSet<String> {
        &self.positive
    }

    /// Negative keywords
    pub fn negative(&self) -> &HashSet<String> {
        &self.negative
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Vocabulary {
            positive: POSITIVE_WORDS.iter().map(|w| w.to_string()).collect(),
            negative: NEGATIVE_WORDS.iter().map(|w| w.to_string()).collect()
        }
    }
}

fn normalize<I>(words: I) -> HashSet<String>
        where I: IntoIterator,
              I::Item: AsRef<str> {
    words.into_iter()
        .map(|w| w.as_ref().trim().to_ascii_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Reads a newline delimited word list.  Blank lines and lines starting with `#` are
/// ignored.
pub fn read_word_list(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path).map_err(|source| Error::Vocabulary {
        path: path.to_owned(),
        source
    })?;

    let words: Vec<String> = contents.lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(|l| l.to_owned())
        .collect();
    info!("Read {} words from {}", words.len(), path.display());
    Ok(words)
}

#[cfg(test)]
mod test_vocabulary {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_lists_are_disjoint() {
        let vocab = Vocabulary::default();
        assert!(vocab.positive().is_disjoint(vocab.negative()));
        assert_eq!(Vocabulary::new(POSITIVE_WORDS, NEGATIVE_WORDS).unwrap(), vocab);
    }

    #[test]
    fn test_polarity() {
        let vocab = Vocabulary::default();
        assert_eq!(vocab.polarity("great"), Some(Polarity::Positive));
        assert_eq!(vocab.polarity("awful"), Some(Polarity::Negative));
        assert_eq!(vocab.polarity("wonderful"), None);
        // Lookups expect already-normalized tokens
        assert_eq!(vocab.polarity("Great"), None);
    }

    #[test]
    fn test_new_normalizes() {
        let vocab = Vocabulary::new(vec![" Superb ", ""], vec!["DREADFUL"]).unwrap();
        assert_eq!(vocab.positive().len(), 1);
        assert_eq!(vocab.polarity("superb"), Some(Polarity::Positive));
        assert_eq!(vocab.polarity("dreadful"), Some(Polarity::Negative));
    }

    #[test]
    fn test_overlap_rejected() {
        match Vocabulary::new(&["fine", "good"], &["Fine"]) {
            Err(Error::OverlappingVocabulary { word }) => assert_eq!(word, "fine"),
            other => panic!("expected overlap error, got {:?}", other)
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "# positive words").unwrap();
        writeln!(f, "splendid").unwrap();
        writeln!(f).unwrap();
        writeln!(f, "Brilliant").unwrap();

        let vocab = Vocabulary::load(Some(f.path()), None).unwrap();
        assert_eq!(vocab.positive().len(), 2);
        assert_eq!(vocab.polarity("brilliant"), Some(Polarity::Positive));
        assert_eq!(vocab.polarity("good"), None);
        assert_eq!(vocab.polarity("bad"), Some(Polarity::Negative));
    }

    #[test]
    fn test_load_missing_file() {
        let missing = Path::new("/nonexistent/sentimap/words.txt");
        match Vocabulary::load(None, Some(missing)) {
            Err(Error::Vocabulary { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected vocabulary error, got {:?}", other)
        }
    }
}

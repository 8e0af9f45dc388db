use crate::tally::{SentimentLabel, Tally};
use crate::vocabulary::{Polarity, Vocabulary};

/// Labels reviews by counting keyword matches.
///
/// A line is split on whitespace and every token is ASCII lowercased before lookup.
/// Punctuation is not stripped, so `"good."` does not match `"good"`.  The line is
/// Positive if it has strictly more positive than negative matches, Negative for the
/// reverse, and Neutral otherwise.
/// ```rust
///   use sentimap::classifier::Classifier;
///   use sentimap::tally::{SentimentLabel, Tally};
///   use sentimap::vocabulary::Vocabulary;
///
///   let vocab = Vocabulary::default();
///   let classifier = Classifier::new(&vocab);
///   let mut tally = Tally::new();
///   assert_eq!(classifier.classify_line("Great value, LOVE it", &mut tally), SentimentLabel::Positive);
///   assert_eq!(tally.keywords()["love"], 1);
/// ```
#[derive(Debug,Clone,Copy)]
pub struct Classifier<'a> {
    vocab: &'a Vocabulary
}

impl <'a> Classifier<'a> {

    /// Creates a classifier over the given vocabulary
    pub fn new(vocab: &'a Vocabulary) -> Self {
        Classifier { vocab }
    }

    /// Classifies one review, recording its label and every matched keyword into
    /// `tally`.  Returns the label.
    pub fn classify_line(&self, line: &str, tally: &mut Tally) -> SentimentLabel {
        let mut positive = 0usize;
        let mut negative = 0usize;
        for token in line.split_whitespace() {
            let word = token.to_ascii_lowercase();
            match self.vocab.polarity(&word) {
                Some(Polarity::Positive) => {
                    positive += 1;
                    tally.record_keyword(&word);
                },
                Some(Polarity::Negative) => {
                    negative += 1;
                    tally.record_keyword(&word);
                },
                None => ()
            }
        }

        let label = SentimentLabel::from_counts(positive, negative);
        tally.record_label(label);
        label
    }

    /// Classifies a run of reviews into a fresh tally
    pub fn classify_lines<S: AsRef<str>>(&self, lines: &[S]) -> Tally {
        let mut tally = Tally::new();
        for line in lines {
            self.classify_line(line.as_ref(), &mut tally);
        }
        tally
    }
}

#[cfg(test)]
mod test_classifier {
    use super::*;
    use crate::tally::GlobalTally;

    fn classify(line: &str) -> (SentimentLabel, Tally) {
        let vocab = Vocabulary::default();
        let mut tally = Tally::new();
        let label = Classifier::new(&vocab).classify_line(line, &mut tally);
        (label, tally)
    }

    #[test]
    fn test_positive() {
        let (label, tally) = classify("This is great and wonderful");
        assert_eq!(label, SentimentLabel::Positive);
        assert_eq!(tally.keywords().len(), 1);
        assert_eq!(tally.keywords()["great"], 1);
    }

    #[test]
    fn test_negative() {
        let (label, tally) = classify("This is bad and terrible");
        assert_eq!(label, SentimentLabel::Negative);
        assert_eq!(tally.keywords()["bad"], 1);
        assert_eq!(tally.keywords()["terrible"], 1);
    }

    #[test]
    fn test_tie_is_neutral() {
        let (label, tally) = classify("good bad good bad");
        assert_eq!(label, SentimentLabel::Neutral);
        assert_eq!(tally.keywords()["good"], 2);
        assert_eq!(tally.keywords()["bad"], 2);
    }

    #[test]
    fn test_no_keywords_is_neutral() {
        let (label, tally) = classify("Okay fine");
        assert_eq!(label, SentimentLabel::Neutral);
        assert!(tally.keywords().is_empty());
    }

    #[test]
    fn test_blank_line() {
        let (label, tally) = classify("   \t ");
        assert_eq!(label, SentimentLabel::Neutral);
        assert!(tally.keywords().is_empty());
        assert_eq!(tally.total_reviews(), 1);
    }

    #[test]
    fn test_case_folding() {
        let (label, tally) = classify("EXCELLENT Fantastic");
        assert_eq!(label, SentimentLabel::Positive);
        assert_eq!(tally.keywords()["excellent"], 1);
        assert_eq!(tally.keywords()["fantastic"], 1);
    }

    #[test]
    fn test_punctuation_not_stripped() {
        let (label, tally) = classify("good. bad!");
        assert_eq!(label, SentimentLabel::Neutral);
        assert!(tally.keywords().is_empty());
    }

    #[test]
    fn test_custom_vocabulary() {
        let vocab = Vocabulary::new(&["stellar"], &["meh"]).unwrap();
        let tally = Classifier::new(&vocab)
            .classify_lines(&["meh meh stellar", "good good"]);
        let g = GlobalTally::from(tally);
        assert_eq!(g.count(SentimentLabel::Negative), 1);
        assert_eq!(g.count(SentimentLabel::Neutral), 1);
        assert_eq!(g.keyword("meh"), 2);
        assert_eq!(g.keyword("good"), 0);
    }

    #[test]
    fn test_classify_empty_slice() {
        let vocab = Vocabulary::default();
        let lines: Vec<String> = Vec::new();
        assert!(Classifier::new(&vocab).classify_lines(&lines).is_empty());
    }
}

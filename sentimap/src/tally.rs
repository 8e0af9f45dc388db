use std::collections::HashMap;
use std::fmt;

use sentimap_core::reduce::merge_counts;

/// Classification of a single review
#[derive(Debug,Clone,Copy,PartialEq,Eq,PartialOrd,Ord,Hash,Serialize)]
pub enum SentimentLabel {
    /// More positive than negative keywords
    Positive,

    /// More negative than positive keywords
    Negative,

    /// As many positive as negative keywords, including none at all
    Neutral
}

impl SentimentLabel {
    /// All labels, in reporting order
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral
    ];

    /// Decides a label from keyword counts
    pub fn from_counts(positive: usize, negative: usize) -> Self {
        if positive > negative {
            SentimentLabel::Positive
        } else if negative > positive {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Display name
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral  => "Neutral"
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sentiment and keyword counts over some set of reviews.
///
/// Each worker owns one `Tally` for the lines it processes; nothing else touches it
/// until the scheduler barrier, after which it is merged and dropped.
#[derive(Debug,Clone,Default,PartialEq,Eq)]
pub struct Tally {
    sentiment: HashMap<SentimentLabel, usize>,
    keywords: HashMap<String, usize>
}

impl Tally {

    /// Creates an empty tally
    pub fn new() -> Self {
        Tally::default()
    }

    /// Counts one review with the given label
    pub fn record_label(&mut self, label: SentimentLabel) {
        *self.sentiment.entry(label).or_insert(0) += 1;
    }

    /// Counts one occurrence of a keyword
    pub fn record_keyword(&mut self, keyword: &str) {
        if let Some(c) = self.keywords.get_mut(keyword) {
            *c += 1;
        } else {
            self.keywords.insert(keyword.to_owned(), 1);
        }
    }

    /// Adds another tally's counts into this one
    pub fn merge(&mut self, other: Tally) {
        merge_counts(&mut self.sentiment, other.sentiment);
        merge_counts(&mut self.keywords, other.keywords);
    }

    /// Reviews per label.  Labels never seen are absent.
    pub fn sentiment(&self) -> &HashMap<SentimentLabel, usize> {
        &self.sentiment
    }

    /// Occurrences per matched keyword
    pub fn keywords(&self) -> &HashMap<String, usize> {
        &self.keywords
    }

    /// Number of reviews counted, summed over all labels
    pub fn total_reviews(&self) -> usize {
        self.sentiment.values().sum()
    }

    /// True if no review has been counted
    pub fn is_empty(&self) -> bool {
        self.sentiment.is_empty() && self.keywords.is_empty()
    }
}

/// Fully merged result of an analysis run.  Read only.
#[derive(Debug,Clone,Default,PartialEq,Eq)]
pub struct GlobalTally(Tally);

impl GlobalTally {

    /// Reviews per label.  Labels never seen are absent.
    pub fn sentiment(&self) -> &HashMap<SentimentLabel, usize> {
        self.0.sentiment()
    }

    /// Occurrences per matched keyword
    pub fn keywords(&self) -> &HashMap<String, usize> {
        self.0.keywords()
    }

    /// Reviews with the given label, zero if none
    pub fn count(&self, label: SentimentLabel) -> usize {
        self.0.sentiment.get(&label).cloned().unwrap_or(0)
    }

    /// Occurrences of a keyword, zero if it never matched
    pub fn keyword(&self, word: &str) -> usize {
        self.0.keywords.get(word).cloned().unwrap_or(0)
    }

    /// Number of reviews classified
    pub fn total_reviews(&self) -> usize {
        self.0.total_reviews()
    }
}

impl From<Tally> for GlobalTally {
    fn from(t: Tally) -> Self {
        GlobalTally(t)
    }
}

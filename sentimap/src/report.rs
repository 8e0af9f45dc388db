//! Rendering of a finished analysis.
//!
//! Both renderers order their output so the same tally always prints the same way:
//! labels as Positive, Negative, Neutral and keywords by descending count, ties broken
//! alphabetically.

use std::collections::BTreeMap;

use clap::ValueEnum;

use crate::tally::{GlobalTally, SentimentLabel};

/// Output formats understood by `render`
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default,ValueEnum)]
pub enum Format {
    /// Human readable sections
    #[default]
    Text,

    /// A single JSON object
    Json
}

#[derive(Serialize)]
struct JsonReport<'a> {
    reviews: usize,
    sentiment: BTreeMap<SentimentLabel, usize>,
    keywords: BTreeMap<&'a str, usize>
}

/// Labels present in the tally, in reporting order
pub fn labels(tally: &GlobalTally) -> Vec<(SentimentLabel, usize)> {
    SentimentLabel::ALL.iter()
        .filter_map(|l| tally.sentiment().get(l).map(|c| (*l, *c)))
        .collect()
}

/// Matched keywords, most frequent first
pub fn keywords(tally: &GlobalTally) -> Vec<(&str, usize)> {
    let mut kws: Vec<_> = tally.keywords().iter()
        .map(|(k, c)| (k.as_str(), *c))
        .collect();
    kws.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    kws
}

/// Renders the two report sections:
///
/// ```text
/// === Analysis Result ===
/// Positive: 1 reviews
///
/// === Word Count ===
/// great: 1
/// ```
pub fn render_text(tally: &GlobalTally) -> String {
    let mut out = String::new();
    out.push_str("=== Analysis Result ===\n");
    for (label, count) in labels(tally) {
        out.push_str(&format!("{}: {} reviews\n", label, count));
    }

    out.push_str("\n=== Word Count ===\n");
    for (word, count) in keywords(tally) {
        out.push_str(&format!("{}: {}\n", word, count));
    }
    out
}

/// Renders the tally as a JSON object with `reviews`, `sentiment` and `keywords`
/// fields.
pub fn render_json(tally: &GlobalTally) -> serde_json::Result<String> {
    let report = JsonReport {
        reviews: tally.total_reviews(),
        sentiment: tally.sentiment().iter().map(|(l, c)| (*l, *c)).collect(),
        keywords: tally.keywords().iter().map(|(k, c)| (k.as_str(), *c)).collect()
    };
    serde_json::to_string_pretty(&report)
}

/// Renders in the requested format
pub fn render(tally: &GlobalTally, format: Format) -> serde_json::Result<String> {
    match format {
        Format::Text => Ok(render_text(tally)),
        Format::Json => render_json(tally)
    }
}

#[cfg(test)]
mod test_report {
    use super::*;
    use crate::pipeline::Analysis;
    use crate::vocabulary::Vocabulary;

    fn tally(lines: &[&str]) -> GlobalTally {
        let vocab = Vocabulary::default();
        Analysis::new(&vocab).with_workers(2).run(lines).unwrap()
    }

    #[test]
    fn test_text_sections() {
        let t = tally(&["This is great and wonderful", "This is bad and terrible", "Okay fine"]);
        let expected = "=== Analysis Result ===\n\
                        Positive: 1 reviews\n\
                        Negative: 1 reviews\n\
                        Neutral: 1 reviews\n\
                        \n\
                        === Word Count ===\n\
                        bad: 1\n\
                        great: 1\n\
                        terrible: 1\n";
        assert_eq!(render_text(&t), expected);
    }

    #[test]
    fn test_text_only_present_labels() {
        let t = tally(&["good", "great good"]);
        let text = render_text(&t);
        assert!(text.contains("Positive: 2 reviews"));
        assert!(!text.contains("Negative"));
        assert!(!text.contains("Neutral"));
        assert!(text.ends_with("=== Word Count ===\ngood: 2\ngreat: 1\n"));
    }

    #[test]
    fn test_json() {
        let t = tally(&["good bad good bad"]);
        let json: serde_json::Value = serde_json::from_str(&render_json(&t).unwrap()).unwrap();
        assert_eq!(json["reviews"], 1);
        assert_eq!(json["sentiment"]["Neutral"], 1);
        assert_eq!(json["keywords"]["good"], 2);
        assert_eq!(json["keywords"]["bad"], 2);
    }

    #[test]
    fn test_keyword_order() {
        let t = tally(&["awful bad bad", "love"]);
        assert_eq!(keywords(&t), vec![("bad", 2), ("awful", 1), ("love", 1)]);
    }
}

use std::borrow::Cow;
use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

use crate::error::{Error, Result};

/// Reads a corpus file, one review per line.
///
/// Zero-length lines are dropped.  A trailing `\r` is removed from each line, but a
/// line holding only `\r` still counts as a review.  Bytes that are not valid UTF-8
/// are replaced with U+FFFD rather than failing the run, so matching
/// is unaffected for ASCII keywords.  Failing to open or read the file yields `Error::SourceUnavailable`;
/// an otherwise readable file with no reviews yields `Error::EmptyCorpus`.
pub fn read_reviews<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let unavailable = |source: io::Error| Error::SourceUnavailable { path: path.to_owned(), source };

    let f = File::open(path).map_err(unavailable)?;
    let reader = BufReader::new(f);

    let mut reviews = Vec::new();
    let mut skipped = 0usize;
    let mut lossy = 0usize;
    for raw in reader.split(b'\n') {
        let raw = raw.map_err(unavailable)?;
        if raw.is_empty() {
            skipped += 1;
            continue;
        }

        let bytes = raw.strip_suffix(b"\r").unwrap_or(&raw[..]);
        let line = String::from_utf8_lossy(bytes);
        if let Cow::Owned(_) = line {
            lossy += 1;
        }
        reviews.push(line.into_owned());
    }

    info!("Read {} reviews from {}", reviews.len(), path.display());
    debug!("Skipped {} empty lines", skipped);
    if lossy > 0 {
        warn!("{} lines in {} were not valid UTF-8 and were decoded lossily", lossy, path.display());
    }

    if reviews.is_empty() {
        return Err(Error::EmptyCorpus { path: Some(path.to_owned()) });
    }
    Ok(reviews)
}

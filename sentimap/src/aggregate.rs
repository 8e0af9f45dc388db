use sentimap_core::reduce::fold_all;

use crate::tally::{GlobalTally, Tally};

/// Merges per-worker tallies into the global result.
///
/// Must only be called once every worker has finished; it runs on the calling thread
/// and takes ownership of the partial tallies, which are dropped as they are merged.
/// Order does not matter.
pub fn reduce<I: IntoIterator<Item=Tally>>(parts: I) -> GlobalTally {
    let total = fold_all(parts, Tally::new(), |acc, part| acc.merge(part));
    debug!("Merged tally: {} reviews, {} distinct keywords",
           total.total_reviews(), total.keywords().len());
    GlobalTally::from(total)
}

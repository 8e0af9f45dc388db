use std::collections::HashMap;
use std::hash::Hash;
use std::ops::AddAssign;

/// Adds every count in `from` into `into`, treating missing keys as zero.
///
/// The merge is commutative and associative, so any order of merging a set of maps
/// yields the same contents.
/// ```rust
///   use std::collections::HashMap;
///   use sentimap_core::reduce::merge_counts;
///
///   let mut left: HashMap<&str, usize> = vec![("a", 1), ("b", 2)].into_iter().collect();
///   let right: HashMap<&str, usize> = vec![("b", 3), ("c", 4)].into_iter().collect();
///   merge_counts(&mut left, right);
///   assert_eq!(left["a"], 1);
///   assert_eq!(left["b"], 5);
///   assert_eq!(left["c"], 4);
/// ```
pub fn merge_counts<K, V>(into: &mut HashMap<K, V>, from: HashMap<K, V>)
        where K: Hash + Eq,
              V: AddAssign + Default {
    for (k, v) in from {
        *into.entry(k).or_insert_with(V::default) += v;
    }
}

/// Folds per-task results into a single accumulator on the calling thread.
///
/// Intended to run strictly after a scheduler barrier, when no task is still writing.
pub fn fold_all<A, I, F>(parts: I, init: A, mut merge: F) -> A
        where I: IntoIterator,
              F: FnMut(&mut A, I::Item) {
    let mut acc = init;
    let mut n = 0usize;
    for p in parts {
        merge(&mut acc, p);
        n += 1;
    }
    debug!("Reduced {} partial results", n);
    acc
}

#[cfg(test)]
mod test_reduce {
    use super::*;

    fn counts(items: &[(&'static str, usize)]) -> HashMap<&'static str, usize> {
        items.iter().cloned().collect()
    }

    #[test]
    fn test_merge_into_empty() {
        let mut acc = HashMap::new();
        merge_counts(&mut acc, counts(&[("x", 2)]));
        assert_eq!(acc, counts(&[("x", 2)]));
    }

    #[test]
    fn test_merge_is_order_independent() {
        let parts = vec![
            counts(&[("a", 1), ("b", 1)]),
            counts(&[("b", 4)]),
            counts(&[("c", 2), ("a", 3)]),
        ];

        let forward = fold_all(parts.clone(), HashMap::new(), |acc, p| merge_counts(acc, p));
        let backward = fold_all(parts.into_iter().rev(), HashMap::new(), |acc, p| merge_counts(acc, p));
        assert_eq!(forward, backward);
        assert_eq!(forward, counts(&[("a", 4), ("b", 5), ("c", 2)]));
    }

    #[test]
    fn test_fold_all_empty() {
        let parts: Vec<usize> = Vec::new();
        assert_eq!(fold_all(parts, 7usize, |acc, x| *acc += x), 7);
    }
}

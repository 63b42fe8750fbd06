//! Merging partial indices.
//!
//! A merge is a per-key set union. It is associative, commutative and
//! idempotent, so shards may be merged in any order or grouping, and
//! including the same shard twice changes nothing.

use log::debug;

use crate::index::{Indices, SetIndex};

/// Merge any number of same-kind partial indices into one.
///
/// Keys missing from an input contribute nothing; no inputs give an empty index.
pub fn merge<V, I>(indices: I) -> SetIndex<V>
where
    V: Ord,
    I: IntoIterator<Item = SetIndex<V>>,
{
    let mut parts = indices.into_iter();
    let Some(mut merged) = parts.next() else {
        return SetIndex::new();
    };
    for part in parts {
        merged.merge_from(part);
    }
    merged
}

/// Merge shard results pairwise: inverted with inverted, bigram with bigram.
pub fn merge_indices<I>(partials: I) -> Indices
where
    I: IntoIterator<Item = Indices>,
{
    let mut count = 0usize;
    let merged = partials.into_iter().fold(Indices::default(), |mut acc, part| {
        count += 1;
        acc.merge_from(part);
        acc
    });
    debug!(
        "Merged {} partial indices into {} terms, {} bigrams",
        count,
        merged.inverted.len(),
        merged.bigrams.len()
    );
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{BigramIndex, InvertedIndex};

    fn inverted(pairs: &[(&str, u64)]) -> InvertedIndex {
        pairs.iter().map(|&(term, id)| (term, id)).collect()
    }

    #[test]
    fn test_merge_unions_per_key() {
        let a = inverted(&[("cat", 1), ("sat", 1)]);
        let b = inverted(&[("dog", 2), ("sat", 2)]);

        let merged = merge([a, b]);
        let expected = inverted(&[("cat", 1), ("sat", 1), ("sat", 2), ("dog", 2)]);
        assert_eq!(merged, expected);
    }

    #[test]
    fn test_merge_is_commutative_and_associative() {
        let a = inverted(&[("cat", 1), ("sat", 1)]);
        let b = inverted(&[("dog", 2), ("sat", 2)]);
        let c = inverted(&[("sad", 3), ("cat", 3)]);

        assert_eq!(
            merge([a.clone(), b.clone()]),
            merge([b.clone(), a.clone()])
        );
        assert_eq!(
            merge([a.clone(), merge([b.clone(), c.clone()])]),
            merge([merge([a, b]), c])
        );
    }

    #[test]
    fn test_merge_is_idempotent() {
        let a = inverted(&[("cat", 1), ("sat", 1), ("sat", 2)]);
        assert_eq!(merge([a.clone(), a.clone()]), a);
    }

    #[test]
    fn test_merge_of_nothing_is_empty() {
        let merged: BigramIndex = merge(Vec::new());
        assert!(merged.is_empty());
        assert!(merge_indices(Vec::new()).is_empty());
    }

    #[test]
    fn test_merge_indices_pairs_kinds() {
        let left = Indices::new(
            inverted(&[("cat", 1)]),
            [("$c", "cat".to_string())].into_iter().collect(),
        );
        let right = Indices::new(
            inverted(&[("cat", 2)]),
            [("at", "cat".to_string())].into_iter().collect(),
        );

        let merged = merge_indices([left, right]);
        assert_eq!(merged.inverted.get("cat").unwrap().len(), 2);
        assert_eq!(merged.bigrams.len(), 2);
    }
}

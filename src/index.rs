//! Inverted and bigram indices.
//!
//! Both indices have the same shape: a string key mapped to a deduplicated
//! set of values. [`SetIndex`] captures that shape once; the inverted index
//! maps terms to document ids and the bigram index maps bigrams to terms.
//! Indices are built per shard by [`builder`], combined by [`merge`], and
//! then only read.

pub mod builder;
pub mod merge;

use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Externally supplied document identifier.
pub type DocId = u64;

/// Per-document term sets, the input of index construction.
pub type IdTerms = HashMap<DocId, HashSet<String>>;

/// Term -> ids of the documents containing it.
pub type InvertedIndex = SetIndex<DocId>;

/// Bigram -> terms producing it.
pub type BigramIndex = SetIndex<String>;

/// A mapping from string keys to sets of values.
///
/// Value sets are ordered so posting lists come out sorted without an extra
/// pass. Serializes as a JSON object of key to sorted list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "V: Serialize",
    deserialize = "V: Deserialize<'de> + Ord"
))]
pub struct SetIndex<V> {
    entries: HashMap<String, BTreeSet<V>>,
}

impl<V: Ord> SetIndex<V> {
    /// Create an empty index.
    pub fn new() -> Self {
        SetIndex {
            entries: HashMap::new(),
        }
    }

    /// Add `value` under `key`, creating the entry if absent.
    ///
    /// Returns `true` if the value was not already present.
    pub fn insert(&mut self, key: &str, value: V) -> bool {
        if let Some(values) = self.entries.get_mut(key) {
            return values.insert(value);
        }
        self.entries
            .insert(key.to_string(), BTreeSet::from([value]));
        true
    }

    /// The value set stored under `key`.
    pub fn get(&self, key: &str) -> Option<&BTreeSet<V>> {
        self.entries.get(key)
    }

    /// Whether `key` has an entry.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over the keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over `(key, values)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<V>)> {
        self.entries.iter().map(|(key, values)| (key.as_str(), values))
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of (key, value) pairs.
    pub fn value_count(&self) -> usize {
        self.entries.values().map(BTreeSet::len).sum()
    }

    /// Union every entry of `other` into `self`.
    pub fn merge_from(&mut self, other: SetIndex<V>) {
        for (key, mut values) in other.entries {
            match self.entries.entry(key) {
                Entry::Occupied(entry) => {
                    let existing = entry.into_mut();
                    // Extend the larger set with the smaller one.
                    if existing.len() < values.len() {
                        std::mem::swap(existing, &mut values);
                    }
                    existing.extend(values);
                }
                Entry::Vacant(entry) => {
                    entry.insert(values);
                }
            }
        }
    }
}

impl SetIndex<DocId> {
    /// Number of distinct documents appearing in any posting list.
    pub fn document_count(&self) -> usize {
        self.entries
            .values()
            .flatten()
            .collect::<HashSet<_>>()
            .len()
    }
}

impl<V: Ord> Default for SetIndex<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Ord> From<HashMap<String, BTreeSet<V>>> for SetIndex<V> {
    fn from(entries: HashMap<String, BTreeSet<V>>) -> Self {
        // Keys with no values carry no information.
        let entries = entries
            .into_iter()
            .filter(|(_, values)| !values.is_empty())
            .collect();
        SetIndex { entries }
    }
}

impl<K: AsRef<str>, V: Ord> FromIterator<(K, V)> for SetIndex<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut index = SetIndex::new();
        for (key, value) in iter {
            index.insert(key.as_ref(), value);
        }
        index
    }
}

/// An inverted index together with the bigram index over its terms.
///
/// This is what one shard of the corpus contributes, and also what a
/// complete merged build publishes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Indices {
    /// Term -> document ids.
    pub inverted: InvertedIndex,
    /// Bigram -> terms.
    pub bigrams: BigramIndex,
}

impl Indices {
    /// Pair up an inverted index and a bigram index.
    pub fn new(inverted: InvertedIndex, bigrams: BigramIndex) -> Self {
        Indices { inverted, bigrams }
    }

    /// Split into the `(inverted, bigram)` tuple.
    pub fn into_parts(self) -> (InvertedIndex, BigramIndex) {
        (self.inverted, self.bigrams)
    }

    /// Union another pair into this one, index by index.
    pub fn merge_from(&mut self, other: Indices) {
        self.inverted.merge_from(other.inverted);
        self.bigrams.merge_from(other.bigrams);
    }

    /// Whether both indices are empty.
    pub fn is_empty(&self) -> bool {
        self.inverted.is_empty() && self.bigrams.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_deduplicates() {
        let mut index = InvertedIndex::new();
        assert!(index.insert("sat", 1));
        assert!(index.insert("sat", 2));
        assert!(!index.insert("sat", 1));

        assert_eq!(index.len(), 1);
        assert_eq!(index.value_count(), 2);
        assert_eq!(
            index.get("sat").unwrap().iter().copied().collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert!(index.get("cat").is_none());
    }

    #[test]
    fn test_merge_from_unions_values() {
        let mut left: InvertedIndex = [("sat", 1), ("cat", 1)].into_iter().collect();
        let right: InvertedIndex = [("sat", 2), ("dog", 2), ("sat", 3)].into_iter().collect();

        left.merge_from(right);

        assert_eq!(left.len(), 3);
        assert_eq!(left.get("sat").unwrap().len(), 3);
        assert_eq!(left.document_count(), 3);
    }

    #[test]
    fn test_serializes_as_key_to_sorted_list() {
        let index: InvertedIndex = [("sat", 2), ("sat", 1)].into_iter().collect();
        let json = serde_json::to_string(&index).unwrap();
        assert_eq!(json, r#"{"sat":[1,2]}"#);

        let restored: InvertedIndex = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, index);
    }

    #[test]
    fn test_from_map_drops_empty_entries() {
        let mut map = HashMap::new();
        map.insert("sat".to_string(), BTreeSet::from([1u64]));
        map.insert("void".to_string(), BTreeSet::new());

        let index = InvertedIndex::from(map);
        assert!(index.contains_key("sat"));
        assert!(!index.contains_key("void"));
    }
}

//! Single-`*` wildcard patterns resolved through the bigram index.

use std::collections::BTreeSet;

use log::debug;

use crate::bigram::{prefix_bigrams, suffix_bigrams};
use crate::error::{BoolSearchError, Result};
use crate::index::BigramIndex;

/// The wildcard character.
pub const WILDCARD: char = '*';

/// A `prefix*suffix` pattern.
///
/// The `*` matches zero or more characters. Expansion looks up the
/// start-anchored bigrams of the prefix and the end-anchored bigrams of
/// the suffix, unions the terms found, and keeps only the candidates that
/// really start with the prefix and end with the suffix. Bigram membership
/// alone is necessary but not sufficient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardPattern {
    prefix: String,
    suffix: String,
}

impl WildcardPattern {
    /// Create a pattern from its two fragments.
    pub fn new<S: Into<String>>(prefix: S, suffix: S) -> Self {
        WildcardPattern {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Parse a pattern containing exactly one `*`.
    pub fn parse(pattern: &str) -> Result<Self> {
        let stars = pattern.matches(WILDCARD).count();
        if stars != 1 {
            return Err(BoolSearchError::malformed_query(format!(
                "wildcard query '{pattern}' must contain exactly one '{WILDCARD}', found {stars}"
            )));
        }
        match pattern.split_once(WILDCARD) {
            Some((prefix, suffix)) => Ok(Self::new(prefix, suffix)),
            None => Err(BoolSearchError::malformed_query(pattern)),
        }
    }

    /// Text before the `*`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Text after the `*`.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// The bigrams to look up: `$prefix` windows followed by `suffix$` windows.
    pub fn bigrams(&self) -> Vec<String> {
        let mut bigrams = prefix_bigrams(&self.prefix);
        bigrams.extend(suffix_bigrams(&self.suffix));
        bigrams
    }

    /// Check if a term literally starts with the prefix and ends with the suffix.
    pub fn matches(&self, term: &str) -> bool {
        term.starts_with(&self.prefix) && term.ends_with(&self.suffix)
    }

    /// Terms sharing at least one of the pattern's bigrams, before filtering.
    pub fn candidates(&self, bigram_index: &BigramIndex) -> BTreeSet<String> {
        self.bigrams()
            .iter()
            .filter_map(|bigram| bigram_index.get(bigram))
            .flatten()
            .cloned()
            .collect()
    }

    /// Indexed terms matching the pattern.
    pub fn expand(&self, bigram_index: &BigramIndex) -> BTreeSet<String> {
        let candidates = self.candidates(bigram_index);
        let candidate_count = candidates.len();
        let matched: BTreeSet<String> = candidates
            .into_iter()
            .filter(|term| self.matches(term))
            .collect();
        debug!(
            "Wildcard {}*{}: {} candidates, {} after filtering",
            self.prefix,
            self.suffix,
            candidate_count,
            matched.len()
        );
        matched
    }
}

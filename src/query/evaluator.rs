//! Query evaluation against a published inverted index and bigram index.

use std::collections::BTreeSet;

use log::debug;

use crate::error::Result;
use crate::index::{BigramIndex, DocId, Indices, InvertedIndex};
use crate::query::parser::QueryParser;
use crate::query::{Combination, Query, QueryType};

/// Resolves queries to sorted document id lists.
///
/// The evaluator borrows both indices and never mutates them, so any number
/// of evaluators may run concurrently over the same published indices.
/// Evaluating the same query twice always gives the same answer.
#[derive(Debug, Clone)]
pub struct QueryEvaluator<'a> {
    inverted: &'a InvertedIndex,
    bigrams: &'a BigramIndex,
    parser: QueryParser,
}

impl<'a> QueryEvaluator<'a> {
    /// Create an evaluator over an inverted index and its bigram index.
    pub fn new(inverted: &'a InvertedIndex, bigrams: &'a BigramIndex) -> Self {
        QueryEvaluator {
            inverted,
            bigrams,
            parser: QueryParser::new(),
        }
    }

    /// Create an evaluator over a published pair of indices.
    pub fn from_indices(indices: &'a Indices) -> Self {
        Self::new(&indices.inverted, &indices.bigrams)
    }

    /// Evaluate a raw query string as the given query type.
    ///
    /// Returns document ids in ascending order. An empty (or all-whitespace)
    /// query returns no documents without touching the indices.
    pub fn evaluate(&self, query_text: &str, query_type: QueryType) -> Result<Vec<DocId>> {
        if query_text.trim().is_empty() {
            return Ok(Vec::new());
        }
        let query = self.parser.parse(query_text, query_type)?;
        Ok(self.execute(&query))
    }

    /// Evaluate a raw query string with a textual query type selector.
    ///
    /// The selector is validated first, so an unknown selector fails with
    /// `UnknownQueryType` even for an empty query.
    pub fn evaluate_selector(&self, query_text: &str, selector: &str) -> Result<Vec<DocId>> {
        let query_type: QueryType = selector.parse()?;
        self.evaluate(query_text, query_type)
    }

    /// Evaluate an already parsed query.
    pub fn execute(&self, query: &Query) -> Vec<DocId> {
        let terms = self.resolve_terms(query);
        debug!("{} query resolved to {} terms", query.query_type(), terms.len());
        self.resolve_documents(&terms, query.combination())
            .into_iter()
            .collect()
    }

    /// The candidate terms of a query.
    ///
    /// Keyword queries use their keywords verbatim; wildcard queries expand
    /// through the bigram index and keep only true matches.
    pub fn resolve_terms(&self, query: &Query) -> Vec<String> {
        match query {
            Query::Conjunctive(terms) | Query::Disjunctive(terms) => terms.clone(),
            Query::Wildcard(pattern) => pattern.expand(self.bigrams).into_iter().collect(),
        }
    }

    /// Combine the posting sets of `terms`.
    ///
    /// A term absent from the index has an empty posting set. Intersecting
    /// zero terms yields no documents rather than the whole corpus.
    pub fn resolve_documents<S: AsRef<str>>(
        &self,
        terms: &[S],
        combination: Combination,
    ) -> BTreeSet<DocId> {
        match combination {
            Combination::Union => terms
                .iter()
                .filter_map(|term| self.inverted.get(term.as_ref()))
                .fold(BTreeSet::new(), |mut acc, postings| {
                    acc.extend(postings.iter().copied());
                    acc
                }),
            Combination::Intersection => self.intersect(terms),
        }
    }

    fn intersect<S: AsRef<str>>(&self, terms: &[S]) -> BTreeSet<DocId> {
        let mut postings = Vec::with_capacity(terms.len());
        for term in terms {
            match self.inverted.get(term.as_ref()) {
                Some(set) => postings.push(set),
                None => return BTreeSet::new(),
            }
        }

        // Start from the shortest posting list.
        postings.sort_by_key(|set| set.len());
        let mut sets = postings.into_iter();
        let Some(first) = sets.next() else {
            return BTreeSet::new();
        };

        let mut result = first.clone();
        for set in sets {
            result.retain(|doc_id| set.contains(doc_id));
            if result.is_empty() {
                break;
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::error::BoolSearchError;
    use crate::index::IdTerms;
    use crate::index::builder::build_partial_indices;
    use crate::query::WildcardPattern;

    fn sample_indices() -> Indices {
        let terms = |words: &[&str]| words.iter().map(|w| w.to_string()).collect::<HashSet<_>>();
        let corpus = IdTerms::from([
            (1, terms(&["cat", "sat"])),
            (2, terms(&["dog", "sat"])),
            (3, terms(&["sad"])),
        ]);
        build_partial_indices(&corpus).unwrap()
    }

    #[test]
    fn test_conjunctive() {
        let indices = sample_indices();
        let evaluator = QueryEvaluator::from_indices(&indices);

        assert_eq!(evaluator.evaluate("cat sat", QueryType::Conjunctive).unwrap(), vec![1]);
        assert_eq!(evaluator.evaluate("sat", QueryType::Conjunctive).unwrap(), vec![1, 2]);
        assert_eq!(
            evaluator.evaluate("cat dog", QueryType::Conjunctive).unwrap(),
            Vec::<DocId>::new()
        );
        assert_eq!(
            evaluator.evaluate("cat zebra", QueryType::Conjunctive).unwrap(),
            Vec::<DocId>::new()
        );
    }

    #[test]
    fn test_disjunctive() {
        let indices = sample_indices();
        let evaluator = QueryEvaluator::from_indices(&indices);

        assert_eq!(evaluator.evaluate("cat dog", QueryType::Disjunctive).unwrap(), vec![1, 2]);
        assert_eq!(evaluator.evaluate("Cat OR zebra", QueryType::Disjunctive).unwrap(), vec![1]);
    }

    #[test]
    fn test_wildcard() {
        let indices = sample_indices();
        let evaluator = QueryEvaluator::from_indices(&indices);

        assert_eq!(evaluator.evaluate("s*t", QueryType::Wildcard).unwrap(), vec![1, 2]);
        assert_eq!(evaluator.evaluate("sa*", QueryType::Wildcard).unwrap(), vec![1, 2, 3]);
        assert_eq!(evaluator.evaluate("*d", QueryType::Wildcard).unwrap(), vec![3]);
        assert_eq!(evaluator.evaluate("*", QueryType::Wildcard).unwrap(), Vec::<DocId>::new());
    }

    #[test]
    fn test_wildcard_terms_are_unioned() {
        let indices = sample_indices();
        let evaluator = QueryEvaluator::from_indices(&indices);

        // "cat" and "sat" match, and no document holds "sad" together with them.
        let query = Query::Wildcard(WildcardPattern::new("", "at"));
        assert_eq!(evaluator.execute(&query), vec![1, 2]);
        assert_eq!(evaluator.evaluate("c*t", QueryType::Wildcard).unwrap(), vec![1]);
    }

    #[test]
    fn test_wildcard_without_star_is_keyword_lookup() {
        let indices = sample_indices();
        let evaluator = QueryEvaluator::from_indices(&indices);

        assert_eq!(evaluator.evaluate("cat dog", QueryType::Wildcard).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_empty_and_noise_queries() {
        let indices = sample_indices();
        let evaluator = QueryEvaluator::from_indices(&indices);

        for query_type in QueryType::ALL {
            assert!(evaluator.evaluate("", query_type).unwrap().is_empty());
            assert!(evaluator.evaluate("   \t", query_type).unwrap().is_empty());
        }
        assert!(evaluator.evaluate("and or", QueryType::Conjunctive).unwrap().is_empty());
        assert!(evaluator.evaluate("and or", QueryType::Disjunctive).unwrap().is_empty());
    }

    #[test]
    fn test_errors() {
        let indices = sample_indices();
        let evaluator = QueryEvaluator::from_indices(&indices);

        assert!(matches!(
            evaluator.evaluate("s*t*", QueryType::Wildcard),
            Err(BoolSearchError::MalformedQuery(_))
        ));
        assert!(matches!(
            evaluator.evaluate_selector("cat", "phrase"),
            Err(BoolSearchError::UnknownQueryType(_))
        ));
        assert_eq!(evaluator.evaluate_selector("cat sat", "1").unwrap(), vec![1]);
    }

    #[test]
    fn test_intersection_of_nothing_is_empty() {
        let indices = sample_indices();
        let evaluator = QueryEvaluator::from_indices(&indices);

        let none: [&str; 0] = [];
        assert!(evaluator.resolve_documents(&none, Combination::Intersection).is_empty());
        assert!(evaluator.resolve_documents(&none, Combination::Union).is_empty());
    }
}

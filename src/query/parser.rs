//! Query parser for turning a raw query string into a [`Query`].

use crate::error::Result;
use crate::query::wildcard::{WILDCARD, WildcardPattern};
use crate::query::{Query, QueryType};

/// Boolean operator words that may appear inline and are not search terms.
pub const OPERATOR_WORDS: &[&str] = &["and", "or"];

/// Parses query strings against a query type.
///
/// The parser owns the one normalization step queries need: trimming and
/// case folding, matching the case folding applied at index time.
#[derive(Debug, Clone)]
pub struct QueryParser {
    operator_words: Vec<String>,
}

impl Default for QueryParser {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryParser {
    /// Create a parser that drops the default operator words.
    pub fn new() -> Self {
        QueryParser {
            operator_words: OPERATOR_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Trim and case-fold a raw query string.
    pub fn normalize(&self, query_text: &str) -> String {
        query_text.trim().to_lowercase()
    }

    /// Split normalized text on whitespace, dropping operator words.
    pub fn keywords(&self, normalized: &str) -> Vec<String> {
        normalized
            .split_whitespace()
            .filter(|token| !self.operator_words.iter().any(|op| op == token))
            .map(str::to_string)
            .collect()
    }

    /// Parse a raw query string.
    ///
    /// A wildcard query without `*` is an exact keyword lookup and parses as
    /// a disjunction of its keywords, which combines postings the same way a
    /// wildcard expansion does. A wildcard query with more than one `*` is
    /// rejected with `MalformedQuery`.
    pub fn parse(&self, query_text: &str, query_type: QueryType) -> Result<Query> {
        let normalized = self.normalize(query_text);

        let query = match query_type {
            QueryType::Conjunctive => Query::Conjunctive(self.keywords(&normalized)),
            QueryType::Disjunctive => Query::Disjunctive(self.keywords(&normalized)),
            QueryType::Wildcard if !normalized.contains(WILDCARD) => {
                Query::Disjunctive(self.keywords(&normalized))
            }
            QueryType::Wildcard => Query::Wildcard(WildcardPattern::parse(&normalized)?),
        };
        Ok(query)
    }
}

//! Boolean and wildcard queries over the published indices.
//!
//! A raw query string is parsed against a [`QueryType`] into a [`Query`],
//! which the [`evaluator::QueryEvaluator`] resolves to a sorted list of
//! document ids.

pub mod evaluator;
pub mod parser;
pub mod wildcard;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BoolSearchError, Result};

pub use evaluator::QueryEvaluator;
pub use parser::QueryParser;
pub use wildcard::WildcardPattern;

/// The kind of query requested by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryType {
    /// Documents containing every term.
    Conjunctive,
    /// Documents containing at least one term.
    Disjunctive,
    /// Documents containing any term matching a `prefix*suffix` pattern.
    Wildcard,
}

impl QueryType {
    /// Every recognized query type, in selector order.
    pub const ALL: [QueryType; 3] = [
        QueryType::Conjunctive,
        QueryType::Disjunctive,
        QueryType::Wildcard,
    ];

    /// Lowercase name of the query type.
    pub fn name(&self) -> &'static str {
        match self {
            QueryType::Conjunctive => "conjunctive",
            QueryType::Disjunctive => "disjunctive",
            QueryType::Wildcard => "wildcard",
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QueryType {
    type Err = BoolSearchError;

    /// Accepts the type names (any case) or the numeric selectors `1`, `2`, `3`.
    fn from_str(selector: &str) -> Result<Self> {
        match selector.trim().to_lowercase().as_str() {
            "conjunctive" | "1" => Ok(QueryType::Conjunctive),
            "disjunctive" | "2" => Ok(QueryType::Disjunctive),
            "wildcard" | "3" => Ok(QueryType::Wildcard),
            _ => Err(BoolSearchError::unknown_query_type(selector)),
        }
    }
}

/// How per-term posting sets are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combination {
    /// Documents present in every set. Zero sets give no documents.
    Intersection,
    /// Documents present in any set.
    Union,
}

impl From<QueryType> for Combination {
    /// Only conjunctive queries intersect. Wildcard expansions are unioned.
    fn from(query_type: QueryType) -> Self {
        match query_type {
            QueryType::Conjunctive => Combination::Intersection,
            QueryType::Disjunctive | QueryType::Wildcard => Combination::Union,
        }
    }
}

/// A parsed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Match documents containing all of these terms.
    Conjunctive(Vec<String>),
    /// Match documents containing any of these terms.
    Disjunctive(Vec<String>),
    /// Match documents containing any term of the pattern's expansion.
    Wildcard(WildcardPattern),
}

impl Query {
    /// The query type this query evaluates as.
    pub fn query_type(&self) -> QueryType {
        match self {
            Query::Conjunctive(_) => QueryType::Conjunctive,
            Query::Disjunctive(_) => QueryType::Disjunctive,
            Query::Wildcard(_) => QueryType::Wildcard,
        }
    }

    /// How this query combines its terms' postings.
    pub fn combination(&self) -> Combination {
        Combination::from(self.query_type())
    }
}

//! # boolsearch
//!
//! Boolean and wildcard search over a fixed document corpus.
//!
//! ## Features
//!
//! - Inverted index from terms to document ids
//! - Bigram index over terms for `prefix*suffix` wildcard matching
//! - Conjunctive, disjunctive and wildcard queries
//! - Sharded, parallel index construction with an order-independent merge
//! - JSON persistence and a small CLI
//!
//! ## Example
//!
//! ```
//! use std::collections::HashSet;
//!
//! use boolsearch::index::IdTerms;
//! use boolsearch::index::builder::build_partial_indices;
//! use boolsearch::query::{QueryEvaluator, QueryType};
//!
//! # fn main() -> boolsearch::error::Result<()> {
//! let corpus = IdTerms::from([
//!     (1, HashSet::from(["cat".to_string(), "sat".to_string()])),
//!     (2, HashSet::from(["dog".to_string(), "sat".to_string()])),
//! ]);
//! let indices = build_partial_indices(&corpus)?;
//!
//! let evaluator = QueryEvaluator::from_indices(&indices);
//! assert_eq!(evaluator.evaluate("cat sat", QueryType::Conjunctive)?, vec![1]);
//! assert_eq!(evaluator.evaluate("s*t", QueryType::Wildcard)?, vec![1, 2]);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod bigram;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod index;
pub mod parallel_index;
pub mod query;
pub mod storage;

pub mod prelude {
    pub use crate::error::{BoolSearchError, Result};
    pub use crate::index::builder::{IndexBuilder, build_partial_indices};
    pub use crate::index::merge::{merge, merge_indices};
    pub use crate::index::{BigramIndex, DocId, IdTerms, Indices, InvertedIndex};
    pub use crate::parallel_index::{ParallelIndexConfig, ParallelIndexEngine};
    pub use crate::query::{Query, QueryEvaluator, QueryType};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

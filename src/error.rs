//! Error types for the boolsearch library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`BoolSearchError`] enum. Absence of a term, bigram or document in an
//! index is never an error: it shows up as an empty result set.
//!
//! # Examples
//!
//! ```
//! use boolsearch::error::{BoolSearchError, Result};
//!
//! fn check_selector(selector: &str) -> Result<()> {
//!     Err(BoolSearchError::unknown_query_type(selector))
//! }
//!
//! match check_selector("fuzzy") {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for boolsearch operations.
#[derive(Error, Debug)]
pub enum BoolSearchError {
    /// A term handed to the bigram generator is empty or contains the sentinel.
    #[error("Malformed term: {0}")]
    MalformedTerm(String),

    /// A query string that cannot be decomposed (e.g. several `*` in a wildcard).
    #[error("Malformed query: {0}")]
    MalformedQuery(String),

    /// A query type selector outside the recognized kinds.
    #[error("Unknown query type: {0}")]
    UnknownQueryType(String),

    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Analysis-related errors (tokenizer resources, patterns)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Corpus record extraction errors
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Index persistence errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Operation cancelled
    #[error("Operation cancelled: {0}")]
    OperationCancelled(String),

    /// Worker pool errors
    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with BoolSearchError.
pub type Result<T> = std::result::Result<T, BoolSearchError>;

impl BoolSearchError {
    /// Create a new malformed term error.
    pub fn malformed_term<S: Into<String>>(msg: S) -> Self {
        BoolSearchError::MalformedTerm(msg.into())
    }

    /// Create a new malformed query error.
    pub fn malformed_query<S: Into<String>>(msg: S) -> Self {
        BoolSearchError::MalformedQuery(msg.into())
    }

    /// Create a new unknown query type error.
    pub fn unknown_query_type<S: Into<String>>(selector: S) -> Self {
        BoolSearchError::UnknownQueryType(selector.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        BoolSearchError::Analysis(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        BoolSearchError::Corpus(msg.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        BoolSearchError::Storage(msg.into())
    }

    /// Create a new cancelled error.
    pub fn cancelled<S: Into<String>>(msg: S) -> Self {
        BoolSearchError::OperationCancelled(msg.into())
    }

    /// Create a new thread pool error.
    pub fn thread_pool<S: Into<String>>(msg: S) -> Self {
        BoolSearchError::ThreadPool(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        BoolSearchError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        BoolSearchError::Other(msg.into())
    }

    /// Short, stable name of the error kind, used when reporting failures.
    pub fn kind(&self) -> &'static str {
        match self {
            BoolSearchError::MalformedTerm(_) => "MalformedTerm",
            BoolSearchError::MalformedQuery(_) => "MalformedQuery",
            BoolSearchError::UnknownQueryType(_) => "UnknownQueryType",
            BoolSearchError::Io(_) => "Io",
            BoolSearchError::Json(_) => "Json",
            BoolSearchError::Analysis(_) => "Analysis",
            BoolSearchError::Corpus(_) => "Corpus",
            BoolSearchError::Storage(_) => "Storage",
            BoolSearchError::OperationCancelled(_) => "OperationCancelled",
            BoolSearchError::ThreadPool(_) => "ThreadPool",
            BoolSearchError::InvalidArgument(_) => "InvalidArgument",
            BoolSearchError::Other(_) | BoolSearchError::Anyhow(_) => "Other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = BoolSearchError::malformed_term("a$b");
        assert_eq!(error.to_string(), "Malformed term: a$b");

        let error = BoolSearchError::malformed_query("a*b*c");
        assert_eq!(error.to_string(), "Malformed query: a*b*c");

        let error = BoolSearchError::unknown_query_type("fuzzy");
        assert_eq!(error.to_string(), "Unknown query type: fuzzy");
        assert_eq!(error.kind(), "UnknownQueryType");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = BoolSearchError::from(io_error);

        match error {
            BoolSearchError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}

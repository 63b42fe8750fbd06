//! Construction of a shard's inverted and bigram indices.

use log::debug;

use crate::bigram::generate_bigrams;
use crate::error::Result;
use crate::index::{BigramIndex, DocId, IdTerms, Indices, InvertedIndex};

/// Accumulates documents into an inverted index and a bigram index.
///
/// Bigrams are generated once per distinct term seen by this builder,
/// regardless of how many documents contain the term.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    inverted: InvertedIndex,
    bigrams: BigramIndex,
    documents: usize,
}

impl IndexBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index one document's terms. Empty terms are ignored.
    pub fn add_document<I, S>(&mut self, doc_id: DocId, terms: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for term in terms {
            let term = term.as_ref();
            if term.is_empty() {
                continue;
            }

            let first_occurrence = !self.inverted.contains_key(term);
            if first_occurrence {
                for bigram in generate_bigrams(term)? {
                    self.bigrams.insert(&bigram, term.to_string());
                }
            }
            self.inverted.insert(term, doc_id);
        }
        self.documents += 1;
        Ok(())
    }

    /// Number of documents added so far.
    pub fn document_count(&self) -> usize {
        self.documents
    }

    /// Consume the builder and return the finished pair of indices.
    pub fn finish(self) -> Indices {
        debug!(
            "Built partial index: {} documents, {} terms, {} bigrams",
            self.documents,
            self.inverted.len(),
            self.bigrams.len()
        );
        Indices::new(self.inverted, self.bigrams)
    }
}

/// Build the inverted and bigram indices of one shard of the corpus.
///
/// An empty input yields two empty indices. A term containing the bigram
/// sentinel aborts the build with `MalformedTerm`.
pub fn build_partial_indices(id_terms: &IdTerms) -> Result<Indices> {
    let mut builder = IndexBuilder::new();
    for (&doc_id, terms) in id_terms {
        builder.add_document(doc_id, terms)?;
    }
    Ok(builder.finish())
}

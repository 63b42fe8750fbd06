//! Partitioning strategies for splitting a corpus into shards.

use std::hash::Hasher;

use ahash::AHasher;

use crate::error::{BoolSearchError, Result};
use crate::index::{DocId, IdTerms};

/// Trait for assigning documents to shards.
pub trait DocumentPartitioner: Send + Sync {
    /// Determine which shard a document should be assigned to.
    /// Returns the shard index (0-based).
    fn partition(&self, doc_id: DocId) -> Result<usize>;

    /// Get the total number of shards this partitioner produces.
    fn partition_count(&self) -> usize;

    /// Get a human-readable description of this partitioner.
    fn description(&self) -> String;

    /// Validate that the partitioner is properly configured.
    fn validate(&self) -> Result<()> {
        if self.partition_count() == 0 {
            return Err(BoolSearchError::invalid_argument(
                "Partition count cannot be zero",
            ));
        }
        Ok(())
    }

    /// Split a corpus into `partition_count()` shards. Some shards may be empty.
    fn split(&self, id_terms: IdTerms) -> Result<Vec<IdTerms>> {
        self.validate()?;
        let mut shards: Vec<IdTerms> = (0..self.partition_count()).map(|_| IdTerms::new()).collect();

        for (doc_id, terms) in id_terms {
            let shard = self.partition(doc_id)?;
            let target = shards.get_mut(shard).ok_or_else(|| {
                BoolSearchError::invalid_argument(format!(
                    "Partition index {} is out of range (count: {})",
                    shard,
                    self.partition_count()
                ))
            })?;
            target.insert(doc_id, terms);
        }

        Ok(shards)
    }
}

/// Distributes documents by the hash of their id.
#[derive(Debug, Clone)]
pub struct HashPartitioner {
    /// Number of shards.
    partition_count: usize,

    /// Optional seed for hash function.
    hash_seed: Option<u64>,
}

impl HashPartitioner {
    /// Create a new hash partitioner.
    pub fn new(partition_count: usize) -> Self {
        Self {
            partition_count,
            hash_seed: None,
        }
    }

    /// Create a hash partitioner with a custom hash seed.
    pub fn with_seed(partition_count: usize, seed: u64) -> Self {
        Self {
            partition_count,
            hash_seed: Some(seed),
        }
    }

    fn calculate_hash(&self, doc_id: DocId) -> u64 {
        let mut hasher = AHasher::default();

        if let Some(seed) = self.hash_seed {
            hasher.write_u64(seed);
        }

        hasher.write_u64(doc_id);
        hasher.finish()
    }
}

impl DocumentPartitioner for HashPartitioner {
    fn partition(&self, doc_id: DocId) -> Result<usize> {
        if self.partition_count == 0 {
            return Err(BoolSearchError::invalid_argument(
                "Partition count cannot be zero",
            ));
        }
        Ok((self.calculate_hash(doc_id) % self.partition_count as u64) as usize)
    }

    fn partition_count(&self) -> usize {
        self.partition_count
    }

    fn description(&self) -> String {
        format!(
            "HashPartitioner(partitions={}, seed={:?})",
            self.partition_count, self.hash_seed
        )
    }
}

/// Distributes documents by id ranges.
///
/// With boundaries `[b0, b1, ...]`, ids below `b0` go to shard 0, ids in
/// `[b0, b1)` to shard 1, and so on; ids at or past the last boundary go
/// to the final shard.
#[derive(Debug, Clone)]
pub struct RangePartitioner {
    /// Range boundaries (sorted).
    boundaries: Vec<DocId>,
}

impl RangePartitioner {
    /// Create a new range partitioner.
    pub fn new(boundaries: Vec<DocId>) -> Result<Self> {
        if boundaries.is_empty() {
            return Err(BoolSearchError::invalid_argument(
                "Range boundaries cannot be empty",
            ));
        }

        let mut sorted_boundaries = boundaries;
        sorted_boundaries.sort_unstable();
        sorted_boundaries.dedup();

        Ok(Self {
            boundaries: sorted_boundaries,
        })
    }
}

impl DocumentPartitioner for RangePartitioner {
    fn partition(&self, doc_id: DocId) -> Result<usize> {
        Ok(self.boundaries.partition_point(|&boundary| boundary <= doc_id))
    }

    fn partition_count(&self) -> usize {
        self.boundaries.len() + 1
    }

    fn description(&self) -> String {
        format!("RangePartitioner(boundaries={:?})", self.boundaries)
    }
}

//! Sharded, parallel index construction.
//!
//! The corpus is split into shards, each shard is indexed independently on a
//! worker pool, and the partial results are merged once every worker has
//! reported back. Workers share no mutable state.

pub mod config;
pub mod engine;
pub mod partitioner;

pub use config::{MergeStrategy, ParallelIndexConfig};
pub use engine::{CancellationToken, ParallelIndexEngine, ParallelIndexingResult};
pub use partitioner::{DocumentPartitioner, HashPartitioner, RangePartitioner};

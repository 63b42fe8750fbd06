//! Configuration for parallel indexing operations.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BoolSearchError, Result};

/// How partial indices are combined once all shards are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeStrategy {
    /// Fold the partial results one after another on the calling thread.
    Sequential,

    /// Pairwise tree reduction on the worker pool.
    Tree,
}

/// Configuration for the parallel index engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelIndexConfig {
    /// Thread pool size for parallel processing.
    /// If None, uses the number of CPU cores.
    pub thread_pool_size: Option<usize>,

    /// Number of shards an in-memory corpus is split into.
    pub shard_count: usize,

    /// Strategy for merging shard results.
    pub merge_strategy: MergeStrategy,
}

impl Default for ParallelIndexConfig {
    fn default() -> Self {
        Self {
            thread_pool_size: None,
            shard_count: num_cpus::get(),
            merge_strategy: MergeStrategy::Tree,
        }
    }
}

impl ParallelIndexConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: ParallelIndexConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the worker thread count.
    pub fn with_thread_pool_size(mut self, threads: usize) -> Self {
        self.thread_pool_size = Some(threads);
        self
    }

    /// Set the number of in-memory shards.
    pub fn with_shard_count(mut self, shard_count: usize) -> Self {
        self.shard_count = shard_count;
        self
    }

    /// Set the merge strategy.
    pub fn with_merge_strategy(mut self, strategy: MergeStrategy) -> Self {
        self.merge_strategy = strategy;
        self
    }

    /// Number of worker threads actually used.
    pub fn effective_threads(&self) -> usize {
        self.thread_pool_size.unwrap_or_else(num_cpus::get)
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.shard_count == 0 {
            return Err(BoolSearchError::invalid_argument(
                "shard_count must be at least 1",
            ));
        }
        if self.thread_pool_size == Some(0) {
            return Err(BoolSearchError::invalid_argument(
                "thread_pool_size must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParallelIndexConfig::default();
        assert!(config.shard_count > 0);
        assert!(config.effective_threads() > 0);
        assert_eq!(config.merge_strategy, MergeStrategy::Tree);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = ParallelIndexConfig::default()
            .with_thread_pool_size(3)
            .with_shard_count(8)
            .with_merge_strategy(MergeStrategy::Sequential);

        assert_eq!(config.effective_threads(), 3);
        assert_eq!(config.shard_count, 8);
        assert_eq!(config.merge_strategy, MergeStrategy::Sequential);
    }

    #[test]
    fn test_load_partial_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"shard_count": 4, "merge_strategy": "sequential"}}"#).unwrap();

        let config = ParallelIndexConfig::load(file.path()).unwrap();
        assert_eq!(config.shard_count, 4);
        assert_eq!(config.merge_strategy, MergeStrategy::Sequential);
        assert_eq!(config.thread_pool_size, None);
    }

    #[test]
    fn test_invalid_config() {
        let config = ParallelIndexConfig::default().with_shard_count(0);
        assert!(matches!(
            config.validate(),
            Err(BoolSearchError::InvalidArgument(_))
        ));
    }
}

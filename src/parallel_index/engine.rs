//! Main parallel indexing engine implementation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crossbeam_channel::unbounded;
use log::{debug, info, warn};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{BoolSearchError, Result};
use crate::index::builder::build_partial_indices;
use crate::index::merge::merge_indices;
use crate::index::{IdTerms, Indices};
use crate::parallel_index::config::{MergeStrategy, ParallelIndexConfig};
use crate::parallel_index::partitioner::{DocumentPartitioner, HashPartitioner};

/// Shared flag used to abandon the shards of a running build.
///
/// Shards that have not started when the flag is raised are skipped, and
/// the build returns `OperationCancelled` without merging anything.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Result of a parallel indexing operation.
#[derive(Debug)]
pub struct ParallelIndexingResult {
    /// The merged inverted and bigram indices.
    pub indices: Indices,

    /// Number of shards built and merged.
    pub shards_processed: usize,

    /// Total execution time.
    pub execution_time: Duration,
}

/// Builds indices shard by shard on a worker pool and merges the results.
pub struct ParallelIndexEngine {
    /// Configuration for the engine.
    config: ParallelIndexConfig,

    /// Thread pool for parallel execution.
    thread_pool: Arc<ThreadPool>,

    /// Caller-controlled cancellation.
    cancellation: CancellationToken,
}

impl ParallelIndexEngine {
    /// Create a new parallel indexing engine.
    pub fn new(config: ParallelIndexConfig) -> Result<Self> {
        config.validate()?;
        let thread_pool_size = config.effective_threads();

        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(thread_pool_size)
            .thread_name(|i| format!("parallel-index-{i}"))
            .build()
            .map_err(|e| BoolSearchError::thread_pool(format!("Failed to create thread pool: {e}")))?;

        Ok(Self {
            config,
            thread_pool: Arc::new(thread_pool),
            cancellation: CancellationToken::new(),
        })
    }

    /// The engine configuration.
    pub fn config(&self) -> &ParallelIndexConfig {
        &self.config
    }

    /// A handle that cancels builds run by this engine.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation.clone()
    }

    /// Build an in-memory corpus, split into `shard_count` hash shards.
    pub fn build(&self, id_terms: IdTerms) -> Result<ParallelIndexingResult> {
        let partitioner = HashPartitioner::new(self.config.shard_count);
        self.build_partitioned(id_terms, &partitioner)
    }

    /// Build an in-memory corpus split by the given partitioner.
    pub fn build_partitioned(
        &self,
        id_terms: IdTerms,
        partitioner: &dyn DocumentPartitioner,
    ) -> Result<ParallelIndexingResult> {
        let shards: Vec<IdTerms> = partitioner
            .split(id_terms)?
            .into_iter()
            .filter(|shard| !shard.is_empty())
            .collect();
        debug!("Split corpus with {}", partitioner.description());

        self.build_shards(shards, |shard| build_partial_indices(&shard))
    }

    /// Run `build` over every shard on the pool, then merge the partial indices.
    ///
    /// The first failing shard cancels the shards that have not started yet,
    /// and its error is returned. Nothing is merged unless every shard succeeds.
    pub fn build_shards<S, F>(&self, shards: Vec<S>, build: F) -> Result<ParallelIndexingResult>
    where
        S: Send + 'static,
        F: Fn(S) -> Result<Indices> + Send + Sync + 'static,
    {
        let start = Instant::now();
        let shard_count = shards.len();
        info!(
            "Building {} shards on {} threads",
            shard_count,
            self.config.effective_threads()
        );

        let build = Arc::new(build);
        let aborted = Arc::new(AtomicBool::new(false));
        let (tx, rx) = unbounded();

        for (shard_index, shard) in shards.into_iter().enumerate() {
            let tx = tx.clone();
            let build = Arc::clone(&build);
            let aborted = Arc::clone(&aborted);
            let cancellation = self.cancellation.clone();

            self.thread_pool.spawn(move || {
                let outcome = if cancellation.is_cancelled() || aborted.load(Ordering::SeqCst) {
                    Err(BoolSearchError::cancelled(format!(
                        "shard {shard_index} abandoned"
                    )))
                } else {
                    let outcome = build(shard);
                    if outcome.is_err() {
                        aborted.store(true, Ordering::SeqCst);
                    }
                    outcome
                };
                let _ = tx.send((shard_index, outcome));
            });
        }

        // Drop the original sender so the receiver knows when all tasks are done
        drop(tx);

        let mut partials = Vec::with_capacity(shard_count);
        let mut failure: Option<BoolSearchError> = None;
        for (shard_index, outcome) in rx.iter() {
            match outcome {
                Ok(partial) => {
                    debug!(
                        "Shard {} done: {} terms",
                        shard_index,
                        partial.inverted.len()
                    );
                    partials.push(partial);
                }
                Err(e) => {
                    warn!("Shard {shard_index} failed: {e}");
                    // A real failure outranks the cancellations it triggered.
                    let replace = match &failure {
                        None => true,
                        Some(BoolSearchError::OperationCancelled(_)) => {
                            !matches!(e, BoolSearchError::OperationCancelled(_))
                        }
                        Some(_) => false,
                    };
                    if replace {
                        failure = Some(e);
                    }
                }
            }
        }

        if let Some(e) = failure {
            return Err(e);
        }
        if self.cancellation.is_cancelled() {
            return Err(BoolSearchError::cancelled("index build cancelled"));
        }

        let indices = self.merge(partials);
        let execution_time = start.elapsed();
        info!(
            "Built index with {} terms and {} bigrams in {:?}",
            indices.inverted.len(),
            indices.bigrams.len(),
            execution_time
        );

        Ok(ParallelIndexingResult {
            indices,
            shards_processed: shard_count,
            execution_time,
        })
    }

    fn merge(&self, partials: Vec<Indices>) -> Indices {
        match self.config.merge_strategy {
            MergeStrategy::Sequential => merge_indices(partials),
            MergeStrategy::Tree => self.thread_pool.install(|| {
                partials
                    .into_par_iter()
                    .reduce(Indices::default, |mut left, right| {
                        left.merge_from(right);
                        left
                    })
            }),
        }
    }
}

//! Command implementations for the boolsearch CLI.

use std::time::Instant;

use log::info;

use crate::analysis::{Tokenizer, TokenizerConfig};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::{RecordExtractor, collect_corpus_files, load_id_terms};
use crate::error::{BoolSearchError, Result};
use crate::index::builder::build_partial_indices;
use crate::parallel_index::{ParallelIndexConfig, ParallelIndexEngine};
use crate::query::{QueryEvaluator, QueryType};
use crate::storage::IndexStore;

/// Execute a CLI command.
pub fn execute_command(args: BoolSearchArgs) -> Result<()> {
    match &args.command {
        Command::Index(index_args) => build_index(index_args.clone(), &args),
        Command::Search(search_args) => search_index(search_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Build the indices from corpus files, one shard per file.
fn build_index(args: IndexArgs, cli_args: &BoolSearchArgs) -> Result<()> {
    let start_time = Instant::now();

    let files = collect_corpus_files(&args.corpus)?;
    if files.is_empty() {
        return Err(BoolSearchError::invalid_argument(
            "No corpus files found in the given paths",
        ));
    }
    info!("Indexing {} corpus files", files.len());

    let tokenizer = Tokenizer::new(TokenizerConfig::from_files(
        args.punctuations.as_deref(),
        args.stopwords.as_deref(),
    )?);
    let extractor = RecordExtractor::new()?;

    let mut config = match &args.config {
        Some(path) => ParallelIndexConfig::load(path)?,
        None => ParallelIndexConfig::default(),
    };
    if let Some(threads) = args.threads {
        config = config.with_thread_pool_size(threads);
    }
    let engine = ParallelIndexEngine::new(config)?;

    let corpus_files = files.len();
    let result = engine.build_shards(files, move |path| {
        let id_terms = load_id_terms(&path, &extractor, &tokenizer)?;
        build_partial_indices(&id_terms)
    })?;

    let store = IndexStore::new(&args.output);
    store.save(&result.indices)?;

    output_result(
        &IndexBuildResult {
            index_path: args.output.to_string_lossy().to_string(),
            corpus_files,
            documents: result.indices.inverted.document_count(),
            terms: result.indices.inverted.len(),
            bigrams: result.indices.bigrams.len(),
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Run one query against a persisted index.
fn search_index(args: SearchArgs, cli_args: &BoolSearchArgs) -> Result<()> {
    // Reject an unknown selector before any index is loaded.
    let query_type: QueryType = args.query_type.parse()?;

    let indices = IndexStore::new(&args.index_path).load()?;
    let evaluator = QueryEvaluator::from_indices(&indices);

    let start_time = Instant::now();
    let doc_ids = evaluator.evaluate(&args.query, query_type)?;
    let duration_ms = start_time.elapsed().as_millis() as u64;

    output_result(
        &SearchResults {
            query_type: query_type.to_string(),
            query: args.query,
            total_hits: doc_ids.len(),
            doc_ids,
            duration_ms,
        },
        cli_args,
    )
}

/// Show statistics of a persisted index.
fn show_stats(args: StatsArgs, cli_args: &BoolSearchArgs) -> Result<()> {
    let indices = IndexStore::new(&args.index_path).load()?;

    output_result(
        &IndexStats {
            index_path: args.index_path.to_string_lossy().to_string(),
            documents: indices.inverted.document_count(),
            terms: indices.inverted.len(),
            postings: indices.inverted.value_count(),
            bigrams: indices.bigrams.len(),
        },
        cli_args,
    )
}

//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{BoolSearchArgs, OutputFormat};
use crate::error::Result;
use crate::index::DocId;

/// Result structure for index construction.
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexBuildResult {
    pub index_path: String,
    pub corpus_files: usize,
    pub documents: usize,
    pub terms: usize,
    pub bigrams: usize,
    pub duration_ms: u64,
}

/// Result structure for search operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub query_type: String,
    pub query: String,
    pub doc_ids: Vec<DocId>,
    pub total_hits: usize,
    pub duration_ms: u64,
}

/// Index statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexStats {
    pub index_path: String,
    pub documents: usize,
    pub terms: usize,
    pub postings: usize,
    pub bigrams: usize,
}

/// Plain-text rendering of a command result.
pub trait HumanOutput {
    /// Lines printed in human mode. Detail lines are only shown when verbose.
    fn render(&self, verbosity: u8) -> Vec<String>;
}

impl HumanOutput for IndexBuildResult {
    fn render(&self, verbosity: u8) -> Vec<String> {
        let mut lines = vec![format!(
            "Indexed {} documents from {} files into {}",
            self.documents, self.corpus_files, self.index_path
        )];
        if verbosity > 1 {
            lines.push(format!("Terms: {}", self.terms));
            lines.push(format!("Bigrams: {}", self.bigrams));
            lines.push(format!("Duration: {}ms", self.duration_ms));
        }
        lines
    }
}

impl HumanOutput for SearchResults {
    fn render(&self, verbosity: u8) -> Vec<String> {
        let mut lines = Vec::new();
        if verbosity > 1 {
            lines.push(format!(
                "{} query '{}': {} hits in {}ms",
                self.query_type, self.query, self.total_hits, self.duration_ms
            ));
        }
        lines.push(format!("{:?}", self.doc_ids));
        lines
    }
}

impl HumanOutput for IndexStats {
    fn render(&self, _verbosity: u8) -> Vec<String> {
        vec![
            format!("Index: {}", self.index_path),
            format!("Documents: {}", self.documents),
            format!("Terms: {}", self.terms),
            format!("Postings: {}", self.postings),
            format!("Bigrams: {}", self.bigrams),
        ]
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(result: &T, args: &BoolSearchArgs) -> Result<()> {
    println!("{}", format_result(result, args)?);
    Ok(())
}

/// Render a result in the specified format without printing it.
pub fn format_result<T: Serialize + HumanOutput>(result: &T, args: &BoolSearchArgs) -> Result<String> {
    let text = match args.output_format {
        OutputFormat::Human => result.render(args.verbosity()).join("\n"),
        OutputFormat::Json if args.pretty => serde_json::to_string_pretty(result)?,
        OutputFormat::Json => serde_json::to_string(result)?,
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn search_results() -> SearchResults {
        SearchResults {
            query_type: "conjunctive".to_string(),
            query: "cat sat".to_string(),
            doc_ids: vec![1, 2],
            total_hits: 2,
            duration_ms: 0,
        }
    }

    #[test]
    fn test_human_search_output_is_id_list() {
        let args = BoolSearchArgs::parse_from(["boolsearch", "stats", "out"]);
        assert_eq!(format_result(&search_results(), &args).unwrap(), "[1, 2]");
    }

    #[test]
    fn test_json_output() {
        let args = BoolSearchArgs::parse_from(["boolsearch", "-f", "json", "stats", "out"]);
        let text = format_result(&search_results(), &args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["doc_ids"], serde_json::json!([1, 2]));
        assert_eq!(value["total_hits"], 2);
    }
}

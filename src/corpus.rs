//! Record extraction for Reuters-21578 style SGML corpora.
//!
//! A corpus file is a sequence of `<REUTERS ... NEWID="n">` records. The
//! document text of a record is its title followed by its body, both taken
//! from inside the `<TEXT>` element.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use regex::Regex;

use crate::analysis::Tokenizer;
use crate::error::{BoolSearchError, Result};
use crate::index::{DocId, IdTerms};

/// File extension of corpus files picked up from directories.
pub const CORPUS_EXTENSION: &str = "sgm";

/// Pulls documents out of raw SGML text.
#[derive(Debug, Clone)]
pub struct RecordExtractor {
    record: Regex,
    new_id: Regex,
    text: Regex,
    title: Regex,
    body: Regex,
}

impl RecordExtractor {
    /// Create an extractor with the Reuters record layout.
    pub fn new() -> Result<Self> {
        Ok(RecordExtractor {
            record: compile(r"(?s)<REUTERS.*?</REUTERS>")?,
            new_id: compile(r#"NEWID="(\d*)""#)?,
            text: compile(r"(?s)<TEXT[^>]*>(.*?)</TEXT>")?,
            title: compile(r"(?s)<TITLE>(.*?)</TITLE>")?,
            body: compile(r"(?s)<BODY>(.*?)</BODY>")?,
        })
    }

    /// Iterate over the raw records of a corpus text.
    pub fn records<'a>(&'a self, raw: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.record.find_iter(raw).map(|m| m.as_str())
    }

    /// Extract the id and the `title + " " + body` text of one record.
    ///
    /// A record without a numeric `NEWID` attribute is an error; a missing
    /// title, body or text element just contributes nothing.
    pub fn extract_document(&self, record: &str) -> Result<(DocId, String)> {
        let id = self
            .new_id
            .captures(record)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<DocId>().ok())
            .ok_or_else(|| {
                let head: String = record.chars().take(80).collect();
                BoolSearchError::corpus(format!("ID cannot be found in record: {head}"))
            })?;

        let text = capture(&self.text, record).trim();
        let title = capture(&self.title, text).trim();
        let body = capture(&self.body, text).trim();

        Ok((id, format!("{title} {body}").trim().to_string()))
    }

    /// Extract every document of a corpus text, in file order.
    pub fn extract_documents(&self, raw: &str) -> Result<Vec<(DocId, String)>> {
        self.records(raw)
            .map(|record| self.extract_document(record))
            .collect()
    }

    /// Extract every document and tokenize it into its set of terms.
    ///
    /// If an id occurs twice, the later record wins.
    pub fn extract_id_terms(&self, raw: &str, tokenizer: &Tokenizer) -> Result<IdTerms> {
        let mut id_terms = IdTerms::new();
        for (id, text) in self.extract_documents(raw)? {
            if id_terms.insert(id, tokenizer.terms(&text)).is_some() {
                warn!("Document id {id} appears more than once; keeping the last record");
            }
        }
        Ok(id_terms)
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| BoolSearchError::corpus(format!("Invalid record pattern: {e}")))
}

fn capture<'a>(pattern: &Regex, text: &'a str) -> &'a str {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map_or("", |m| m.as_str())
}

/// Read a file as Latin-1 text. Every byte maps to exactly one char.
pub fn read_latin1<P: AsRef<Path>>(path: P) -> Result<String> {
    let bytes = fs::read(path.as_ref())?;
    Ok(bytes.iter().map(|&b| b as char).collect())
}

/// Read, extract and tokenize one corpus file.
pub fn load_id_terms<P: AsRef<Path>>(
    path: P,
    extractor: &RecordExtractor,
    tokenizer: &Tokenizer,
) -> Result<IdTerms> {
    let path = path.as_ref();
    let raw = read_latin1(path)?;
    let id_terms = extractor.extract_id_terms(&raw, tokenizer)?;
    if id_terms.is_empty() {
        warn!("No records found in {}", path.display());
    } else {
        debug!("Extracted {} documents from {}", id_terms.len(), path.display());
    }
    Ok(id_terms)
}

/// Expand a list of files and directories into corpus files.
///
/// Files are kept as given. Directories contribute their `*.sgm` entries,
/// sorted by name.
pub fn collect_corpus_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut entries = Vec::new();
            for entry in fs::read_dir(path)? {
                let entry_path = entry?.path();
                let is_corpus = entry_path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(CORPUS_EXTENSION));
                if entry_path.is_file() && is_corpus {
                    entries.push(entry_path);
                }
            }
            entries.sort();
            files.extend(entries);
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            return Err(BoolSearchError::corpus(format!(
                "Corpus path not found: {}",
                path.display()
            )));
        }
    }
    Ok(files)
}

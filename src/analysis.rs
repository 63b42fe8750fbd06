//! Text analysis: turning document text into a set of index terms.
//!
//! The pipeline is punctuation stripping, case folding, whitespace
//! splitting, and stop word removal. The bigram sentinel is always
//! stripped, so every term produced here is safe to hand to the index
//! builder.
//!
//! # Examples
//!
//! ```
//! use boolsearch::analysis::Tokenizer;
//!
//! let tokenizer = Tokenizer::default();
//! let tokens = tokenizer.tokenize("The Cat sat, on the MAT!");
//! assert_eq!(tokens, vec!["cat", "sat", "mat"]);
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use crate::bigram::SENTINEL;
use crate::error::{BoolSearchError, Result};

/// Default English stop words list.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// Default punctuation strings, replaced by a space before splitting.
///
/// Markup entities come first so their `&` and `;` are not split off alone.
const DEFAULT_PUNCTUATIONS: &[&str] = &[
    "&lt;", "&gt;", "&amp;", "&#3;", "!", "\"", "#", "$", "%", "&", "'", "(", ")", "*", "+", ",",
    "-", ".", "/", ":", ";", "<", "=", ">", "?", "@", "[", "\\", "]", "^", "_", "`", "{", "|",
    "}", "~",
];

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// Word lists driving the [`Tokenizer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Strings replaced by whitespace, in order.
    pub punctuations: Vec<String>,

    /// Words dropped after case folding.
    pub stop_words: Vec<String>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            punctuations: DEFAULT_PUNCTUATIONS.iter().map(|&s| s.to_string()).collect(),
            stop_words: DEFAULT_ENGLISH_STOP_WORDS.iter().map(|&s| s.to_string()).collect(),
        }
    }
}

impl TokenizerConfig {
    /// Build a configuration from optional word files.
    ///
    /// Each file holds whitespace-separated entries. A missing path keeps the
    /// built-in list.
    pub fn from_files(
        punctuations_path: Option<&Path>,
        stop_words_path: Option<&Path>,
    ) -> Result<Self> {
        let mut config = Self::default();
        if let Some(path) = punctuations_path {
            config.punctuations = read_word_list(path)?;
        }
        if let Some(path) = stop_words_path {
            config.stop_words = read_word_list(path)?;
        }
        Ok(config)
    }
}

fn read_word_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| {
        BoolSearchError::analysis(format!("Cannot read word list {}: {e}", path.display()))
    })?;
    Ok(content.split_whitespace().map(str::to_string).collect())
}

/// Splits text into normalized terms.
#[derive(Clone, Debug)]
pub struct Tokenizer {
    punctuations: Arc<Vec<String>>,
    stop_words: Arc<HashSet<String>>,
}

impl Tokenizer {
    /// Create a tokenizer from a configuration.
    pub fn new(config: TokenizerConfig) -> Self {
        let punctuations = config
            .punctuations
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect();
        let stop_words = config
            .stop_words
            .into_iter()
            .map(|w| w.to_lowercase())
            .collect();

        Tokenizer {
            punctuations: Arc::new(punctuations),
            stop_words: Arc::new(stop_words),
        }
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Tokenize text into terms, in order of appearance, duplicates kept.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut text = text.to_string();
        for punctuation in self.punctuations.iter() {
            if text.contains(punctuation.as_str()) {
                text = text.replace(punctuation.as_str(), " ");
            }
        }
        let text = text.replace(SENTINEL, " ").to_lowercase();

        text.split_whitespace()
            .filter(|word| !self.stop_words.contains(*word))
            .map(str::to_string)
            .collect()
    }

    /// The distinct terms of a text.
    pub fn terms(&self, text: &str) -> HashSet<String> {
        self.tokenize(text).into_iter().collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(TokenizerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_default_tokenizer() {
        let tokenizer = Tokenizer::default();
        assert_eq!(
            tokenizer.tokenize("U.S. Oil-prices ROSE &lt;XON> today"),
            vec!["u", "s", "oil", "prices", "rose", "xon", "today"]
        );
        assert!(tokenizer.is_stop_word("the"));
        assert!(!tokenizer.is_stop_word("oil"));
    }

    #[test]
    fn test_sentinel_never_survives() {
        let config = TokenizerConfig {
            punctuations: Vec::new(),
            stop_words: Vec::new(),
        };
        let tokenizer = Tokenizer::new(config);
        assert_eq!(tokenizer.tokenize("us$ 5$bn"), vec!["us", "5", "bn"]);
    }

    #[test]
    fn test_terms_are_distinct() {
        let tokenizer = Tokenizer::default();
        let terms = tokenizer.terms("sat sat SAT cat");
        assert_eq!(terms.len(), 2);
        assert!(terms.contains("sat"));
    }

    #[test]
    fn test_empty_punctuation_is_ignored() {
        let config = TokenizerConfig {
            punctuations: vec![String::new(), ",".to_string()],
            stop_words: Vec::new(),
        };
        let tokenizer = Tokenizer::new(config);
        assert_eq!(tokenizer.tokenize("a,b"), vec!["a", "b"]);
    }

    #[test]
    fn test_config_from_files() {
        let mut punctuations = NamedTempFile::new().unwrap();
        writeln!(punctuations, ", .").unwrap();
        let mut stop_words = NamedTempFile::new().unwrap();
        writeln!(stop_words, "Oil\nthe").unwrap();

        let config =
            TokenizerConfig::from_files(Some(punctuations.path()), Some(stop_words.path())).unwrap();
        assert_eq!(config.punctuations, vec![",", "."]);

        let tokenizer = Tokenizer::new(config);
        assert_eq!(tokenizer.tokenize("The oil, prices."), vec!["prices"]);
    }

    #[test]
    fn test_missing_word_file() {
        let result = TokenizerConfig::from_files(Some(Path::new("/nonexistent/punct.txt")), None);
        assert!(matches!(result, Err(BoolSearchError::Analysis(_))));
    }
}

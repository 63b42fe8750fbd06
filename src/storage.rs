//! On-disk persistence of published indices.
//!
//! An index directory holds two JSON files: `index.json` mapping each term
//! to its sorted list of document ids, and `bigrams.json` mapping each
//! bigram to its sorted list of terms. Keys are written in sorted order so
//! the same index always produces the same bytes.
//!
//! # Example
//!
//! ```no_run
//! use boolsearch::storage::IndexStore;
//!
//! # fn main() -> boolsearch::error::Result<()> {
//! let store = IndexStore::new("/tmp/reuters-index");
//! let indices = store.load()?;
//! println!("{} terms", indices.inverted.len());
//! # Ok(())
//! # }
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{BoolSearchError, Result};
use crate::index::{Indices, SetIndex};

/// File name of the inverted index inside an index directory.
pub const INVERTED_INDEX_FILE: &str = "index.json";

/// File name of the bigram index inside an index directory.
pub const BIGRAM_INDEX_FILE: &str = "bigrams.json";

/// A directory holding a persisted pair of indices.
#[derive(Debug, Clone)]
pub struct IndexStore {
    directory: PathBuf,
}

impl IndexStore {
    /// Create a store rooted at `directory`. Nothing is touched on disk yet.
    pub fn new<P: Into<PathBuf>>(directory: P) -> Self {
        IndexStore {
            directory: directory.into(),
        }
    }

    /// The index directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Whether both index files are present.
    pub fn exists(&self) -> bool {
        self.inverted_path().is_file() && self.bigram_path().is_file()
    }

    /// Path of the inverted index file.
    pub fn inverted_path(&self) -> PathBuf {
        self.directory.join(INVERTED_INDEX_FILE)
    }

    /// Path of the bigram index file.
    pub fn bigram_path(&self) -> PathBuf {
        self.directory.join(BIGRAM_INDEX_FILE)
    }

    /// Write both indices, creating the directory if needed.
    ///
    /// Each file is written to a temporary name and then renamed, so a crash
    /// never leaves a truncated index behind.
    pub fn save(&self, indices: &Indices) -> Result<()> {
        fs::create_dir_all(&self.directory)?;
        write_index(&self.inverted_path(), &indices.inverted)?;
        write_index(&self.bigram_path(), &indices.bigrams)?;
        info!(
            "Saved {} terms and {} bigrams to {}",
            indices.inverted.len(),
            indices.bigrams.len(),
            self.directory.display()
        );
        Ok(())
    }

    /// Read both indices back.
    pub fn load(&self) -> Result<Indices> {
        if !self.exists() {
            return Err(BoolSearchError::storage(format!(
                "No index found in {} (expected {} and {})",
                self.directory.display(),
                INVERTED_INDEX_FILE,
                BIGRAM_INDEX_FILE
            )));
        }
        let inverted = read_index(&self.inverted_path())?;
        let bigrams = read_index(&self.bigram_path())?;
        info!(
            "Loaded {} terms and {} bigrams from {}",
            inverted.len(),
            bigrams.len(),
            self.directory.display()
        );
        Ok(Indices::new(inverted, bigrams))
    }
}

fn write_index<V: Ord + Serialize>(path: &Path, index: &SetIndex<V>) -> Result<()> {
    let sorted: BTreeMap<&str, &BTreeSet<V>> = index.iter().collect();

    let tmp_path = path.with_extension("json.tmp");
    let mut writer = BufWriter::new(File::create(&tmp_path)?);
    serde_json::to_writer(&mut writer, &sorted)?;
    writer.flush()?;
    drop(writer);

    fs::rename(&tmp_path, path)?;
    Ok(())
}

fn read_index<V: Ord + DeserializeOwned>(path: &Path) -> Result<SetIndex<V>> {
    let reader = BufReader::new(File::open(path)?);
    let entries: HashMap<String, BTreeSet<V>> =
        serde_json::from_reader(reader).map_err(|e| {
            BoolSearchError::storage(format!("Corrupt index file {}: {e}", path.display()))
        })?;
    Ok(SetIndex::from(entries))
}

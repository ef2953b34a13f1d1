//! Corpus loading utilities
//!
//! `CorpusLoader` reads corpus files from disk and feeds their text to the parser.
//! It is the only part of the crate that touches the filesystem.
//!
//! # Example
//!
//! ```rust,ignore
//! use ssf::ssf::config::load_defaults;
//! use ssf::ssf::loader::CorpusLoader;
//!
//! let config = load_defaults()?;
//! let corpus = CorpusLoader::new(config.corpus).load("corpus/eng")?;
//! for document in corpus.documents() {
//!     println!("{} sentences", document.sentences().len());
//! }
//! ```

use crate::ssf::ast::{Corpus, IdGenerator};
use crate::ssf::config::CorpusConfig;
use crate::ssf::parsing::{parse_corpus, SourceFile};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Error that can occur when loading a corpus
#[derive(Debug, Clone, PartialEq)]
pub enum LoaderError {
    /// The corpus path does not exist
    NotFound(PathBuf),
    /// IO error while reading the corpus path
    Io { path: PathBuf, message: String },
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderError::NotFound(path) => write!(f, "Path not found: {}", path.display()),
            LoaderError::Io { path, message } => {
                write!(f, "IO error at {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for LoaderError {}

impl LoaderError {
    fn io(path: &Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            LoaderError::NotFound(path.to_path_buf())
        } else {
            LoaderError::Io {
                path: path.to_path_buf(),
                message: err.to_string(),
            }
        }
    }
}

/// Reads corpus files according to a [`CorpusConfig`]
#[derive(Debug, Clone)]
pub struct CorpusLoader {
    config: CorpusConfig,
}

impl CorpusLoader {
    pub fn new(config: CorpusConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CorpusConfig {
        &self.config
    }

    /// Load and parse the corpus at `path` (a directory or a single file)
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Corpus, LoaderError> {
        self.load_with(path, &IdGenerator::new())
    }

    /// Like [`CorpusLoader::load`], drawing uids from a shared generator
    pub fn load_with(
        &self,
        path: impl AsRef<Path>,
        ids: &IdGenerator,
    ) -> Result<Corpus, LoaderError> {
        let path = path.as_ref();
        let root = fs::canonicalize(path).map_err(|err| LoaderError::io(path, err))?;
        let sources = self.read_sources(&root)?;
        debug!(root = %root.display(), files = sources.len(), "parsing corpus");
        Ok(parse_corpus(root, sources, self.config.mode, ids))
    }

    /// Read the text of every corpus file at `path`, in file name order
    ///
    /// A single file is read as is. For a directory, its direct entries are read,
    /// skipping subdirectories, hidden files (unless configured) and files whose
    /// extension is not listed. Files that cannot be read are skipped with a
    /// warning; invalid UTF-8 is decoded lossily.
    pub fn read_sources(&self, path: &Path) -> Result<Vec<SourceFile>, LoaderError> {
        let metadata = fs::metadata(path).map_err(|err| LoaderError::io(path, err))?;
        if metadata.is_file() {
            let content = read_text(path).map_err(|err| LoaderError::io(path, err))?;
            return Ok(vec![SourceFile::new(path, content)]);
        }

        let mut entries: Vec<PathBuf> = fs::read_dir(path)
            .map_err(|err| LoaderError::io(path, err))?
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.path()),
                Err(err) => {
                    warn!(dir = %path.display(), error = %err, "skipping unreadable entry");
                    None
                }
            })
            .filter(|entry| entry.is_file() && self.accepts(entry))
            .collect();
        entries.sort();

        let mut sources = Vec::with_capacity(entries.len());
        for entry in entries {
            match read_text(&entry) {
                Ok(content) => sources.push(SourceFile::new(entry, content)),
                Err(err) => warn!(path = %entry.display(), error = %err, "skipping unreadable file"),
            }
        }
        Ok(sources)
    }

    fn accepts(&self, path: &Path) -> bool {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        if !self.config.include_hidden && name.starts_with('.') {
            return false;
        }
        if self.config.extensions.is_empty() {
            return true;
        }
        path.extension()
            .map(|ext| ext.to_string_lossy())
            .is_some_and(|ext| self.config.extensions.iter().any(|e| *e == ext))
    }
}

fn read_text(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8(bytes).unwrap_or_else(|err| {
        warn!(path = %path.display(), "file is not valid UTF-8, decoding lossily");
        String::from_utf8_lossy(err.as_bytes()).into_owned()
    }))
}

//! Corpus assembly
//!
//! Turns file contents handed over by the loader into documents. Each file is
//! parsed on its own: wrapped documents are always read, and in lax mode a file
//! with no wrapped document at all is read as one loose document.

use super::document::{find_wrapped_documents, parse_loose_document, parse_wrapped_document};
use crate::ssf::ast::{Corpus, Document, EntityKind, IdGenerator};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// How documents are located inside a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorpusMode {
    /// Wrapped documents, plus a loose document for files without any wrapper
    #[default]
    Lax,
    /// Wrapped documents only
    Strict,
}

impl FromStr for CorpusMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lax" => Ok(CorpusMode::Lax),
            "strict" => Ok(CorpusMode::Strict),
            other => Err(format!("unknown corpus mode '{}'", other)),
        }
    }
}

impl fmt::Display for CorpusMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusMode::Lax => write!(f, "lax"),
            CorpusMode::Strict => write!(f, "strict"),
        }
    }
}

/// The content of one corpus file, already decoded to text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub content: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Parse the documents of one file
pub fn parse_file(source: &SourceFile, mode: CorpusMode, ids: &IdGenerator) -> Vec<Document> {
    let wrapped = find_wrapped_documents(&source.content);
    let mut documents = Vec::new();

    for block in &wrapped {
        match parse_wrapped_document(block, &source.path, ids) {
            Ok(document) => documents.push(document),
            Err(err) => debug!(
                path = %source.path.display(),
                error = %err,
                "dropping document"
            ),
        }
    }

    if mode == CorpusMode::Lax && wrapped.is_empty() {
        match parse_loose_document(&source.content, &source.path, ids) {
            Ok(document) => documents.push(document),
            Err(err) => debug!(
                path = %source.path.display(),
                error = %err,
                "no sentences in loose document"
            ),
        }
    }

    documents
}

/// Build a corpus from the files under `root`
pub fn parse_corpus<I>(
    root: impl Into<PathBuf>,
    sources: I,
    mode: CorpusMode,
    ids: &IdGenerator,
) -> Corpus
where
    I: IntoIterator<Item = SourceFile>,
{
    let documents = sources
        .into_iter()
        .flat_map(|source| parse_file(&source, mode, ids))
        .collect();
    Corpus::new(ids.next(EntityKind::Corpus), root, documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENTENCE: &str = "<Sentence id=\"1\">\n1\t((\tNP\n1.1\tdog\tNN\n\t))\n</Sentence>";

    fn wrapped(id: &str) -> String {
        format!("<document id=\"{}\">\n{}\n</document>\n", id, SENTENCE)
    }

    #[test]
    fn test_lax_mode_reads_loose_files() {
        let ids = IdGenerator::new();
        let source = SourceFile::new("/c/a.ssf", SENTENCE);
        let documents = parse_file(&source, CorpusMode::Lax, &ids);
        assert_eq!(documents.len(), 1);
        assert!(documents[0].is_loose());
    }

    #[test]
    fn test_strict_mode_ignores_loose_files() {
        let ids = IdGenerator::new();
        let source = SourceFile::new("/c/a.ssf", SENTENCE);
        assert!(parse_file(&source, CorpusMode::Strict, &ids).is_empty());
    }

    #[test]
    fn test_wrapped_documents_suppress_loose_reading() {
        let ids = IdGenerator::new();
        let content = format!("{}{}{}", wrapped("a"), SENTENCE, wrapped("b"));
        let source = SourceFile::new("/c/a.ssf", content);
        let documents = parse_file(&source, CorpusMode::Lax, &ids);
        let labels: Vec<_> = documents.iter().map(Document::label).collect();
        assert_eq!(labels, vec!["a", "b"]);
    }

    #[test]
    fn test_corpus_keeps_only_documents_with_sentences() {
        let ids = IdGenerator::new();
        let sources = vec![
            SourceFile::new("/c/a.ssf", wrapped("a")),
            SourceFile::new("/c/b.ssf", "nothing to see"),
            SourceFile::new("/c/c.ssf", SENTENCE),
        ];
        let corpus = parse_corpus("/c", sources, CorpusMode::Lax, &ids);
        assert_eq!(corpus.documents().len(), 2);
        assert_eq!(corpus.documents()[1].path(), std::path::Path::new("/c/c.ssf"));
        assert_eq!(corpus.sentences().count(), 2);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("strict".parse::<CorpusMode>(), Ok(CorpusMode::Strict));
        assert_eq!(CorpusMode::Lax.to_string(), "lax");
        assert!("loose".parse::<CorpusMode>().is_err());
    }
}

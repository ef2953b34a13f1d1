//! Corpus element
//!
//! The root of the tree: the documents found under one corpus location.

use super::super::traits::{AstNode, Visitor};
use super::document::Document;
use super::sentence::Sentence;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Corpus {
    uid: usize,
    path: PathBuf,
    documents: Vec<Document>,
}

impl Corpus {
    pub fn new(uid: usize, path: impl Into<PathBuf>, documents: Vec<Document>) -> Self {
        Self {
            uid,
            path: path.into(),
            documents,
        }
    }

    pub fn uid(&self) -> usize {
        self.uid
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Every sentence of every document, in order
    pub fn sentences(&self) -> impl Iterator<Item = &Sentence> {
        self.documents.iter().flat_map(|d| d.sentences().iter())
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn same_content(&self, other: &Corpus) -> bool {
        self.documents.len() == other.documents.len()
            && self
                .documents
                .iter()
                .zip(&other.documents)
                .all(|(a, b)| a.same_content(b))
    }
}

impl AstNode for Corpus {
    fn node_type(&self) -> &'static str {
        "Corpus"
    }

    fn display_label(&self) -> String {
        format!("corpus {}", self.path.display())
    }

    fn uid(&self) -> usize {
        self.uid
    }

    fn child_nodes(&self) -> Vec<&dyn AstNode> {
        self.documents.iter().map(|d| d as &dyn AstNode).collect()
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_corpus(self);
        for document in &self.documents {
            document.accept(visitor);
        }
    }
}

impl fmt::Display for Corpus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Corpus({}, {} documents)",
            self.path.display(),
            self.documents.len()
        )
    }
}

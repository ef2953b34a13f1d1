//! Document element
//!
//! Either a `<document id="...">` wrapped block, or, for files without any wrapper,
//! a loose document holding every sentence found in the file. Loose documents have
//! no id and report [`LOOSE_DOCUMENT_ID`] as their label.

use super::super::traits::{AstNode, Visitor};
use super::sentence::Sentence;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Label reported by documents that had no `<document>` wrapper
pub const LOOSE_DOCUMENT_ID: &str = "null_lax";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    uid: usize,
    id: Option<String>,
    path: PathBuf,
    sentences: Vec<Sentence>,
}

impl Document {
    pub fn new(
        uid: usize,
        id: Option<String>,
        path: impl Into<PathBuf>,
        sentences: Vec<Sentence>,
    ) -> Self {
        Self {
            uid,
            id,
            path: path.into(),
            sentences,
        }
    }

    pub fn uid(&self) -> usize {
        self.uid
    }

    /// The id from the `<document>` wrapper, `None` for loose documents
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The id, or the loose-document sentinel
    pub fn label(&self) -> &str {
        self.id.as_deref().unwrap_or(LOOSE_DOCUMENT_ID)
    }

    pub fn is_loose(&self) -> bool {
        self.id.is_none()
    }

    /// The file this document was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn same_content(&self, other: &Document) -> bool {
        self.id == other.id
            && self.sentences.len() == other.sentences.len()
            && self
                .sentences
                .iter()
                .zip(&other.sentences)
                .all(|(a, b)| a.same_content(b))
    }
}

impl AstNode for Document {
    fn node_type(&self) -> &'static str {
        "Document"
    }

    fn display_label(&self) -> String {
        format!("document {}", self.label())
    }

    fn uid(&self) -> usize {
        self.uid
    }

    fn child_nodes(&self) -> Vec<&dyn AstNode> {
        self.sentences.iter().map(|s| s as &dyn AstNode).collect()
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_document(self);
        for sentence in &self.sentences {
            sentence.accept(visitor);
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Document({}, {} sentences)",
            self.label(),
            self.sentences.len()
        )
    }
}

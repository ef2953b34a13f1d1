//! Sentence element
//!
//! A `<Sentence id="...">` block owning its top-level chunks. The id comes from the
//! source text and may be empty.

use super::super::traits::{AstNode, Visitor};
use super::chunk::Chunk;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which chunks [`Sentence::chunks`] returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkMode {
    /// Top-level chunks only
    #[default]
    Outer,
    /// Chunks without nested chunks, at any depth
    Inner,
    /// Every chunk at every depth
    All,
}

impl FromStr for ChunkMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "outer" => Ok(ChunkMode::Outer),
            "inner" => Ok(ChunkMode::Inner),
            "all" => Ok(ChunkMode::All),
            other => Err(format!("unknown chunk mode '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sentence {
    uid: usize,
    id: String,
    chunks: Vec<Chunk>,
}

impl Sentence {
    pub fn new(uid: usize, id: impl Into<String>, chunks: Vec<Chunk>) -> Self {
        Self {
            uid,
            id: id.into(),
            chunks,
        }
    }

    pub fn uid(&self) -> usize {
        self.uid
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Top-level chunks in source order
    pub fn outer_chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Chunks selected by `mode`, in source order
    ///
    /// Nested chunks are reached with an explicit stack, so arbitrarily deep
    /// nesting never recurses. `Inner` and `All` visit chunks in pre-order, which
    /// is the order their opening lines appear in the source: `1, 1.2, 2` for an
    /// outer `1` holding `1.2`. `All` deliberately does not use the reversed-stack
    /// order `1.2, 1, 2`.
    pub fn chunks(&self, mode: ChunkMode) -> Vec<&Chunk> {
        if mode == ChunkMode::Outer {
            return self.chunks.iter().collect();
        }

        let mut selected = Vec::new();
        let mut stack: Vec<&Chunk> = self.chunks.iter().rev().collect();
        while let Some(chunk) = stack.pop() {
            let nested: Vec<&Chunk> = chunk.nested_chunks().collect();
            if mode == ChunkMode::All || nested.is_empty() {
                selected.push(chunk);
            }
            stack.extend(nested.into_iter().rev());
        }
        selected
    }

    /// All tokens of the sentence in source order
    pub fn tokens(&self) -> Vec<&super::token::Token> {
        self.chunks.iter().flat_map(Chunk::tokens).collect()
    }

    /// Equality on content, ignoring machine uids
    pub fn same_content(&self, other: &Sentence) -> bool {
        self.id == other.id
            && self.chunks.len() == other.chunks.len()
            && self
                .chunks
                .iter()
                .zip(&other.chunks)
                .all(|(a, b)| a.same_content(b))
    }
}

impl AstNode for Sentence {
    fn node_type(&self) -> &'static str {
        "Sentence"
    }

    fn display_label(&self) -> String {
        format!("sentence {}", self.id)
    }

    fn uid(&self) -> usize {
        self.uid
    }

    fn child_nodes(&self) -> Vec<&dyn AstNode> {
        self.chunks.iter().map(|c| c as &dyn AstNode).collect()
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_sentence(self);
        for chunk in &self.chunks {
            chunk.accept(visitor);
        }
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sentence({}, {} chunks)", self.id, self.chunks.len())
    }
}

//! Chunk element
//!
//! A bracket-delimited group of tokens and nested chunks:
//!
//! ```text
//! 1	((	NP	<fs name='NP'>
//! 1.1	the	DT	<fs af='the,det,,,,,,'>
//! 1.2	((	JJP	<fs name='JJP'>
//! 1.2.1	big	JJ	<fs af='big,adj,,,,,,'>
//! 	))
//! 1.3	dog	NN	<fs af='dog,n,m,sg,3,d,0,0'>
//! 	))
//! ```
//!
//! The chunk number is kept as text (`1.2` is an identifier, not a number).
//! A chunk in the tree always has at least one child.

use super::super::traits::{AstNode, Visitor};
use super::chunk_item::ChunkItem;
use super::feature_structure::FeatureStructure;
use super::token::Token;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chunk {
    uid: usize,
    number: String,
    tag: String,
    features: FeatureStructure,
    children: Vec<ChunkItem>,
}

impl Chunk {
    pub fn new(
        uid: usize,
        number: impl Into<String>,
        tag: impl Into<String>,
        features: FeatureStructure,
        children: Vec<ChunkItem>,
    ) -> Self {
        Self {
            uid,
            number: number.into(),
            tag: tag.into(),
            features,
            children,
        }
    }

    pub fn uid(&self) -> usize {
        self.uid
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn features(&self) -> &FeatureStructure {
        &self.features
    }

    /// Tokens and nested chunks in source order
    pub fn children(&self) -> &[ChunkItem] {
        &self.children
    }

    /// All tokens under this chunk, depth-first, in source order
    pub fn tokens(&self) -> Vec<&Token> {
        let mut tokens = Vec::new();
        self.collect_tokens(&mut tokens);
        tokens
    }

    fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a Token>) {
        for child in &self.children {
            match child {
                ChunkItem::Token(token) => out.push(token),
                ChunkItem::Chunk(chunk) => chunk.collect_tokens(out),
            }
        }
    }

    /// Direct nested chunks
    pub fn nested_chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.children.iter().filter_map(ChunkItem::as_chunk)
    }

    /// A leaf chunk has no nested chunks
    pub fn is_leaf(&self) -> bool {
        !self.children.iter().any(ChunkItem::is_chunk)
    }

    /// Equality on content, ignoring machine uids at every depth
    pub fn same_content(&self, other: &Chunk) -> bool {
        self.number == other.number
            && self.tag == other.tag
            && self.features == other.features
            && self.children.len() == other.children.len()
            && self
                .children
                .iter()
                .zip(&other.children)
                .all(|pair| match pair {
                    (ChunkItem::Token(a), ChunkItem::Token(b)) => a.same_content(b),
                    (ChunkItem::Chunk(a), ChunkItem::Chunk(b)) => a.same_content(b),
                    _ => false,
                })
    }
}

impl AstNode for Chunk {
    fn node_type(&self) -> &'static str {
        "Chunk"
    }

    fn display_label(&self) -> String {
        format!("{} {}", self.number, self.tag)
    }

    fn uid(&self) -> usize {
        self.uid
    }

    fn child_nodes(&self) -> Vec<&dyn AstNode> {
        self.children.iter().map(ChunkItem::as_node).collect()
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_chunk(self);
        for child in &self.children {
            child.accept(visitor);
        }
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chunk({} {}, {} items)",
            self.number,
            self.tag,
            self.children.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(uid: usize, value: &str) -> Token {
        Token::new(uid, uid.to_string(), value, "NN", FeatureStructure::new())
    }

    #[test]
    fn test_tokens_flatten_depth_first() {
        let inner = Chunk::new(
            1,
            "1.2",
            "JJP",
            FeatureStructure::new(),
            vec![token(1, "big").into()],
        );
        let outer = Chunk::new(
            0,
            "1",
            "NP",
            FeatureStructure::new(),
            vec![token(0, "the").into(), inner.into(), token(2, "dog").into()],
        );

        let values: Vec<_> = outer.tokens().iter().map(|t| t.value()).collect();
        assert_eq!(values, vec!["the", "big", "dog"]);
        assert!(!outer.is_leaf());
        assert_eq!(outer.nested_chunks().count(), 1);
        assert!(outer.nested_chunks().all(Chunk::is_leaf));
    }
}

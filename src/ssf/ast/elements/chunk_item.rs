//! Chunk item
//!
//! A chunk's children are an ordered mix of tokens and nested chunks. `ChunkItem`
//! is the closed sum of the two.

use super::super::traits::{AstNode, Visitor};
use super::chunk::Chunk;
use super::token::Token;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ChunkItem {
    Token(Token),
    Chunk(Chunk),
}

impl ChunkItem {
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            ChunkItem::Token(token) => Some(token),
            ChunkItem::Chunk(_) => None,
        }
    }

    pub fn as_chunk(&self) -> Option<&Chunk> {
        match self {
            ChunkItem::Token(_) => None,
            ChunkItem::Chunk(chunk) => Some(chunk),
        }
    }

    pub fn is_token(&self) -> bool {
        matches!(self, ChunkItem::Token(_))
    }

    pub fn is_chunk(&self) -> bool {
        matches!(self, ChunkItem::Chunk(_))
    }

    pub fn as_node(&self) -> &dyn AstNode {
        match self {
            ChunkItem::Token(token) => token,
            ChunkItem::Chunk(chunk) => chunk,
        }
    }

    pub fn accept(&self, visitor: &mut dyn Visitor) {
        self.as_node().accept(visitor);
    }
}

impl From<Token> for ChunkItem {
    fn from(token: Token) -> Self {
        ChunkItem::Token(token)
    }
}

impl From<Chunk> for ChunkItem {
    fn from(chunk: Chunk) -> Self {
        ChunkItem::Chunk(chunk)
    }
}

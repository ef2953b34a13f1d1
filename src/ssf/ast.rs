//! Abstract syntax tree for SSF corpora
//!
//! The tree is strictly hierarchical and owned top-down:
//!
//! ```text
//! Corpus
//! └── Document*
//!     └── Sentence*
//!         └── Chunk*
//!             └── ChunkItem* (Token | Chunk)
//! ```
//!
//! Nodes are built once by the parser and are read-only afterwards. Empty subtrees
//! never make it into the tree: a chunk, sentence or document without surviving
//! children is discarded by its parent.

pub mod elements;
pub mod ids;
pub mod traits;

pub use elements::{
    Chunk, ChunkItem, ChunkMode, Corpus, Document, FeatureStructure, FeatureValue, Sentence,
    Token, LOOSE_DOCUMENT_ID,
};
pub use ids::{EntityKind, IdGenerator};
pub use traits::{AstNode, Visitor};

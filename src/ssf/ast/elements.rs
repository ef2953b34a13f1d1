//! Element types for the SSF tree

pub mod chunk;
pub mod chunk_item;
pub mod corpus;
pub mod document;
pub mod feature_structure;
pub mod sentence;
pub mod token;

pub use chunk::Chunk;
pub use chunk_item::ChunkItem;
pub use corpus::Corpus;
pub use document::{Document, LOOSE_DOCUMENT_ID};
pub use feature_structure::{FeatureStructure, FeatureValue};
pub use sentence::{ChunkMode, Sentence};
pub use token::Token;

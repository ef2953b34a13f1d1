//! SSF parser
//!
//! Extraction runs top-down and validation bottom-up:
//!
//! ```text
//! file text ─▶ documents ─▶ sentences ─▶ chunk partition ─▶ chunks ─▶ tokens
//!                                                                       │
//!          keep/discard ◀── keep/discard ◀── keep/discard ◀── valid? ◀──┘
//! ```
//!
//! Each level accumulates its children, checks them and either keeps the result
//! or reports it to its parent as discarded. Failures never cross more than one
//! level except in one case: an invalid token rejects its whole chunk.
//!
//! Parsing is pure. Reading files is the job of [`crate::ssf::loader`].

pub mod chunk;
pub mod corpus;
pub mod document;
pub mod error;
pub mod feature_structure;
pub mod partition;
pub mod sentence;
pub mod token;

pub use chunk::{parse_chunk, parse_chunk_lines};
pub use corpus::{parse_corpus, parse_file, CorpusMode, SourceFile};
pub use document::{find_wrapped_documents, parse_loose_document, parse_wrapped_document};
pub use error::ParseError;
pub use feature_structure::parse_feature_structure;
pub use partition::{partition, partition_body, strip_pseudo_chunk, Unit};
pub use sentence::{parse_sentence, parse_sentences};
pub use token::parse_token;

use crate::ssf::ast::{Corpus, IdGenerator};

/// Parse in-memory SSF text as a corpus holding a single file
///
/// `name` is used as both the corpus root and the document path.
pub fn parse_text(text: &str, name: &str, mode: CorpusMode) -> Corpus {
    let ids = IdGenerator::new();
    parse_corpus(name, [SourceFile::new(name, text)], mode, &ids)
}

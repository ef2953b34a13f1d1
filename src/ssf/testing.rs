//! Testing utilities
//!
//! Fluent assertions over parsed trees. Tests should check content and structure,
//! not just counts:
//!
//! ```rust,ignore
//! use ssf::ssf::testing::assert_corpus;
//!
//! assert_corpus(&corpus).document_count(1).document(0, |doc| {
//!     doc.label("d1").sentence(0, |sentence| {
//!         sentence.chunk_count(2).chunk(0, |chunk| {
//!             chunk.tag("NP").token_values(&["the", "dog"]);
//!         });
//!     });
//! });
//! ```

mod ssf_assertions;

pub use ssf_assertions::{
    assert_corpus, assert_sentence, ChunkAssertion, CorpusAssertion, DocumentAssertion,
    SentenceAssertion, TokenAssertion,
};

//! # ssf
//!
//! A parser for SSF, the tab-delimited, bracket-nested annotation format used for
//! linguistically annotated corpora.
//!
//! Raw text is turned into a validated tree of
//! Corpus → Document → Sentence → Chunk → Token. See [`ssf::parsing`] for the
//! parser and [`ssf::loader`] for reading corpora from disk.

pub mod ssf;

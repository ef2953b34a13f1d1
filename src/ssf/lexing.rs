//! Line lexing for SSF text
//!
//! SSF is line oriented: structure is carried by whole lines, and what a line means
//! depends only on whether it contains the chunk nesting markers `((` and `))`.
//! This module tokenizes single lines with logos and classifies them.

pub mod line_classification;
pub mod tokens;

pub use line_classification::{
    classify_line, is_pseudo_chunk_header, split_fields, LineKind, CLOSE_MARKER, FIELD_SEPARATOR,
    OPEN_MARKER,
};
pub use tokens::{lex_line, LineToken};

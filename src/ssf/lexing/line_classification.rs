//! Line Classification
//!
//! Classifies an SSF line by the markers it contains. A line containing `((`
//! opens a chunk even if it also contains `))`; this matches how chunk headers
//! with odd feature values are read in existing corpora.

use super::tokens::{lex_line, LineToken};

pub const OPEN_MARKER: &str = "((";
pub const CLOSE_MARKER: &str = "))";
pub const FIELD_SEPARATOR: char = '\t';

/// Type tag of the structural wrapper chunk that is never part of the tree
const PSEUDO_CHUNK_TAG: &str = "SSF";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Contains the open marker
    Open,
    /// Contains the close marker (and no open marker)
    Close,
    /// Empty or whitespace only
    Blank,
    /// Anything else: a token line
    Plain,
}

impl LineKind {
    /// Change in nesting depth caused by a line of this kind
    pub fn depth_delta(self) -> i64 {
        match self {
            LineKind::Open => 1,
            LineKind::Close => -1,
            LineKind::Blank | LineKind::Plain => 0,
        }
    }
}

pub fn classify_line(line: &str) -> LineKind {
    let tokens = lex_line(line);

    if tokens.iter().any(|(t, _)| *t == LineToken::Open) {
        return LineKind::Open;
    }

    if tokens.iter().any(|(t, _)| *t == LineToken::Close) {
        return LineKind::Close;
    }

    if line.trim().is_empty() {
        return LineKind::Blank;
    }

    LineKind::Plain
}

/// Split a line into its tab-separated fields
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(FIELD_SEPARATOR).collect()
}

/// Check whether a line opens the `SSF` wrapper pseudo-chunk (`0	((	SSF`)
pub fn is_pseudo_chunk_header(line: &str) -> bool {
    classify_line(line) == LineKind::Open
        && split_fields(line)
            .get(2)
            .is_some_and(|tag| tag.trim() == PSEUDO_CHUNK_TAG)
}

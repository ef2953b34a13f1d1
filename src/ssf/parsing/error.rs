//! Parse failures
//!
//! Every failure here is local: the parser resolves it at the lowest level by
//! discarding the unit it belongs to, and never lets it abort sibling units.

use crate::ssf::ast::FeatureStructure;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A line lacks a required tab-separated field
    MissingField { field: &'static str, line: String },
    /// A token line whose surface value is empty
    EmptyValue { line: String },
    /// A feature without `=`; `partial` holds the features read before it
    MalformedFeature {
        feature: String,
        partial: FeatureStructure,
    },
    /// A unit whose first line does not open a chunk
    NotAChunk { line: String },
    /// A unit whose nesting markers do not balance
    UnbalancedChunk,
    /// A chunk rejected because one of its own tokens is invalid
    InvalidToken {
        number: String,
        cause: Box<ParseError>,
    },
    /// No sentence or document boundary markers were found
    BoundaryNotFound { element: &'static str },
    /// The unit parsed, but none of its children survived validation
    Empty { element: &'static str },
}

impl ParseError {
    /// Whether this failure means "nothing valid inside" rather than bad shape
    pub fn is_empty(&self) -> bool {
        matches!(self, ParseError::Empty { .. })
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingField { field, line } => {
                write!(f, "Missing {} field in line '{}'", field, line)
            }
            ParseError::EmptyValue { line } => {
                write!(f, "Empty token value in line '{}'", line)
            }
            ParseError::MalformedFeature { feature, .. } => {
                write!(f, "Malformed feature '{}' (expected key=value)", feature)
            }
            ParseError::NotAChunk { line } => {
                write!(f, "Line '{}' does not open a chunk", line)
            }
            ParseError::UnbalancedChunk => write!(f, "Unbalanced chunk markers"),
            ParseError::InvalidToken { number, cause } => {
                write!(f, "Invalid token '{}': {}", number, cause)
            }
            ParseError::BoundaryNotFound { element } => {
                write!(f, "No {} boundary found", element)
            }
            ParseError::Empty { element } => {
                write!(f, "{} has no valid children", element)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::InvalidToken { cause, .. } => Some(cause.as_ref()),
            _ => None,
        }
    }
}

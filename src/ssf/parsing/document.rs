//! Document parsing
//!
//! Documents come in two shapes:
//! - wrapped: `<document id="...">` (or `docid=`) around a run of sentences;
//! - loose: sentences directly in the file, with no wrapper and no id.
//!
//! Either way, sentences are located by their boundary markers and parsed one by
//! one; a document is kept only if at least one sentence survives.

use super::error::ParseError;
use super::sentence::parse_sentences;
use crate::ssf::ast::{Document, EntityKind, IdGenerator};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static DOCUMENT_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<document (?:doc)?id=["'](.*?)["']>(.+?)</document>"#).unwrap()
});

/// Matches one whole document block, used to find documents in a file
pub(crate) static DOCUMENT_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<document.+?</document>").unwrap());

/// Parse the first `<document id="...">...</document>` block in `text`
pub fn parse_wrapped_document(
    text: &str,
    path: &Path,
    ids: &IdGenerator,
) -> Result<Document, ParseError> {
    let captures = DOCUMENT_BOUNDARY
        .captures(text)
        .ok_or(ParseError::BoundaryNotFound {
            element: "document",
        })?;
    let id = captures.get(1).map_or("", |m| m.as_str());
    let content = captures.get(2).map_or("", |m| m.as_str());

    build_document(Some(id.to_string()), content, path, ids)
}

/// Parse `text` as a loose document, reading every sentence it contains
pub fn parse_loose_document(
    text: &str,
    path: &Path,
    ids: &IdGenerator,
) -> Result<Document, ParseError> {
    build_document(None, text, path, ids)
}

/// Find every wrapped document block in `text`, without parsing them
pub fn find_wrapped_documents(text: &str) -> Vec<&str> {
    DOCUMENT_SPAN.find_iter(text).map(|m| m.as_str()).collect()
}

fn build_document(
    id: Option<String>,
    content: &str,
    path: &Path,
    ids: &IdGenerator,
) -> Result<Document, ParseError> {
    let sentences = parse_sentences(content, ids);
    if sentences.is_empty() {
        return Err(ParseError::Empty {
            element: "document",
        });
    }
    Ok(Document::new(
        ids.next(EntityKind::Document),
        id,
        path,
        sentences,
    ))
}

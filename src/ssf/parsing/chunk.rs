//! Chunk parsing
//!
//! A chunk unit is its header line, its interior and its closing line:
//!
//! ```text
//! 1	((	NP	<fs name='NP'>     ← header: number, `((`, tag, features
//! 1.1	the	DT                  ┐
//! 1.2	((	JJP                 │ interior, partitioned into
//! 1.2.1	big	JJ              │ tokens and nested chunks
//! 	))                      │
//! 1.3	dog	NN                  ┘
//! 	))                          ← closing line
//! ```
//!
//! Validity is decided bottom-up with two different policies:
//! - an invalid token rejects the whole chunk it belongs to, siblings included;
//! - an invalid nested chunk is only left out of its parent.
//!
//! A chunk is valid when at least one child survives.

use super::error::ParseError;
use super::feature_structure::parse_feature_structure;
use super::partition::partition;
use super::token::parse_token;
use crate::ssf::ast::{Chunk, ChunkItem, EntityKind, FeatureStructure, IdGenerator};
use crate::ssf::lexing::{classify_line, split_fields, LineKind};
use tracing::debug;

/// Parse the text of one chunk unit
pub fn parse_chunk(text: &str, ids: &IdGenerator) -> Result<Chunk, ParseError> {
    let lines: Vec<&str> = text.lines().collect();
    parse_chunk_lines(&lines, ids)
}

/// Parse a chunk unit given as lines
pub fn parse_chunk_lines(lines: &[&str], ids: &IdGenerator) -> Result<Chunk, ParseError> {
    let Some(&header) = lines.first() else {
        return Err(ParseError::NotAChunk {
            line: String::new(),
        });
    };
    if classify_line(header) != LineKind::Open {
        return Err(ParseError::NotAChunk {
            line: header.to_string(),
        });
    }
    let closing = lines[1..].last().copied().unwrap_or_default();
    if classify_line(closing) != LineKind::Close {
        return Err(ParseError::UnbalancedChunk);
    }

    let (number, tag, features) = parse_header(header)?;
    let interior = &lines[1..lines.len() - 1];
    let children = parse_interior(number, interior, ids)?;

    if children.is_empty() {
        return Err(ParseError::Empty { element: "chunk" });
    }

    Ok(Chunk::new(
        ids.next(EntityKind::Chunk),
        number,
        tag,
        features,
        children,
    ))
}

fn parse_header(header: &str) -> Result<(&str, &str, FeatureStructure), ParseError> {
    let fields = split_fields(header);
    let number = fields[0];
    let tag = *fields.get(2).ok_or_else(|| ParseError::MissingField {
        field: "type",
        line: header.to_string(),
    })?;
    let features = match fields.get(3) {
        Some(text) => parse_feature_structure(text)?,
        None => FeatureStructure::new(),
    };
    Ok((number, tag, features))
}

fn parse_interior(
    number: &str,
    interior: &[&str],
    ids: &IdGenerator,
) -> Result<Vec<ChunkItem>, ParseError> {
    let mut children = Vec::new();

    for unit in partition(interior) {
        if !unit.is_balanced() {
            debug!(
                chunk = number,
                lines = unit.lines().len(),
                "dropping unbalanced fragment"
            );
            continue;
        }

        if unit.is_chunk() {
            match parse_chunk_lines(unit.lines(), ids) {
                Ok(nested) => children.push(ChunkItem::Chunk(nested)),
                Err(err) => debug!(chunk = number, error = %err, "dropping nested chunk"),
            }
            continue;
        }

        let line = unit.lines()[0];
        match parse_token(line, ids) {
            Ok(token) => children.push(ChunkItem::Token(token)),
            Err(cause) => {
                debug!(chunk = number, error = %cause, "rejecting chunk with invalid token");
                return Err(ParseError::InvalidToken {
                    number: split_fields(line)[0].to_string(),
                    cause: Box::new(cause),
                });
            }
        }
    }

    Ok(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ssf::ast::FeatureValue;

    #[test]
    fn test_flat_chunk() {
        let ids = IdGenerator::new();
        let chunk = parse_chunk(
            "1\t((\tNP\t<fs name='NP' head='dog'>\n1.1\tthe\tDT\n1.2\tdog\tNN\n\t))",
            &ids,
        )
        .unwrap();

        assert_eq!(chunk.number(), "1");
        assert_eq!(chunk.tag(), "NP");
        assert_eq!(
            chunk.features().get("head").and_then(FeatureValue::as_text),
            Some("dog")
        );
        assert_eq!(chunk.children().len(), 2);
        assert!(chunk.is_leaf());
    }

    #[test]
    fn test_header_without_features() {
        let ids = IdGenerator::new();
        let chunk = parse_chunk("3\t((\tBLK\n3.1\t.\tSYM\n\t))", &ids).unwrap();
        assert!(chunk.features().is_empty());
    }

    #[test]
    fn test_nested_chunk_keeps_source_order() {
        let ids = IdGenerator::new();
        let text = "1\t((\tNP\n1.1\tthe\tDT\n1.2\t((\tJJP\n1.2.1\tbig\tJJ\n\t))\n1.3\tdog\tNN\n\t))";
        let chunk = parse_chunk(text, &ids).unwrap();

        let kinds: Vec<bool> = chunk.children().iter().map(ChunkItem::is_chunk).collect();
        assert_eq!(kinds, vec![false, true, false]);
        let values: Vec<_> = chunk.tokens().iter().map(|t| t.value()).collect();
        assert_eq!(values, vec!["the", "big", "dog"]);
    }

    #[test]
    fn test_invalid_token_rejects_whole_chunk() {
        let ids = IdGenerator::new();
        let text = "1\t((\tNP\n1.1\tthe\tDT\n1.2\tdog\n\t))";
        let err = parse_chunk(text, &ids).unwrap_err();
        match err {
            ParseError::InvalidToken { number, cause } => {
                assert_eq!(number, "1.2");
                assert!(matches!(*cause, ParseError::MissingField { .. }));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_invalid_nested_chunk_is_omitted() {
        let ids = IdGenerator::new();
        let text = "1\t((\tNP\n1.1\tthe\tDT\n1.2\t((\tJJP\n1.2.1\tbig\n\t))\n\t))";
        let chunk = parse_chunk(text, &ids).unwrap();
        assert_eq!(chunk.children().len(), 1);
        assert!(chunk.is_leaf());
    }

    #[test]
    fn test_chunk_with_only_invalid_nested_chunk_is_empty() {
        let ids = IdGenerator::new();
        let text = "1\t((\tNP\n1.1\t((\tJJP\n1.1.1\t\tJJ\n\t))\n\t))";
        let err = parse_chunk(text, &ids).unwrap_err();
        assert!(err.is_empty());
    }

    #[test]
    fn test_unclosed_nested_chunk_is_dropped() {
        let ids = IdGenerator::new();
        let text = "1\t((\tNP\n1.1\tthe\tDT\n1.2\t((\tJJP\n1.2.1\tbig\tJJ\n\t))";
        let chunk = parse_chunk(text, &ids).unwrap();
        let values: Vec<_> = chunk.tokens().iter().map(|t| t.value()).collect();
        assert_eq!(values, vec!["the"]);
    }

    #[test]
    fn test_shape_errors() {
        let ids = IdGenerator::new();
        assert!(matches!(
            parse_chunk("", &ids),
            Err(ParseError::NotAChunk { .. })
        ));
        assert!(matches!(
            parse_chunk("1.1\tthe\tDT", &ids),
            Err(ParseError::NotAChunk { .. })
        ));
        assert!(matches!(
            parse_chunk("1\t((\tNP\n1.1\tthe\tDT", &ids),
            Err(ParseError::UnbalancedChunk)
        ));
        assert!(matches!(
            parse_chunk("1\t((\n1.1\tthe\tDT\n\t))", &ids),
            Err(ParseError::MissingField { field: "type", .. })
        ));
    }

    #[test]
    fn test_malformed_chunk_features_reject_chunk() {
        let ids = IdGenerator::new();
        let err = parse_chunk("1\t((\tNP\t<fs name>\n1.1\tthe\tDT\n\t))", &ids).unwrap_err();
        assert!(matches!(err, ParseError::MalformedFeature { .. }));
    }

    #[test]
    fn test_uids_are_assigned_bottom_up() {
        let ids = IdGenerator::new();
        let text = "1\t((\tNP\n1.1\t((\tJJP\n1.1.1\tbig\tJJ\n\t))\n\t))";
        let chunk = parse_chunk(text, &ids).unwrap();
        assert_eq!(chunk.uid(), 1);
        assert_eq!(chunk.nested_chunks().next().map(Chunk::uid), Some(0));
        assert_eq!(ids.issued(EntityKind::Token), 1);
    }
}

//! Sentence parsing
//!
//! ```text
//! <Sentence id="1">
//! 0	((	SSF
//! 1	((	NP	<fs name='NP'>
//! ...
//! 	))
//! 	))
//! </Sentence>
//! ```
//!
//! The optional `SSF` wrapper is dropped, the body is partitioned into top-level
//! units and every chunk unit is parsed on its own. Lines at the top level that are
//! not chunks are ignored. Only chunks that parse are kept.

use super::chunk::parse_chunk_lines;
use super::error::ParseError;
use super::partition::partition_body;
use crate::ssf::ast::{EntityKind, IdGenerator, Sentence};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<Sentence id=["'](.*?)["']>(.+?)</Sentence>"#).unwrap()
});

/// Matches one whole sentence block, used to find sentences in a document
pub(crate) static SENTENCE_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<Sentence.+?</Sentence>").unwrap());

/// Parse the first `<Sentence id="...">...</Sentence>` block in `text`
pub fn parse_sentence(text: &str, ids: &IdGenerator) -> Result<Sentence, ParseError> {
    let captures = SENTENCE_BOUNDARY
        .captures(text)
        .ok_or(ParseError::BoundaryNotFound {
            element: "sentence",
        })?;
    let id = captures.get(1).map_or("", |m| m.as_str());
    let body = captures.get(2).map_or("", |m| m.as_str());

    let mut chunks = Vec::new();
    for unit in partition_body(body) {
        if unit.is_blank() {
            continue;
        }
        if !unit.is_balanced() {
            debug!(sentence = id, "dropping unbalanced fragment");
            continue;
        }
        match parse_chunk_lines(unit.lines(), ids) {
            Ok(chunk) => chunks.push(chunk),
            Err(err) => debug!(sentence = id, error = %err, "dropping chunk"),
        }
    }

    if chunks.is_empty() {
        return Err(ParseError::Empty {
            element: "sentence",
        });
    }

    Ok(Sentence::new(ids.next(EntityKind::Sentence), id, chunks))
}

/// Parse every sentence block found in `text`, keeping the valid ones
pub fn parse_sentences(text: &str, ids: &IdGenerator) -> Vec<Sentence> {
    SENTENCE_SPAN
        .find_iter(text)
        .filter_map(|m| match parse_sentence(m.as_str(), ids) {
            Ok(sentence) => Some(sentence),
            Err(err) => {
                debug!(error = %err, "dropping sentence");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ssf::ast::ChunkMode;

    const WRAPPED: &str = "<Sentence id=\"7\">\n0\t((\tSSF\n1\t((\tNP\t<fs name='NP'>\n1.1\tthe\tDT\n1.2\tdog\tNN\n\t))\n2\t((\tVGF\t<fs name='VGF'>\n2.1\tbarked\tVBD\n\t))\n\t))\n</Sentence>";

    #[test]
    fn test_sentence_with_ssf_wrapper() {
        let ids = IdGenerator::new();
        let sentence = parse_sentence(WRAPPED, &ids).unwrap();
        assert_eq!(sentence.id(), "7");
        let tags: Vec<_> = sentence
            .chunks(ChunkMode::Outer)
            .into_iter()
            .map(|c| c.tag())
            .collect();
        assert_eq!(tags, vec!["NP", "VGF"]);
    }

    #[test]
    fn test_sentence_without_wrapper_and_single_quotes() {
        let ids = IdGenerator::new();
        let text = "<Sentence id='a'>\n1\t((\tNP\n1.1\tdogs\tNNS\n\t))\n</Sentence>";
        let sentence = parse_sentence(text, &ids).unwrap();
        assert_eq!(sentence.id(), "a");
        assert_eq!(sentence.outer_chunks().len(), 1);
    }

    #[test]
    fn test_empty_id_is_allowed() {
        let ids = IdGenerator::new();
        let text = "<Sentence id=\"\">\n1\t((\tNP\n1.1\tdogs\tNNS\n\t))\n</Sentence>";
        assert_eq!(parse_sentence(text, &ids).unwrap().id(), "");
    }

    #[test]
    fn test_invalid_chunk_is_dropped_but_siblings_survive() {
        let ids = IdGenerator::new();
        let text = "<Sentence id=\"1\">\n1\t((\tNP\n1.1\tthe\tDT\n1.2\t\tNN\n\t))\n2\t((\tVGF\n2.1\tran\tVBD\n\t))\n</Sentence>";
        let sentence = parse_sentence(text, &ids).unwrap();
        let numbers: Vec<_> = sentence
            .outer_chunks()
            .iter()
            .map(|c| c.number())
            .collect();
        assert_eq!(numbers, vec!["2"]);
    }

    #[test]
    fn test_stray_top_level_tokens_are_ignored() {
        let ids = IdGenerator::new();
        let text = "<Sentence id=\"1\">\n1\tstray\tNN\n2\t((\tVGF\n2.1\tran\tVBD\n\t))\n</Sentence>";
        let sentence = parse_sentence(text, &ids).unwrap();
        assert_eq!(sentence.outer_chunks().len(), 1);
    }

    #[test]
    fn test_missing_boundary() {
        let ids = IdGenerator::new();
        let err = parse_sentence("1\t((\tNP\n1.1\ta\tDT\n\t))", &ids).unwrap_err();
        assert_eq!(
            err,
            ParseError::BoundaryNotFound {
                element: "sentence"
            }
        );
    }

    #[test]
    fn test_sentence_without_valid_chunks_is_empty() {
        let ids = IdGenerator::new();
        let text = "<Sentence id=\"1\">\n1\t((\tNP\n1.1\tthe\n\t))\n</Sentence>";
        assert!(parse_sentence(text, &ids).unwrap_err().is_empty());
        assert_eq!(ids.issued(EntityKind::Sentence), 0);
    }

    #[test]
    fn test_stray_close_does_not_swallow_later_chunks() {
        let ids = IdGenerator::new();
        let text = "<Sentence id=\"1\">\n1\t((\tNP\n1.1\tthe\tDT\n\t))\n\t))\n2\t((\tVGF\n2.1\tran\tVBD\n\t))\n3\t((\tBLK\n3.1\t.\tSYM\n\t))\n</Sentence>";
        let sentence = parse_sentence(text, &ids).unwrap();
        let numbers: Vec<_> = sentence
            .chunks(ChunkMode::Outer)
            .iter()
            .map(|c| c.number())
            .collect();
        assert_eq!(numbers, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_parse_sentences_keeps_valid_ones() {
        let ids = IdGenerator::new();
        let text = format!(
            "{}\n<Sentence id=\"2\">\n</Sentence>\n{}",
            WRAPPED,
            WRAPPED.replace("\"7\"", "\"8\"")
        );
        let sentences = parse_sentences(&text, &ids);
        let sentence_ids: Vec<_> = sentences.iter().map(Sentence::id).collect();
        assert_eq!(sentence_ids, vec!["7", "8"]);
    }
}

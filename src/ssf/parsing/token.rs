//! Token parsing
//!
//! A token line has the fields `number`, `value`, `tag` and an optional feature
//! structure, separated by tabs. The first missing field stops extraction. A token
//! is valid only if its surface value is non-empty.

use super::error::ParseError;
use super::feature_structure::parse_feature_structure;
use crate::ssf::ast::{EntityKind, FeatureStructure, IdGenerator, Token};
use crate::ssf::lexing::split_fields;

/// Parse one token line; only the first line of `text` is read
pub fn parse_token(text: &str, ids: &IdGenerator) -> Result<Token, ParseError> {
    let line = text.lines().next().unwrap_or_default();
    let fields = split_fields(line);

    let missing = |field| ParseError::MissingField {
        field,
        line: line.to_string(),
    };

    let number = fields[0];
    let value = *fields.get(1).ok_or_else(|| missing("value"))?;
    let tag = *fields.get(2).ok_or_else(|| missing("type"))?;
    let features = match fields.get(3) {
        Some(text) => parse_feature_structure(text)?,
        None => FeatureStructure::new(),
    };

    if value.is_empty() {
        return Err(ParseError::EmptyValue {
            line: line.to_string(),
        });
    }

    Ok(Token::new(
        ids.next(EntityKind::Token),
        number,
        value,
        tag,
        features,
    ))
}

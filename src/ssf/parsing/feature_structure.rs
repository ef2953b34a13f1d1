//! Feature-structure parsing
//!
//! Reads the attribute field of a token or chunk line:
//!
//! ```text
//! <fs af='dog,n,m,sg,3,d,0,0' name='dog'>|<fs af='dog,v,any,any,any,,0,0'>
//! ```
//!
//! Alternatives separated by `|` are merged left to right into one structure.
//! Each alternative is shaved of its delimiters by width, not by matching them:
//! `<fs` alternatives lose four characters in front and one at the back. Some
//! corpora carry a broken shape without the `<fs` marker (`[name='x']`); when an
//! alternative lacks the marker but still contains `=`, one character is shaved
//! from each end instead. Alternatives with neither are ignored.

use super::error::ParseError;
use crate::ssf::ast::{FeatureStructure, FeatureValue};

const FS_MARKER: &str = "<fs";
const ALTERNATIVE_SEPARATOR: char = '|';

/// Keys containing this substring hold a comma-separated list
const LIST_KEY_MARKER: &str = "af";
const LIST_SEPARATOR: char = ',';

const QUOTES: &[char] = &['\'', '"'];

/// Parse a feature-structure field
///
/// A feature without `=` stops the scan and yields
/// [`ParseError::MalformedFeature`], carrying the features read so far.
pub fn parse_feature_structure(text: &str) -> Result<FeatureStructure, ParseError> {
    let mut features = FeatureStructure::new();

    for alternative in text.split(ALTERNATIVE_SEPARATOR) {
        let Some(body) = alternative_body(alternative.trim()) else {
            continue;
        };

        for feature in body.split_whitespace() {
            let Some((key, raw_value)) = feature.split_once('=') else {
                return Err(ParseError::MalformedFeature {
                    feature: feature.to_string(),
                    partial: features,
                });
            };
            features.insert(key, parse_value(key, raw_value));
        }
    }

    Ok(features)
}

/// Strip the delimiters of one alternative, or `None` if it carries no features
fn alternative_body(alternative: &str) -> Option<&str> {
    if alternative.contains(FS_MARKER) {
        Some(shave(alternative, FS_MARKER.len() + 1, 1))
    } else if alternative.contains('=') {
        Some(shave(alternative, 1, 1))
    } else {
        None
    }
}

/// Drop `head` characters from the front and `tail` from the back
fn shave(text: &str, head: usize, tail: usize) -> &str {
    let mut chars = text.chars();
    for _ in 0..head {
        chars.next();
    }
    for _ in 0..tail {
        chars.next_back();
    }
    chars.as_str()
}

fn parse_value(key: &str, raw: &str) -> FeatureValue {
    let value = strip_quotes(raw);
    if key.contains(LIST_KEY_MARKER) {
        FeatureValue::List(value.split(LIST_SEPARATOR).map(str::to_string).collect())
    } else {
        FeatureValue::Text(value.to_string())
    }
}

/// Remove one quote character (single or double) from each end
fn strip_quotes(value: &str) -> &str {
    let value = value.strip_prefix(QUOTES).unwrap_or(value);
    value.strip_suffix(QUOTES).unwrap_or(value)
}

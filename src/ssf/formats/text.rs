//! Plain text formatter
//!
//! One line per sentence: the surface values of its tokens, separated by spaces.

use super::registry::{FormatError, Formatter};
use crate::ssf::ast::{ChunkMode, Corpus};

pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn serialize(&self, corpus: &Corpus) -> Result<String, FormatError> {
        let mut output = String::new();
        for sentence in corpus.sentences() {
            let words: Vec<&str> = sentence
                .chunks(ChunkMode::Outer)
                .into_iter()
                .flat_map(|chunk| chunk.tokens())
                .map(|token| token.value())
                .collect();
            output.push_str(&words.join(" "));
            output.push('\n');
        }
        Ok(output)
    }

    fn description(&self) -> &str {
        "Token values, one sentence per line"
    }
}

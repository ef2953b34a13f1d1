//! Token definitions for SSF lines
//!
//! The lexer only needs to recognise the pieces that carry structure: the nesting
//! markers and the field separator. Everything else is text. Lone parentheses are
//! common surface values (`(` tagged as punctuation) and must not read as markers.

use logos::Logos;
use std::ops::Range;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineToken {
    /// `((`, opens a chunk
    #[token("((")]
    Open,

    /// `))`, closes a chunk
    #[token("))")]
    Close,

    #[token("\t")]
    Tab,

    /// A single parenthesis that is not part of a marker
    #[token("(")]
    #[token(")")]
    Paren,

    #[regex(r"[^\t()]+")]
    Text,
}

/// Tokenize one line (without its newline)
///
/// Every character is covered by some token, so lexing cannot fail; should logos
/// report an error anyway the span is kept as text.
pub fn lex_line(line: &str) -> Vec<(LineToken, Range<usize>)> {
    let mut lexer = LineToken::lexer(line);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        tokens.push((result.unwrap_or(LineToken::Text), lexer.span()));
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(line: &str) -> Vec<LineToken> {
        lex_line(line).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn test_chunk_header() {
        assert_eq!(
            kinds("1\t((\tNP\t<fs name='NP'>"),
            vec![
                LineToken::Text,
                LineToken::Tab,
                LineToken::Open,
                LineToken::Tab,
                LineToken::Text,
                LineToken::Tab,
                LineToken::Text,
            ]
        );
    }

    #[test]
    fn test_close_line() {
        assert_eq!(kinds("\t))"), vec![LineToken::Tab, LineToken::Close]);
    }

    #[test]
    fn test_single_parenthesis_is_not_a_marker() {
        assert_eq!(
            kinds("3\t(\tPUNC"),
            vec![
                LineToken::Text,
                LineToken::Tab,
                LineToken::Paren,
                LineToken::Tab,
                LineToken::Text,
            ]
        );
    }

    #[test]
    fn test_spans_cover_the_line() {
        let line = "1.1\tdog\tNN";
        let spans: Vec<_> = lex_line(line).into_iter().map(|(_, s)| s).collect();
        assert_eq!(spans, vec![0..3, 3..4, 4..7, 7..8, 8..10]);
    }
}

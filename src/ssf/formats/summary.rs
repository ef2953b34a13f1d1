//! Summary formatter
//!
//! Counts the entities of a corpus with a [`Visitor`].

use super::registry::{FormatError, Formatter};
use crate::ssf::ast::{AstNode, Chunk, Corpus, Document, Sentence, Token, Visitor};

/// Entity counts of a tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub documents: usize,
    pub sentences: usize,
    pub chunks: usize,
    pub tokens: usize,
}

impl Summary {
    pub fn of(node: &dyn AstNode) -> Self {
        let mut summary = Summary::default();
        node.accept(&mut summary);
        summary
    }
}

impl Visitor for Summary {
    fn visit_document(&mut self, _document: &Document) {
        self.documents += 1;
    }

    fn visit_sentence(&mut self, _sentence: &Sentence) {
        self.sentences += 1;
    }

    fn visit_chunk(&mut self, _chunk: &Chunk) {
        self.chunks += 1;
    }

    fn visit_token(&mut self, _token: &Token) {
        self.tokens += 1;
    }
}

pub struct SummaryFormatter;

impl Formatter for SummaryFormatter {
    fn name(&self) -> &str {
        "summary"
    }

    fn serialize(&self, corpus: &Corpus) -> Result<String, FormatError> {
        let summary = Summary::of(corpus);
        Ok(format!(
            "documents: {}\nsentences: {}\nchunks: {}\ntokens: {}\n",
            summary.documents, summary.sentences, summary.chunks, summary.tokens
        ))
    }

    fn description(&self) -> &str {
        "Document, sentence, chunk and token counts"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ssf::parsing::{parse_text, CorpusMode};

    #[test]
    fn test_counts_every_level() {
        let text = "<document id=\"d\">\n<Sentence id=\"1\">\n1\t((\tNP\n1.1\tthe\tDT\n1.2\t((\tJJP\n1.2.1\tbig\tJJ\n\t))\n\t))\n</Sentence>\n</document>";
        let corpus = parse_text(text, "mem", CorpusMode::Strict);
        assert_eq!(
            Summary::of(&corpus),
            Summary {
                documents: 1,
                sentences: 1,
                chunks: 2,
                tokens: 2,
            }
        );
        assert_eq!(
            SummaryFormatter.serialize(&corpus).unwrap(),
            "documents: 1\nsentences: 1\nchunks: 2\ntokens: 2\n"
        );
    }
}

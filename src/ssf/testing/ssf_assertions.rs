//! Fluent assertion API for SSF trees

use crate::ssf::ast::{Chunk, Corpus, Document, FeatureValue, Sentence, Token};

// ============================================================================
// Entry Points
// ============================================================================

/// Create an assertion builder for a corpus
pub fn assert_corpus(corpus: &Corpus) -> CorpusAssertion<'_> {
    CorpusAssertion { corpus }
}

/// Create an assertion builder for a single sentence
pub fn assert_sentence(sentence: &Sentence) -> SentenceAssertion<'_> {
    SentenceAssertion {
        sentence,
        context: format!("sentence '{}'", sentence.id()),
    }
}

fn check_index(index: usize, len: usize, what: &str, context: &str) {
    assert!(
        index < len,
        "{}: {} index {} out of bounds ({} present)",
        context,
        what,
        index,
        len
    );
}

// ============================================================================
// Corpus Assertions
// ============================================================================

pub struct CorpusAssertion<'a> {
    corpus: &'a Corpus,
}

impl<'a> CorpusAssertion<'a> {
    pub fn document_count(self, expected: usize) -> Self {
        let labels: Vec<_> = self.corpus.documents().iter().map(Document::label).collect();
        assert_eq!(
            labels.len(),
            expected,
            "Expected {} documents, found {}: {:?}",
            expected,
            labels.len(),
            labels
        );
        self
    }

    /// Total number of sentences over all documents
    pub fn sentence_count(self, expected: usize) -> Self {
        let actual = self.corpus.sentences().count();
        assert_eq!(
            actual, expected,
            "Expected {} sentences in corpus, found {}",
            expected, actual
        );
        self
    }

    pub fn document<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(DocumentAssertion<'a>),
    {
        let documents = self.corpus.documents();
        check_index(index, documents.len(), "document", "corpus");
        assertion(DocumentAssertion {
            document: &documents[index],
            context: format!("documents[{}]", index),
        });
        self
    }
}

// ============================================================================
// Document Assertions
// ============================================================================

pub struct DocumentAssertion<'a> {
    document: &'a Document,
    context: String,
}

impl<'a> DocumentAssertion<'a> {
    pub fn label(self, expected: &str) -> Self {
        assert_eq!(
            self.document.label(),
            expected,
            "{}: unexpected document label",
            self.context
        );
        self
    }

    pub fn loose(self) -> Self {
        assert!(
            self.document.is_loose(),
            "{}: expected a loose document, found id {:?}",
            self.context,
            self.document.id()
        );
        self
    }

    pub fn sentence_count(self, expected: usize) -> Self {
        let ids: Vec<_> = self.document.sentences().iter().map(Sentence::id).collect();
        assert_eq!(
            ids.len(),
            expected,
            "{}: expected {} sentences, found {}: {:?}",
            self.context,
            expected,
            ids.len(),
            ids
        );
        self
    }

    pub fn sentence<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(SentenceAssertion<'a>),
    {
        let sentences = self.document.sentences();
        check_index(index, sentences.len(), "sentence", &self.context);
        assertion(SentenceAssertion {
            sentence: &sentences[index],
            context: format!("{}.sentences[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Sentence Assertions
// ============================================================================

pub struct SentenceAssertion<'a> {
    sentence: &'a Sentence,
    context: String,
}

impl<'a> SentenceAssertion<'a> {
    pub fn id(self, expected: &str) -> Self {
        assert_eq!(
            self.sentence.id(),
            expected,
            "{}: unexpected sentence id",
            self.context
        );
        self
    }

    /// Number of top-level chunks
    pub fn chunk_count(self, expected: usize) -> Self {
        let tags: Vec<_> = self.sentence.outer_chunks().iter().map(Chunk::tag).collect();
        assert_eq!(
            tags.len(),
            expected,
            "{}: expected {} chunks, found {}: {:?}",
            self.context,
            expected,
            tags.len(),
            tags
        );
        self
    }

    /// Surface values of all tokens, in order
    pub fn token_values(self, expected: &[&str]) -> Self {
        let actual: Vec<_> = self.sentence.tokens().iter().map(|t| t.value()).collect();
        assert_eq!(actual, expected, "{}: unexpected tokens", self.context);
        self
    }

    pub fn chunk<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ChunkAssertion<'a>),
    {
        let chunks = self.sentence.outer_chunks();
        check_index(index, chunks.len(), "chunk", &self.context);
        assertion(ChunkAssertion {
            chunk: &chunks[index],
            context: format!("{}.chunks[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Chunk Assertions
// ============================================================================

pub struct ChunkAssertion<'a> {
    chunk: &'a Chunk,
    context: String,
}

impl<'a> ChunkAssertion<'a> {
    pub fn number(self, expected: &str) -> Self {
        assert_eq!(
            self.chunk.number(),
            expected,
            "{}: unexpected chunk number",
            self.context
        );
        self
    }

    pub fn tag(self, expected: &str) -> Self {
        assert_eq!(
            self.chunk.tag(),
            expected,
            "{}: unexpected chunk tag",
            self.context
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_eq!(
            self.chunk.children().len(),
            expected,
            "{}: unexpected number of children",
            self.context
        );
        self
    }

    pub fn feature(self, key: &str, expected: &str) -> Self {
        assert_feature_text(self.chunk.features().get(key), key, expected, &self.context);
        self
    }

    /// Surface values of all tokens under the chunk, in order
    pub fn token_values(self, expected: &[&str]) -> Self {
        let actual: Vec<_> = self.chunk.tokens().iter().map(|t| t.value()).collect();
        assert_eq!(actual, expected, "{}: unexpected tokens", self.context);
        self
    }

    /// Assert on the `index`-th token under the chunk (depth-first)
    pub fn token<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(TokenAssertion<'a>),
    {
        let tokens = self.chunk.tokens();
        check_index(index, tokens.len(), "token", &self.context);
        assertion(TokenAssertion {
            token: tokens[index],
            context: format!("{}.tokens[{}]", self.context, index),
        });
        self
    }

    /// Assert on the `index`-th direct nested chunk
    pub fn nested<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ChunkAssertion<'a>),
    {
        let nested: Vec<&'a Chunk> = self.chunk.nested_chunks().collect();
        check_index(index, nested.len(), "nested chunk", &self.context);
        assertion(ChunkAssertion {
            chunk: nested[index],
            context: format!("{}.nested[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Token Assertions
// ============================================================================

pub struct TokenAssertion<'a> {
    token: &'a Token,
    context: String,
}

impl<'a> TokenAssertion<'a> {
    pub fn number(self, expected: &str) -> Self {
        assert_eq!(self.token.number(), expected, "{}: unexpected number", self.context);
        self
    }

    pub fn value(self, expected: &str) -> Self {
        assert_eq!(self.token.value(), expected, "{}: unexpected value", self.context);
        self
    }

    pub fn tag(self, expected: &str) -> Self {
        assert_eq!(self.token.tag(), expected, "{}: unexpected tag", self.context);
        self
    }

    pub fn feature(self, key: &str, expected: &str) -> Self {
        assert_feature_text(self.token.features().get(key), key, expected, &self.context);
        self
    }

    pub fn feature_list(self, key: &str, expected: &[&str]) -> Self {
        let actual = self.token.features().get(key).and_then(FeatureValue::as_list);
        let expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            actual,
            Some(expected.as_slice()),
            "{}: unexpected list feature '{}'",
            self.context,
            key
        );
        self
    }
}

fn assert_feature_text(actual: Option<&FeatureValue>, key: &str, expected: &str, context: &str) {
    assert_eq!(
        actual.and_then(FeatureValue::as_text),
        Some(expected),
        "{}: unexpected feature '{}'",
        context,
        key
    );
}

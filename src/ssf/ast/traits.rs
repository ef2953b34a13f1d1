//! AST traits - Common interfaces for uniform node access
//!
//! `AstNode` gives formatters a type-agnostic view of the tree (type name, label,
//! children), and `Visitor` walks it with one hook per entity kind.

use super::elements::{Chunk, Corpus, Document, Sentence, Token};

/// Visitor trait for traversing the tree
///
/// Default implementations are empty, so you only need to override the methods you
/// care about. `accept` calls the hook for a node before descending into its children.
///
/// # Example
///
/// ```ignore
/// struct TokenCounter(usize);
///
/// impl Visitor for TokenCounter {
///     fn visit_token(&mut self, _token: &Token) {
///         self.0 += 1;
///     }
/// }
///
/// let mut counter = TokenCounter(0);
/// corpus.accept(&mut counter);
/// ```
pub trait Visitor {
    fn visit_corpus(&mut self, _corpus: &Corpus) {}
    fn visit_document(&mut self, _document: &Document) {}
    fn visit_sentence(&mut self, _sentence: &Sentence) {}
    fn visit_chunk(&mut self, _chunk: &Chunk) {}
    fn visit_token(&mut self, _token: &Token) {}
}

/// Common interface for all tree nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;

    /// The machine uid assigned at construction
    fn uid(&self) -> usize;

    /// Direct children, in source order
    fn child_nodes(&self) -> Vec<&dyn AstNode>;

    /// Accept a visitor for traversing this node and its children
    fn accept(&self, visitor: &mut dyn Visitor);
}

//! Machine identifiers for tree entities
//!
//! SSF text does not always carry usable identifiers (sentence ids may be empty,
//! loose documents have none), so every constructed entity also receives a numeric
//! uid. Counters are kept per entity kind and handed down the parse call tree
//! instead of living in process-wide statics.

use std::sync::atomic::{AtomicUsize, Ordering};

/// The entity kinds that receive uids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Token,
    Chunk,
    Sentence,
    Document,
    Corpus,
}

/// Monotonic uid source, one counter per [`EntityKind`]
///
/// Atomic so a generator can be shared by threads parsing different files.
#[derive(Debug, Default)]
pub struct IdGenerator {
    tokens: AtomicUsize,
    chunks: AtomicUsize,
    sentences: AtomicUsize,
    documents: AtomicUsize,
    corpora: AtomicUsize,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next uid for `kind`
    pub fn next(&self, kind: EntityKind) -> usize {
        self.counter(kind).fetch_add(1, Ordering::Relaxed)
    }

    /// Number of uids issued so far for `kind`
    pub fn issued(&self, kind: EntityKind) -> usize {
        self.counter(kind).load(Ordering::Relaxed)
    }

    fn counter(&self, kind: EntityKind) -> &AtomicUsize {
        match kind {
            EntityKind::Token => &self.tokens,
            EntityKind::Chunk => &self.chunks,
            EntityKind::Sentence => &self.sentences,
            EntityKind::Document => &self.documents,
            EntityKind::Corpus => &self.corpora,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_are_per_kind() {
        let ids = IdGenerator::new();
        assert_eq!(ids.next(EntityKind::Token), 0);
        assert_eq!(ids.next(EntityKind::Token), 1);
        assert_eq!(ids.next(EntityKind::Chunk), 0);
        assert_eq!(ids.issued(EntityKind::Token), 2);
        assert_eq!(ids.issued(EntityKind::Sentence), 0);
    }

    #[test]
    fn test_counters_are_shared_across_threads() {
        let ids = IdGenerator::new();
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..100 {
                        ids.next(EntityKind::Sentence);
                    }
                });
            }
        });
        assert_eq!(ids.issued(EntityKind::Sentence), 400);
    }
}

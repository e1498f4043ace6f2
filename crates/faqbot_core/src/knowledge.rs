use crate::encode::encode_keywords;
use crate::model::{KnowledgeEntry, TermVector};
use crate::vocabulary::Vocabulary;

/// Immutable retrieval context: the entries, their vocabulary and the cached
/// per-entry vectors. Replacing the entries means building a new value.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
    vocabulary: Vocabulary,
    entry_vectors: Vec<TermVector>,
}

impl KnowledgeBase {
    pub fn new(entries: Vec<KnowledgeEntry>) -> Self {
        let vocabulary = Vocabulary::build(&entries);
        let entry_vectors = entries
            .iter()
            .map(|entry| encode_keywords(&entry.keywords, &vocabulary))
            .collect();

        Self {
            entries,
            vocabulary,
            entry_vectors,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&KnowledgeEntry> {
        self.entries.get(index)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn entry_vectors(&self) -> &[TermVector] {
        &self.entry_vectors
    }

    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.question.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

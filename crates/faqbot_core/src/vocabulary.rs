use std::collections::{BTreeSet, HashMap};

use crate::model::KnowledgeEntry;

/// Sorted, de-duplicated keyword terms of a knowledge base.
///
/// The position of a term in [`Vocabulary::terms`] is its coordinate in every
/// [`TermVector`](crate::model::TermVector) built against this vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    pub fn build(entries: &[KnowledgeEntry]) -> Self {
        let unique: BTreeSet<&str> = entries
            .iter()
            .flat_map(|entry| entry.keywords.iter().map(String::as_str))
            .collect();

        Self::from_sorted(unique.into_iter().map(str::to_string).collect())
    }

    fn from_sorted(terms: Vec<String>) -> Self {
        let index = terms
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();
        Self { terms, index }
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<KnowledgeEntry> {
        vec![
            KnowledgeEntry::new("What are the fees?", "50000", ["fees", "admission"]),
            KnowledgeEntry::new("Hostel?", "Yes", ["hostel", "fees", "rooms"]),
            KnowledgeEntry::new("No keywords", "-", Vec::<String>::new()),
        ]
    }

    #[test]
    fn terms_are_sorted_and_distinct() {
        let vocab = Vocabulary::build(&entries());
        assert_eq!(vocab.terms(), ["admission", "fees", "hostel", "rooms"]);
        assert_eq!(vocab.len(), 4);
    }

    #[test]
    fn rebuild_is_deterministic() {
        let first = Vocabulary::build(&entries());
        let second = Vocabulary::build(&entries());
        assert_eq!(first.terms(), second.terms());
        assert_eq!(first, second);
    }

    #[test]
    fn index_matches_position() {
        let vocab = Vocabulary::build(&entries());
        for (i, term) in vocab.terms().iter().enumerate() {
            assert_eq!(vocab.index_of(term), Some(i));
        }
        assert_eq!(vocab.index_of("weather"), None);
    }

    #[test]
    fn empty_knowledge_base_yields_empty_vocabulary() {
        let vocab = Vocabulary::build(&[]);
        assert!(vocab.is_empty());
        assert_eq!(vocab.index_of("fees"), None);
    }
}

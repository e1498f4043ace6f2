use crate::model::TermVector;
use crate::tokenize::tokenize;
use crate::vocabulary::Vocabulary;

/// Counts each keyword found in `vocabulary`; unknown keywords are skipped.
pub fn encode_keywords<S: AsRef<str>>(keywords: &[S], vocabulary: &Vocabulary) -> TermVector {
    count_terms(keywords.iter().map(AsRef::as_ref), vocabulary)
}

pub fn encode_query(text: &str, vocabulary: &Vocabulary) -> TermVector {
    let tokens = tokenize(text);
    count_terms(tokens.iter().map(String::as_str), vocabulary)
}

fn count_terms<'a>(terms: impl Iterator<Item = &'a str>, vocabulary: &Vocabulary) -> TermVector {
    let mut v = vec![0.0f32; vocabulary.len()];
    for term in terms {
        if let Some(idx) = vocabulary.index_of(term) {
            v[idx] += 1.0;
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::KnowledgeEntry;

    fn vocab() -> Vocabulary {
        Vocabulary::build(&[
            KnowledgeEntry::new("q1", "a1", ["fees", "admission"]),
            KnowledgeEntry::new("q2", "a2", ["courses"]),
        ])
    }

    #[test]
    fn keyword_vector_counts_repeats() {
        let v = encode_keywords(&["fees", "fees", "courses"], &vocab());
        // admission, courses, fees
        assert_eq!(v, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn unknown_keywords_are_ignored() {
        let v = encode_keywords(&["weather", "admission"], &vocab());
        assert_eq!(v, vec![1.0, 0.0, 0.0]);
    }

    #[test]
    fn query_vector_goes_through_tokenizer() {
        let v = encode_query("FEES?? and Courses, courses!", &vocab());
        assert_eq!(v, vec![0.0, 2.0, 1.0]);
    }

    #[test]
    fn vectors_match_vocabulary_length() {
        let vocab = vocab();
        assert_eq!(encode_query("", &vocab).len(), vocab.len());
        assert_eq!(encode_keywords::<&str>(&[], &vocab).len(), vocab.len());
        assert!(encode_query("anything", &Vocabulary::default()).is_empty());
    }
}

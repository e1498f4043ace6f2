use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::encode::encode_query;
use crate::knowledge::KnowledgeBase;
use crate::model::{MatchOutcome, MatchResult, TermVector};
use crate::settings::{EngineSettings, EMPTY_INTENT, UNCLEAR_INTENT};

/// Cosine of the angle between two vectors over the same vocabulary.
///
/// Returns exactly `0.0` when either vector has zero magnitude.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len(), "vectors over different vocabularies");

    let (dot, na, nb) = a
        .iter()
        .zip(b.iter())
        .fold((0.0f32, 0.0f32, 0.0f32), |(d, aa, bb), (x, y)| {
            (d + (x * y), aa + (x * x), bb + (y * y))
        });

    if na == 0.0 || nb == 0.0 {
        0.0
    } else {
        (dot / (na * nb).sqrt()).clamp(0.0, 1.0)
    }
}

/// Highest-scoring entry vector. Only a strictly positive score selects an
/// entry, and ties keep the earlier index.
pub fn top_match(query: &[f32], entry_vectors: &[TermVector]) -> (Option<usize>, f32) {
    let mut best_index = None;
    let mut best_score = 0.0f32;

    for (i, v) in entry_vectors.iter().enumerate() {
        let score = cosine_similarity(query, v);
        if score > best_score {
            best_score = score;
            best_index = Some(i);
        }
    }

    (best_index, best_score)
}

pub fn get_best_answer<R: Rng + ?Sized>(
    query: &str,
    knowledge_base: &KnowledgeBase,
    settings: &EngineSettings,
    rng: &mut R,
) -> MatchResult {
    if query.trim().is_empty() || knowledge_base.is_empty() {
        return MatchResult {
            reply: settings.empty_reply.clone(),
            intent: EMPTY_INTENT.to_string(),
            confidence: 0.0,
            outcome: MatchOutcome::Empty,
            entry_index: None,
        };
    }

    let query_vector = encode_query(query, knowledge_base.vocabulary());
    let (best_index, best_score) = top_match(&query_vector, knowledge_base.entry_vectors());
    debug!(query, ?best_index, best_score, "scored query");

    match best_index.and_then(|i| knowledge_base.entry(i).map(|e| (i, e))) {
        Some((i, entry)) if best_score >= settings.threshold => MatchResult {
            reply: entry.answer.clone(),
            intent: entry.question.clone(),
            confidence: best_score,
            outcome: MatchOutcome::Matched,
            entry_index: Some(i),
        },
        _ => MatchResult {
            reply: settings
                .unclear_replies
                .choose(rng)
                .cloned()
                .unwrap_or_else(|| settings.empty_reply.clone()),
            intent: UNCLEAR_INTENT.to_string(),
            confidence: best_score,
            outcome: MatchOutcome::Unclear,
            entry_index: None,
        },
    }
}

use crate::knowledge::KnowledgeBase;
use crate::model::KnowledgeEntry;
use crate::settings::EngineSettings;

/// Entries whose question or keywords contain the typed text, in
/// knowledge-base order, capped at `settings.suggestion_limit`.
pub fn suggest<'a>(
    knowledge_base: &'a KnowledgeBase,
    text: &str,
    settings: &EngineSettings,
) -> Vec<&'a KnowledgeEntry> {
    let needle = text.trim().to_lowercase();
    if needle.chars().count() < settings.min_suggestion_len {
        return Vec::new();
    }

    knowledge_base
        .entries()
        .iter()
        .filter(|entry| {
            entry.question.to_lowercase().contains(&needle)
                || entry.keywords.iter().any(|k| k.contains(&needle))
        })
        .take(settings.suggestion_limit)
        .collect()
}

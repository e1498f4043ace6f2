use std::path::Path;

use rand::Rng;
use tracing::{error, info};

use crate::error::Result;
use crate::knowledge::KnowledgeBase;
use crate::model::{KnowledgeEntry, MatchResult};
use crate::retrieval::get_best_answer;
use crate::settings::EngineSettings;
use crate::storage::load_entries;
use crate::suggest::suggest;

/// Query front door used by presentation layers.
///
/// An engine always owns a fully built [`KnowledgeBase`]; when loading fails
/// that base is empty and every query takes the empty-input path.
#[derive(Debug, Clone, Default)]
pub struct ChatEngine {
    knowledge_base: KnowledgeBase,
    settings: EngineSettings,
}

impl ChatEngine {
    pub fn new(knowledge_base: KnowledgeBase, settings: EngineSettings) -> Self {
        Self {
            knowledge_base,
            settings,
        }
    }

    pub fn from_entries(entries: Vec<KnowledgeEntry>, settings: EngineSettings) -> Self {
        Self::new(KnowledgeBase::new(entries), settings)
    }

    pub fn load(path: &Path, settings: EngineSettings) -> Result<Self> {
        let engine = Self::from_entries(load_entries(path)?, settings);
        info!(
            entries = engine.knowledge_base.len(),
            vocabulary = engine.knowledge_base.vocabulary().len(),
            "knowledge base ready"
        );
        Ok(engine)
    }

    pub fn load_or_empty(path: &Path, settings: EngineSettings) -> Self {
        match Self::load(path, settings.clone()) {
            Ok(engine) => engine,
            Err(err) => {
                error!(
                    path = %path.display(),
                    %err,
                    "failed to load knowledge base; serving empty replies"
                );
                Self::new(KnowledgeBase::empty(), settings)
            }
        }
    }

    pub fn submit_query(&self, text: &str) -> MatchResult {
        self.submit_query_with_rng(text, &mut rand::thread_rng())
    }

    pub fn submit_query_with_rng<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> MatchResult {
        get_best_answer(text, &self.knowledge_base, &self.settings, rng)
    }

    pub fn suggest(&self, text: &str) -> Vec<&KnowledgeEntry> {
        suggest(&self.knowledge_base, text, &self.settings)
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MatchOutcome;

    fn write_kb(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("faq.json");
        std::fs::write(
            &path,
            r#"[
                {"question": "What are the fees?", "answer": "Fees are 50000.", "keywords": ["fees", "admission"]},
                {"question": "Is there a hostel?", "answer": "Yes.", "keywords": ["hostel"]}
            ]"#,
        )
        .expect("write kb");
        path
    }

    #[test]
    fn loads_and_answers() {
        let dir = tempfile::tempdir().expect("tempdir");
        let engine =
            ChatEngine::load(&write_kb(dir.path()), EngineSettings::default()).expect("load");

        let result = engine.submit_query("tell me about fees");
        assert_eq!(result.outcome, MatchOutcome::Matched);
        assert_eq!(result.reply, "Fees are 50000.");
        assert_eq!(engine.suggest("hostel").len(), 1);
    }

    #[test]
    fn failed_load_degrades_to_empty_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let bad = dir.path().join("faq.json");
        std::fs::write(&bad, "{ not json").expect("write");

        for path in [bad, dir.path().join("missing.json")] {
            let engine = ChatEngine::load_or_empty(&path, EngineSettings::default());
            assert!(engine.knowledge_base().is_empty());
            let result = engine.submit_query("tell me about fees");
            assert_eq!(result.intent, "empty");
            assert_eq!(result.confidence, 0.0);
        }
    }

    #[test]
    fn engines_are_independent() {
        let fees = ChatEngine::from_entries(
            vec![KnowledgeEntry::new("Fees?", "money", ["fees"])],
            EngineSettings::default(),
        );
        let hostel = ChatEngine::from_entries(
            vec![KnowledgeEntry::new("Hostel?", "rooms", ["hostel"])],
            EngineSettings::default(),
        );
        assert_eq!(fees.submit_query("fees").reply, "money");
        assert_eq!(hostel.submit_query("fees").outcome, MatchOutcome::Unclear);
        assert_eq!(hostel.submit_query("hostel").reply, "rooms");
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ChatEngine>();
    }
}

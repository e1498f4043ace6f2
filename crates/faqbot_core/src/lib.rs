pub mod encode;
pub mod engine;
pub mod error;
pub mod eval;
pub mod knowledge;
pub mod model;
pub mod retrieval;
pub mod settings;
pub mod storage;
pub mod suggest;
pub mod tokenize;
pub mod vocabulary;

pub use encode::{encode_keywords, encode_query};
pub use engine::ChatEngine;
pub use error::{KbError, Result};
pub use eval::{
    evaluate_cases, load_cases, EvalCase, EvalOutcome, EvalSummary, DEFAULT_REQUIRED_PASS_RATE,
};
pub use knowledge::KnowledgeBase;
pub use model::{KnowledgeEntry, MatchOutcome, MatchResult, TermVector};
pub use retrieval::{cosine_similarity, get_best_answer, top_match};
pub use settings::{
    EngineSettings, DEFAULT_EMPTY_REPLY, DEFAULT_MIN_SUGGESTION_LEN, DEFAULT_SUGGESTION_LIMIT,
    DEFAULT_THRESHOLD, DEFAULT_UNCLEAR_REPLIES, EMPTY_INTENT, UNCLEAR_INTENT,
};
pub use storage::{load_entries, parse_entries_json, parse_entries_jsonl};
pub use suggest::suggest;
pub use tokenize::tokenize;
pub use vocabulary::Vocabulary;

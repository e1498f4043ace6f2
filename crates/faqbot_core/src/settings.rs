use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{KbError, Result};

pub const DEFAULT_THRESHOLD: f32 = 0.05;
pub const DEFAULT_SUGGESTION_LIMIT: usize = 4;
pub const DEFAULT_MIN_SUGGESTION_LEN: usize = 2;
pub const EMPTY_INTENT: &str = "empty";
pub const UNCLEAR_INTENT: &str = "unclear";

pub const DEFAULT_EMPTY_REPLY: &str = "Please ask me something about the college! Try asking about fees, admissions, courses, placements, etc.";

pub const DEFAULT_UNCLEAR_REPLIES: [&str; 3] = [
    "I'm not sure about that. Try asking: What are the fees? When does admission start? What courses are available?",
    "Hmm, that's outside my knowledge base. Ask me about admissions, courses, fees, facilities, or placements!",
    "I didn't quite understand. Try rephrasing your question. What would you like to know?",
];

/// Tunables of the responder. Every field has a default, so a settings file
/// only needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub threshold: f32,
    pub empty_reply: String,
    pub unclear_replies: Vec<String>,
    pub suggestion_limit: usize,
    pub min_suggestion_len: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            empty_reply: DEFAULT_EMPTY_REPLY.to_string(),
            unclear_replies: DEFAULT_UNCLEAR_REPLIES.iter().map(|s| s.to_string()).collect(),
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            min_suggestion_len: DEFAULT_MIN_SUGGESTION_LEN,
        }
    }
}

impl EngineSettings {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(KbError::InvalidSettings(format!(
                "threshold must be within [0, 1], got {}",
                self.threshold
            )));
        }
        if self.unclear_replies.is_empty() {
            return Err(KbError::InvalidSettings(
                "unclear_replies must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

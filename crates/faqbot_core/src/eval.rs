use std::path::Path;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::engine::ChatEngine;
use crate::error::Result;
use crate::model::MatchOutcome;

pub const DEFAULT_REQUIRED_PASS_RATE: f32 = 0.85;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalCase {
    pub case_id: String,
    pub question: String,
    pub expected_outcome: MatchOutcome,
    #[serde(default)]
    pub expected_intent: Option<String>,
    #[serde(default)]
    pub min_confidence: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalOutcome {
    pub case_id: String,
    pub passed: bool,
    pub actual_outcome: MatchOutcome,
    pub actual_intent: String,
    pub confidence: f32,
    pub latency_ms: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub pass_rate: f32,
    pub outcomes: Vec<EvalOutcome>,
}

impl EvalSummary {
    pub fn meets(&self, required_pass_rate: f32) -> bool {
        self.pass_rate >= required_pass_rate
    }
}

pub fn load_cases(path: &Path) -> Result<Vec<EvalCase>> {
    let file = std::fs::File::open(path)?;
    Ok(serde_json::from_reader(file)?)
}

impl EvalCase {
    fn accepts(&self, outcome: MatchOutcome, intent: &str, confidence: f32) -> bool {
        if self.expected_outcome != outcome {
            return false;
        }

        if let Some(expected) = &self.expected_intent {
            if expected != intent {
                return false;
            }
        }

        if let Some(min) = self.min_confidence {
            if confidence < min {
                return false;
            }
        }

        true
    }
}

/// Replays every case through the engine. Deflection text is irrelevant to
/// pass/fail, so a fixed seed is used.
pub fn evaluate_cases(engine: &ChatEngine, cases: &[EvalCase]) -> EvalSummary {
    let mut rng = StdRng::seed_from_u64(0);
    let mut outcomes = Vec::with_capacity(cases.len());

    for case in cases {
        let start = Instant::now();
        let result = engine.submit_query_with_rng(&case.question, &mut rng);
        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

        outcomes.push(EvalOutcome {
            case_id: case.case_id.clone(),
            passed: case.accepts(result.outcome, &result.intent, result.confidence),
            actual_outcome: result.outcome,
            actual_intent: result.intent,
            confidence: result.confidence,
            latency_ms,
        });
    }

    let total = outcomes.len();
    let passed = outcomes.iter().filter(|o| o.passed).count();
    let failed = total.saturating_sub(passed);
    let pass_rate = if total == 0 {
        0.0
    } else {
        passed as f32 / total as f32
    };

    EvalSummary {
        total,
        passed,
        failed,
        pass_rate,
        outcomes,
    }
}

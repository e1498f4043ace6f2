use std::io::Write;

use anyhow::{bail, Result};
use faqbot_core::{EvalSummary, MatchResult, Vocabulary};
use serde::Serialize;

const META_INTENT_CHARS: usize = 40;

/// The metadata line shown under a bot reply.
pub fn format_meta(result: &MatchResult) -> String {
    let intent: String = result.intent.chars().take(META_INTENT_CHARS).collect();
    format!(
        "Match: {:.1}% | Q: {}...",
        result.confidence * 100.0,
        intent
    )
}

pub fn write_match<W: Write>(out: &mut W, format: &str, result: &MatchResult) -> Result<()> {
    match format {
        "text" => {
            writeln!(out, "{}", result.reply)?;
            writeln!(out, "{}", format_meta(result))?;
        }
        "json" => writeln!(out, "{}", serde_json::to_string_pretty(result)?)?,
        other => bail!("Unknown output format: {other}"),
    }
    Ok(())
}

pub fn write_vocab<W: Write>(out: &mut W, format: &str, vocabulary: &Vocabulary) -> Result<()> {
    match format {
        "text" => {
            for term in vocabulary.terms() {
                writeln!(out, "{term}")?;
            }
        }
        "json" => writeln!(out, "{}", serde_json::to_string_pretty(vocabulary.terms())?)?,
        other => bail!("Unknown output format: {other}"),
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonEval<'a> {
    run_id: &'a str,
    required_pass_rate: f32,
    meets_threshold: bool,
    #[serde(flatten)]
    summary: &'a EvalSummary,
}

pub fn write_eval<W: Write>(
    out: &mut W,
    format: &str,
    run_id: &str,
    summary: &EvalSummary,
    required_pass_rate: f32,
) -> Result<()> {
    match format {
        "text" => {
            writeln!(
                out,
                "run_id={} total={} passed={} failed={} pass_rate={:.4} required={:.4} meets_threshold={}",
                run_id,
                summary.total,
                summary.passed,
                summary.failed,
                summary.pass_rate,
                required_pass_rate,
                summary.meets(required_pass_rate)
            )?;
            for o in &summary.outcomes {
                writeln!(
                    out,
                    "case={} passed={} outcome={:?} intent={} confidence={:.4} latency={:.3}ms",
                    o.case_id, o.passed, o.actual_outcome, o.actual_intent, o.confidence, o.latency_ms
                )?;
            }
        }
        "json" => {
            let json = JsonEval {
                run_id,
                required_pass_rate,
                meets_threshold: summary.meets(required_pass_rate),
                summary,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        }
        other => bail!("Unknown output format: {other}"),
    }
    Ok(())
}

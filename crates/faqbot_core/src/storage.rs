use std::path::Path;

use serde_json::Value;
use tracing::{info, warn};

use crate::error::{KbError, Result};
use crate::model::KnowledgeEntry;

/// Loads knowledge entries from a `.jsonl` file (one record per line) or a
/// JSON array file (anything else).
pub fn load_entries(path: &Path) -> Result<Vec<KnowledgeEntry>> {
    let raw = std::fs::read_to_string(path)?;
    let entries = match path.extension().and_then(|e| e.to_str()) {
        Some("jsonl") => parse_entries_jsonl(&raw)?,
        _ => parse_entries_json(&raw)?,
    };
    info!(path = %path.display(), entries = entries.len(), "loaded knowledge base");
    Ok(entries)
}

pub fn parse_entries_json(raw: &str) -> Result<Vec<KnowledgeEntry>> {
    let value: Value = serde_json::from_str(raw)?;
    let Value::Array(records) = value else {
        return Err(KbError::InvalidFormat(
            "expected a JSON array of records".to_string(),
        ));
    };

    Ok(records
        .iter()
        .enumerate()
        .filter_map(|(i, record)| validate_record(i, record))
        .collect())
}

pub fn parse_entries_jsonl(raw: &str) -> Result<Vec<KnowledgeEntry>> {
    let mut entries = Vec::new();

    for (i, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record: Value = serde_json::from_str(line)
            .map_err(|err| KbError::InvalidFormat(format!("line {}: {err}", i + 1)))?;
        if let Some(entry) = validate_record(i, &record) {
            entries.push(entry);
        }
    }

    Ok(entries)
}

/// Turns one raw record into an entry, or rejects it with a warning.
/// Missing or null `keywords` become an empty list.
fn validate_record(index: usize, record: &Value) -> Option<KnowledgeEntry> {
    let Some(fields) = record.as_object() else {
        warn!(index, "skipping record: not an object");
        return None;
    };

    let question = fields.get("question").and_then(Value::as_str);
    let answer = fields.get("answer").and_then(Value::as_str);
    let (Some(question), Some(answer)) = (question, answer) else {
        warn!(index, "skipping record: missing string `question` or `answer`");
        return None;
    };

    let keywords = match fields.get("keywords") {
        None | Some(Value::Null) => {
            warn!(index, question, "record has no keywords; it can never match");
            Vec::new()
        }
        Some(Value::Array(items)) => {
            let kept: Vec<String> = items
                .iter()
                .filter_map(|k| k.as_str().map(str::to_string))
                .collect();
            if kept.len() != items.len() {
                warn!(
                    index,
                    dropped = items.len() - kept.len(),
                    "dropping non-string keywords"
                );
            }
            kept
        }
        Some(_) => {
            warn!(index, question, "`keywords` is not an array; treating as empty");
            Vec::new()
        }
    };

    Some(KnowledgeEntry {
        question: question.to_string(),
        answer: answer.to_string(),
        keywords,
    })
}

use std::io::{BufRead, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use faqbot_core::ChatEngine;
use rand::Rng;
use tracing::debug;

use crate::output::format_meta;

/// Reads one question per line and writes the reply plus its metadata line.
/// Blank lines are skipped; `quit` or `exit` ends the session.
pub fn run_chat<I, W, R>(
    engine: &ChatEngine,
    input: I,
    out: &mut W,
    thinking_delay: Duration,
    rng: &mut R,
) -> Result<usize>
where
    I: BufRead,
    W: Write,
    R: Rng + ?Sized,
{
    let mut answered = 0;

    for line in input.lines() {
        let line = line.context("read chat input")?;
        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        if matches!(message, "quit" | "exit") {
            break;
        }

        // Presentation-only pause before the reply appears.
        if !thinking_delay.is_zero() {
            std::thread::sleep(thinking_delay);
        }

        let result = engine.submit_query_with_rng(message, rng);
        debug!(outcome = ?result.outcome, confidence = result.confidence, "answered chat line");
        writeln!(out, "> {}", result.reply)?;
        writeln!(out, "  {}", format_meta(&result))?;
        out.flush()?;
        answered += 1;
    }

    Ok(answered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use faqbot_core::{EngineSettings, KnowledgeEntry};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    fn engine() -> ChatEngine {
        ChatEngine::from_entries(
            vec![KnowledgeEntry::new(
                "What are the fees?",
                "Fees are 50000.",
                ["fees", "admission"],
            )],
            EngineSettings::default(),
        )
    }

    #[test]
    fn answers_each_non_blank_line_until_quit() {
        let input = Cursor::new("tell me about fees\n\n   \nwhat is the weather\nquit\nfees\n");
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(3);

        let answered =
            run_chat(&engine(), input, &mut out, Duration::ZERO, &mut rng).expect("chat");
        let text = String::from_utf8(out).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(answered, 2);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "> Fees are 50000.");
        assert_eq!(lines[1], "  Match: 70.7% | Q: What are the fees?...");
        assert!(lines[3].starts_with("  Match: 0.0% | Q: unclear"));
    }
}

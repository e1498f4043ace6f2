use std::path::PathBuf;

use clap::{Parser, Subcommand};
use faqbot_core::DEFAULT_REQUIRED_PASS_RATE;

#[derive(Debug, Parser)]
#[command(name = "faqbot", version, about = "Keyword FAQ chat bot")]
pub struct Cli {
    /// Knowledge base file: a JSON array of records, or JSON Lines when the
    /// extension is `.jsonl`.
    #[arg(long, global = true, default_value = "faq.json")]
    pub kb: PathBuf,

    /// JSON file overriding engine settings (threshold, replies, suggestion limits).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Minimum similarity for a match; overrides the settings file.
    #[arg(long, global = true)]
    pub threshold: Option<f32>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Answer a single question.
    Ask {
        #[arg(long)]
        question: String,
        #[arg(long, default_value = "text")]
        output: String,
        /// Seed for picking the "not sure" reply.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Answer questions read line by line from stdin.
    Chat {
        #[arg(long, default_value = "0ms")]
        thinking_delay: humantime::Duration,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List questions matching partially typed text.
    Suggest {
        #[arg(long)]
        text: String,
    },
    /// List every question in the knowledge base.
    Questions,
    /// Print the keyword vocabulary.
    Vocab {
        #[arg(long, default_value = "text")]
        output: String,
    },
    /// Run evaluation cases against the knowledge base.
    Eval {
        #[arg(long)]
        cases: PathBuf,
        #[arg(long, default_value_t = DEFAULT_REQUIRED_PASS_RATE)]
        min_pass_rate: f32,
        #[arg(long, default_value = "text")]
        output: String,
    },
}

impl Cli {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(t) = self.threshold {
            if !(0.0..=1.0).contains(&t) {
                return Err(format!("threshold must be within [0, 1], got {t}"));
            }
        }

        if let Commands::Eval { min_pass_rate, .. } = &self.command {
            if !(0.0..=1.0).contains(min_pass_rate) {
                return Err(format!(
                    "min-pass-rate must be within [0, 1], got {min_pass_rate}"
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn parses_defaults() {
        let args = ["faqbot", "ask", "--question", "fees?"];
        let cli = Cli::try_parse_from(args).expect("parse");
        assert_eq!(cli.kb.to_str(), Some("faq.json"));
        assert!(cli.config.is_none());
        match cli.command {
            Commands::Ask {
                question,
                output,
                seed,
            } => {
                assert_eq!(question, "fees?");
                assert_eq!(output, "text");
                assert_eq!(seed, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = [
            "faqbot",
            "chat",
            "--kb",
            "kb.jsonl",
            "--threshold",
            "0.3",
            "--thinking-delay",
            "600ms",
        ];
        let cli = Cli::try_parse_from(args).expect("parse");
        assert_eq!(cli.kb.to_str(), Some("kb.jsonl"));
        assert_eq!(cli.threshold, Some(0.3));
        match cli.command {
            Commands::Chat { thinking_delay, .. } => {
                assert_eq!(thinking_delay.as_ref().as_millis(), 600);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let args = ["faqbot", "--threshold", "2", "questions"];
        let cli = Cli::try_parse_from(args).expect("parse");
        assert!(cli.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_pass_rate() {
        let args = ["faqbot", "eval", "--cases", "c.json", "--min-pass-rate", "1.5"];
        let cli = Cli::try_parse_from(args).expect("parse");
        assert!(cli.validate().is_err());
    }
}

mod chat;
mod cli;
mod output;

use std::io;

use anyhow::{bail, Context, Result};
use clap::Parser;
use faqbot_core::{evaluate_cases, load_cases, ChatEngine, EngineSettings};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

fn load_settings(cli: &Cli) -> Result<EngineSettings> {
    let mut settings = match &cli.config {
        Some(path) => EngineSettings::load(path)
            .with_context(|| format!("load settings {}", path.display()))?,
        None => EngineSettings::default(),
    };
    if let Some(threshold) = cli.threshold {
        settings.threshold = threshold;
    }
    Ok(settings)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    cli.validate().map_err(anyhow::Error::msg)?;
    let settings = load_settings(&cli)?;

    match &cli.command {
        Commands::Ask {
            question,
            output: format,
            seed,
        } => {
            let engine = ChatEngine::load_or_empty(&cli.kb, settings);
            let result = engine.submit_query_with_rng(question.trim(), &mut make_rng(*seed));
            output::write_match(&mut io::stdout(), format, &result)?;
        }
        Commands::Chat {
            thinking_delay,
            seed,
        } => {
            let engine = ChatEngine::load_or_empty(&cli.kb, settings);
            let stdin = io::stdin();
            chat::run_chat(
                &engine,
                stdin.lock(),
                &mut io::stdout(),
                (*thinking_delay).into(),
                &mut make_rng(*seed),
            )?;
        }
        Commands::Suggest { text } => {
            let engine = ChatEngine::load_or_empty(&cli.kb, settings);
            for entry in engine.suggest(text) {
                println!("{}", entry.question);
            }
        }
        Commands::Questions => {
            let engine = ChatEngine::load_or_empty(&cli.kb, settings);
            for question in engine.knowledge_base().questions() {
                println!("{question}");
            }
        }
        Commands::Vocab { output: format } => {
            let engine = ChatEngine::load(&cli.kb, settings)
                .with_context(|| format!("load knowledge base {}", cli.kb.display()))?;
            output::write_vocab(&mut io::stdout(), format, engine.knowledge_base().vocabulary())?;
        }
        Commands::Eval {
            cases,
            min_pass_rate,
            output: format,
        } => {
            let engine = ChatEngine::load(&cli.kb, settings)
                .with_context(|| format!("load knowledge base {}", cli.kb.display()))?;
            let cases = load_cases(cases)
                .with_context(|| format!("load eval cases {}", cases.display()))?;
            let run_id = format!("eval-{}", chrono::Utc::now().timestamp_millis());
            let summary = evaluate_cases(&engine, &cases);
            output::write_eval(&mut io::stdout(), format, &run_id, &summary, *min_pass_rate)?;

            if !summary.meets(*min_pass_rate) {
                bail!(
                    "pass rate {:.4} below required {:.4}",
                    summary.pass_rate,
                    min_pass_rate
                );
            }
        }
    }

    Ok(())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

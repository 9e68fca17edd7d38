//! Task parser CLI - extract task drafts from pasted text.

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::disallowed_macros)]
#![allow(clippy::uninlined_format_args)]

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use task_parser::entities::{API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL, MODEL_ENV, TIMEOUT_ENV};
use task_parser::{ui, DraftSource, ParseOutcome, ParserConfig, TaskParser};

/// Output format for extracted drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Pretty-printed JSON array
    Json,
    /// Human-readable table
    Table,
}

#[derive(Parser)]
#[command(name = "task-parser")]
#[command(about = "Extract tasks from unstructured text", long_about = None)]
#[command(version)]
struct Cli {
    /// File to read; stdin when omitted or "-"
    input: Option<PathBuf>,

    /// Ask the completion model first (needs an API key)
    #[arg(long)]
    ai: bool,

    /// Completion-service credential
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>,

    /// Completion model
    #[arg(long, env = MODEL_ENV, default_value = "gpt-4o-mini")]
    model: String,

    /// Chat-completions endpoint
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Give up on the model after this many seconds
    #[arg(long, env = TIMEOUT_ENV)]
    timeout_secs: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn parser_config(&self) -> ParserConfig {
        let mut config = ParserConfig::new()
            .with_model(&self.model)
            .with_base_url(&self.base_url);
        if self.ai {
            if let Some(key) = &self.api_key {
                config = config.with_api_key(key);
            }
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout_secs(secs);
        }
        config
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        EnvFilter::new("task_parser=debug,info")
    } else {
        EnvFilter::new("task_parser=info,warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Err(e) = run(cli).await {
        ui::print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let text = read_input(cli.input.as_ref())?;

    let config = cli.parser_config();
    if cli.ai && !config.has_credential() {
        ui::print_warning(&format!(
            "--ai given but {} is not set; using heuristics only",
            API_KEY_ENV
        ));
    }

    let parser = TaskParser::from_config(config);
    tracing::debug!(uses_model = parser.uses_model(), chars = text.len(), "Parsing input");

    let outcome = parser.parse_detailed(&text).await;
    if cli.ai && parser.uses_model() && outcome.source == DraftSource::Heuristic {
        ui::print_warning("Model extraction failed; showing heuristic results");
    }

    print_outcome(&outcome, cli.format)
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn print_outcome(outcome: &ParseOutcome, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&outcome.drafts)
                .context("Failed to serialize drafts")?;
            println!("{json}");
        }
        OutputFormat::Table => {
            if outcome.drafts.is_empty() {
                ui::print_info("No tasks found");
            } else {
                println!("{}", ui::draft_table(&outcome.drafts));
                println!();
                ui::print_info(&ui::summary(outcome.drafts.len(), outcome.source));
            }
        }
    }
    Ok(())
}

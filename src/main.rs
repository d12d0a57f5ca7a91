//! Command-line entry point: evaluate one submission and print the result.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use ahp_weights::adapters::read_payload;
use ahp_weights::config::AppConfig;

/// Derive AHP weights and consistency ratios from a JSON submission.
#[derive(Debug, Parser)]
#[command(name = "ahp-weights", version, about)]
struct Cli {
    /// Submission file; reads stdin when omitted
    input: Option<PathBuf>,

    /// Print one row per (group, item) instead of the nested result
    #[arg(long)]
    rows: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {}", e);
            return ExitCode::from(2);
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("configuration error: {}", e);
        return ExitCode::from(2);
    }
    if let Err(e) = config.logging.init() {
        eprintln!("logging error: {}", e);
        return ExitCode::from(2);
    }

    match run(&cli, &config) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(message) => {
            error!(error = %message, "Evaluation failed");
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &AppConfig) -> Result<String, String> {
    let evaluator = config.engine.evaluator().map_err(|e| e.to_string())?;
    let payload = read_payload(cli.input.as_deref()).map_err(|e| e.to_string())?;
    let result = evaluator
        .evaluate_json(&payload)
        .map_err(|e| e.to_string())?;

    let rendered = match (cli.rows, cli.pretty) {
        (true, true) => serde_json::to_string_pretty(&result.to_rows()),
        (true, false) => serde_json::to_string(&result.to_rows()),
        (false, true) => serde_json::to_string_pretty(&result),
        (false, false) => serde_json::to_string(&result),
    };
    rendered.map_err(|e| e.to_string())
}

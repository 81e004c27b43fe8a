//! Command-line harness for the calculator engine.
//!
//! ```bash
//! # Press keys given as arguments, print the final display
//! abacus 1 2 + 7 =
//!
//! # Interactive: one line of space-separated keys at a time
//! echo "5 × 6 − 4 =" | abacus --json
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use abacus::{Calculator, CalculatorBuilder, CalculatorConfig, DisplaySnapshot};
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Drive a four-function calculator with key labels.
///
/// Keys: 0-9 . + - − * × / ÷ = AC ⌫ ± %
#[derive(Parser, Debug)]
#[command(name = "abacus")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Key labels to press; reads stdin line by line when omitted
    #[arg(value_name = "KEY", allow_hyphen_values = true)]
    keys: Vec<String>,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Significant digits for non-integer values (overrides the config file)
    #[arg(long)]
    precision: Option<usize>,

    /// Print the display as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("ABACUS_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut calc = build_calculator(&cli)?;

    let mut out = io::stdout().lock();
    if !cli.keys.is_empty() {
        calc.press_all(cli.keys.iter().map(String::as_str));
        return print_display(&mut out, &calc.display(), cli.json);
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        calc.press_all(line.split_whitespace());
        print_display(&mut out, &calc.display(), cli.json)?;
    }
    tracing::debug!(
        transitions = calc.history().len(),
        errors = calc.error_count(),
        span = ?calc.history().duration(),
        "session finished"
    );
    Ok(())
}

fn build_calculator(cli: &Cli) -> Result<Calculator> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            CalculatorConfig::from_json(&text)?
        }
        None => CalculatorConfig::default(),
    };
    if let Some(digits) = cli.precision {
        config.significant_digits = digits;
    }

    Ok(CalculatorBuilder::new().config(config).build()?)
}

fn print_display(out: &mut impl Write, display: &DisplaySnapshot, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(display)?)?;
    } else {
        writeln!(out, "{display}")?;
    }
    Ok(())
}

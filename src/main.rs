//! stepdoc — generate the step reference of a behavioral-test step library.
//!
//! Scans `src/*.php` traits, lints the step naming conventions and splices
//! the rendered markdown between two marker lines of a document:
//!
//! - **update** (default): `stepdoc -p . -o STEPS.md`
//! - **check**: `stepdoc --check` fails when the document is out of date
//! - **print**: `stepdoc --stdout` writes the reference to stdout

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use std::fs;
use std::path::PathBuf;
use stepdoc::{parser, render, replace, validate};
use tracing_subscriber::EnvFilter;

const DEFAULT_START_MARKER: &str = "[//]: # (BEGIN)";
const DEFAULT_END_MARKER: &str = "[//]: # (END)";

#[derive(Parser)]
#[command(
    name = "stepdoc",
    about = "Generate and lint the step reference of step-definition traits"
)]
struct Cli {
    /// Project root containing src/ and tests/behat/features/
    #[arg(short = 'p', long, default_value = ".")]
    path: PathBuf,

    /// Document to update, relative to the project root
    #[arg(short = 'o', long, default_value = "STEPS.md")]
    output: PathBuf,

    /// Line marking the start of the generated region
    #[arg(long, default_value = DEFAULT_START_MARKER)]
    start_marker: String,

    /// Line marking the end of the generated region
    #[arg(long, default_value = DEFAULT_END_MARKER)]
    end_marker: String,

    /// Do not write; fail if the document is out of date
    #[arg(long)]
    check: bool,

    /// Skip step naming validation
    #[arg(long)]
    no_validate: bool,

    /// Print the rendered reference instead of updating the document
    #[arg(long)]
    stdout: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let info = parser::scan_dir(&cli.path)?;

    if !cli.no_validate {
        let findings = validate::validate(&info);
        if !findings.is_empty() {
            eprintln!("Step naming issues:");
            for finding in &findings {
                eprint!("{}", finding);
            }
            bail!("{} step naming issue(s) found", findings.len());
        }
    }

    let markdown = render::render(&info, &cli.path)?;

    if cli.stdout {
        print!("{}", markdown);
        return Ok(());
    }

    update_document(&cli, &markdown)
}

/// Splice the reference into the target document, or compare in check mode.
fn update_document(cli: &Cli, markdown: &str) -> Result<()> {
    let target = cli.path.join(&cli.output);
    let current = fs::read_to_string(&target)
        .with_context(|| format!("failed to read {}", target.display()))?;

    let updated = replace::replace(&current, &cli.start_marker, &cli.end_marker, markdown)
        .with_context(|| format!("failed to update {}", target.display()))?;

    if updated == current {
        tracing::info!(file = %target.display(), "document is up to date");
        return Ok(());
    }

    if cli.check {
        bail!(
            "{} is out of date; run stepdoc to regenerate it",
            target.display()
        );
    }

    fs::write(&target, &updated)
        .with_context(|| format!("failed to write {}", target.display()))?;
    tracing::info!(file = %target.display(), "document updated");
    Ok(())
}

/// Log to stderr. `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

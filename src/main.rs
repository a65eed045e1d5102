//! CLI front-end for codebase-name.
//!
//! Normalizes git clone URLs given as arguments, or read one per line from
//! stdin when no arguments are supplied.
//!
//! # Usage
//!
//! ```bash
//! # Normalize a single clone URL
//! codebase-name git@github.com:sourcegraph/sourcegraph.git
//!
//! # Normalize a remote listing from git itself
//! git remote -v | awk '{print $2}' | sort -u | codebase-name
//!
//! # Machine-readable output
//! codebase-name --json https://dev.azure.com/org/project/_git/repo
//! ```
//!
//! Exits non-zero if any input failed to normalize. Log verbosity follows
//! `RUST_LOG` (default `warn`).

use std::io::BufRead;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use codebase_name::codebase_name_or_error;

/// Normalize git clone URLs to canonical codebase names.
#[derive(Parser)]
#[command(name = "codebase-name")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Clone URLs to normalize; reads stdin when omitted
    urls: Vec<String>,

    /// Emit one JSON object per input instead of plain text
    #[arg(long)]
    json: bool,

    /// Suppress per-input failure messages on stderr
    #[arg(short, long)]
    quiet: bool,
}

/// One input's outcome, for `--json` output.
#[derive(Serialize)]
struct Record<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    codebase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let inputs = if cli.urls.is_empty() {
        read_stdin_urls().context("Failed to read clone URLs from stdin")?
    } else {
        cli.urls.clone()
    };

    let mut failures = 0usize;

    for input in &inputs {
        match codebase_name_or_error(input) {
            Ok(name) => {
                if cli.json {
                    let record = Record {
                        input,
                        codebase: Some(name),
                        error: None,
                    };
                    println!("{}", serde_json::to_string(&record)?);
                } else {
                    println!("{name}");
                }
            }
            Err(err) => {
                failures += 1;
                tracing::debug!(url = input.as_str(), "normalization failed");
                if cli.json {
                    let record = Record {
                        input,
                        codebase: None,
                        error: Some(err.to_string()),
                    };
                    println!("{}", serde_json::to_string(&record)?);
                } else if !cli.quiet {
                    eprintln!("{} {err}", "error:".red().bold());
                }
            }
        }
    }

    if failures > 0 {
        if !cli.quiet && !cli.json {
            eprintln!(
                "{} {failures} of {} input(s) could not be normalized",
                "warning:".yellow().bold(),
                inputs.len()
            );
        }
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

/// Reads one clone URL per line from stdin, skipping blank lines.
fn read_stdin_urls() -> Result<Vec<String>> {
    let mut urls = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line.context("Failed to read line")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            urls.push(trimmed.to_string());
        }
    }
    Ok(urls)
}

// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! isf-sha256sum - compute and verify SHA-256 checksums.
//!
//! # Usage
//!
//! ```bash
//! # Hash files (or stdin with no arguments / "-")
//! isf-sha256sum hash a.bin b.bin > SHA256SUMS
//!
//! # Hash a literal string, BSD layout, base64 digest
//! isf-sha256sum hash --string abc --format bsd --encoding base64
//!
//! # Verify a manifest
//! isf-sha256sum check SHA256SUMS
//!
//! # Run the built-in known-answer vectors
//! isf-sha256sum self-test
//! ```
//!
//! Exit status: 0 on success, 1 when a checksum or self-test fails,
//! 2 on configuration or usage errors.

mod config;
mod manifest;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::{Encoding, OutputStyle, ToolConfig};
use isf_sha256::{compute, hash_file, hash_file_sized, hash_reader_sized, HashError, HashLimits};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

const STDIN_NAME: &str = "-";

#[derive(Parser, Debug)]
#[command(name = "isf-sha256sum")]
#[command(author = "naskel.com")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compute and verify SHA-256 checksums")]
struct Cli {
    /// Configuration file (TOML); falls back to $ISF_SHA256SUM_CONFIG
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level or filter directive (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Largest input read into memory (MiB)
    #[arg(long, global = true)]
    max_input_mb: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print checksums of files, stdin, or a literal string
    Hash {
        /// Files to hash ("-" for stdin; stdin when none given)
        files: Vec<PathBuf>,

        /// Hash this text instead of files
        #[arg(short, long, conflicts_with = "files")]
        string: Option<String>,

        /// Output layout
        #[arg(short, long, value_enum)]
        format: Option<OutputStyle>,

        /// Digest encoding
        #[arg(short, long, value_enum)]
        encoding: Option<Encoding>,
    },

    /// Verify files against a checksum manifest
    Check {
        /// Manifest path ("-" for stdin)
        manifest: PathBuf,

        /// Do not print OK lines
        #[arg(short, long)]
        quiet: bool,

        /// Fail when the manifest contains malformed lines
        #[arg(long)]
        strict: bool,
    },

    /// Verify the engine against built-in known-answer vectors
    SelfTest,

    /// Write a configuration file populated with the defaults
    GenConfig {
        /// Output file path
        #[arg(short, long, default_value = "isf-sha256sum.toml")]
        output: PathBuf,
    },
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("[ERROR] {:#}", e);
            std::process::exit(2);
        }
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();

    let mut config =
        ToolConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(mb) = cli.max_input_mb {
        config.max_input_mb = mb;
    }
    config.validate()?;

    init_tracing(&config.log_level);
    debug!(?config, "configuration resolved");

    match cli.command {
        Commands::Hash {
            files,
            string,
            format,
            encoding,
        } => {
            let style = format.unwrap_or(config.format);
            let encoding = encoding.unwrap_or(config.encoding);
            cmd_hash(&files, string.as_deref(), style, encoding, &config.limits())
        }
        Commands::Check {
            manifest,
            quiet,
            strict,
        } => cmd_check(&manifest, quiet, strict, &config.limits()),
        Commands::SelfTest => cmd_self_test(),
        Commands::GenConfig { output } => cmd_gen_config(&config, &output),
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_NAME
}

fn cmd_hash(
    files: &[PathBuf],
    string: Option<&str>,
    style: OutputStyle,
    encoding: Encoding,
    limits: &HashLimits,
) -> Result<bool> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if let Some(text) = string {
        let digest = compute(text.as_bytes());
        let name = format!("\"{}\"", text);
        let line = output::format_line(style, encoding, &name, text.len() as u64, &digest)?;
        writeln!(out, "{}", line)?;
        out.flush()?;
        return Ok(true);
    }

    let stdin_only = [PathBuf::from(STDIN_NAME)];
    let inputs = if files.is_empty() { &stdin_only[..] } else { files };

    let mut ok = true;
    for path in inputs {
        let name = path.display().to_string();
        let result = if is_stdin(path) {
            hash_reader_sized(io::stdin().lock(), STDIN_NAME, limits)
        } else {
            hash_file_sized(path, limits)
        };

        match result {
            Ok(hashed) => {
                let line =
                    output::format_line(style, encoding, &name, hashed.size, &hashed.digest)?;
                writeln!(out, "{}", line)?;
            }
            Err(e) => {
                out.flush()?;
                eprintln!("isf-sha256sum: {}", e);
                ok = false;
            }
        }
    }
    out.flush()?;
    Ok(ok)
}

#[derive(Debug, Default)]
struct CheckSummary {
    ok: usize,
    failed: usize,
    missing: usize,
    malformed: usize,
}

fn cmd_check(manifest_path: &Path, quiet: bool, strict: bool, limits: &HashLimits) -> Result<bool> {
    let text = if is_stdin(manifest_path) {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read manifest from stdin")?;
        text
    } else {
        std::fs::read_to_string(manifest_path)
            .with_context(|| format!("Failed to read manifest {}", manifest_path.display()))?
    };

    let parsed = manifest::parse(&text);
    let mut summary = CheckSummary {
        malformed: parsed.errors.len(),
        ..Default::default()
    };
    for err in &parsed.errors {
        warn!("{}: {}", manifest_path.display(), err);
    }

    if parsed.entries.is_empty() {
        warn!("{}: no properly formatted checksum lines found", manifest_path.display());
        return Ok(false);
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for entry in &parsed.entries {
        let shown = match output::escape_name(&entry.path) {
            Some(escaped) => format!("\\{}", escaped),
            None => entry.path.clone(),
        };
        match hash_file(&entry.path, limits) {
            Ok(actual) if actual == entry.expected => {
                summary.ok += 1;
                if !quiet {
                    writeln!(out, "{}: OK", shown)?;
                }
            }
            Ok(actual) => {
                summary.failed += 1;
                debug!(path = %entry.path, expected = %entry.expected, %actual, "mismatch");
                writeln!(out, "{}: FAILED", shown)?;
            }
            Err(HashError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                summary.missing += 1;
                writeln!(out, "{}: MISSING", shown)?;
            }
            Err(e) => {
                summary.failed += 1;
                warn!("{}", e);
                writeln!(out, "{}: FAILED", shown)?;
            }
        }
    }
    out.flush()?;

    info!(
        ok = summary.ok,
        failed = summary.failed,
        missing = summary.missing,
        malformed = summary.malformed,
        "check complete"
    );
    if summary.failed > 0 {
        warn!("{} computed checksum(s) did NOT match", summary.failed);
    }
    if summary.missing > 0 {
        warn!("{} listed file(s) could not be found", summary.missing);
    }
    if summary.malformed > 0 {
        warn!("{} line(s) are improperly formatted", summary.malformed);
    }

    Ok(summary.failed == 0 && summary.missing == 0 && !(strict && summary.malformed > 0))
}

fn cmd_self_test() -> Result<bool> {
    match isf_sha256::self_test() {
        Ok(()) => {
            info!(vectors = isf_sha256::KNOWN_ANSWERS.len(), "self test passed");
            println!("All tests passed.");
            Ok(true)
        }
        Err(failure) => {
            eprintln!("{}", failure);
            Ok(false)
        }
    }
}

fn cmd_gen_config(config: &ToolConfig, output: &Path) -> Result<bool> {
    let content = config.to_toml_document()?;
    std::fs::write(output, content)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!("Generated configuration file: {}", output.display());
    Ok(true)
}

//! Fastmatch CLI
//!
//! CLI tool for decoding filter lists and compiling their rules into
//! regex-compatible patterns.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use clap::{Parser, Subcommand};
use log::debug;
use serde::Serialize;

use fm_compiler::decode;
use fm_core::PatternCompiler;

#[derive(Parser)]
#[command(name = "fm-cli")]
#[command(about = "Fastmatch filter list compiler and tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode filter lists and compile every rule to a regex pattern
    Compile {
        /// Input filter list files
        #[arg(short, long, required = true)]
        input: Vec<String>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Keep `#` and `//` comment lines as rules instead of dropping them
        #[arg(long)]
        keep_comments: bool,

        /// Emit JSON records ({"pattern", "compiled"}) instead of plain lines
        #[arg(long)]
        json: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Decode filter lists and print the raw entries without compiling
    Decode {
        /// Input filter list files
        #[arg(short, long, required = true)]
        input: Vec<String>,

        /// Keep `#` and `//` comment lines as rules instead of dropping them
        #[arg(long)]
        keep_comments: bool,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read '{path}': {source}")]
    ReadInput {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    WriteOutput {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct CompiledRecord<'a> {
    pattern: &'a str,
    compiled: &'a str,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compile {
            input,
            output,
            keep_comments,
            json,
            verbose,
        } => cmd_compile(&input, output.as_deref(), !keep_comments, json, verbose),
        Commands::Decode {
            input,
            keep_comments,
        } => cmd_decode(&input, !keep_comments),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_compile(
    inputs: &[String],
    output: Option<&str>,
    strip_comments: bool,
    json: bool,
    verbose: bool,
) -> Result<(), CliError> {
    let start = Instant::now();
    let mut compiler = PatternCompiler::new();
    let mut lines = Vec::new();
    let mut total_lines = 0usize;

    for path in inputs {
        let content = read_list(path)?;
        let line_count = content.lines().count();
        total_lines += line_count;

        let mut entries = 0usize;
        for entry in decode(content.lines(), strip_comments) {
            let compiled = compiler.compile(entry.pattern());
            lines.push(if json {
                serde_json::to_string(&CompiledRecord {
                    pattern: entry.pattern(),
                    compiled: &compiled,
                })?
            } else {
                compiled
            });
            entries += 1;
        }

        debug!("{path}: {line_count} lines, {entries} rules");
        if verbose {
            println!(
                "  {} - {} lines, {} rules",
                Path::new(path).file_name().unwrap_or_default().to_string_lossy(),
                line_count,
                entries
            );
        }
    }

    if verbose {
        println!(
            "Compiled {} rules from {} lines in {:?}",
            lines.len(),
            total_lines,
            start.elapsed()
        );
    }

    write_lines(output, &lines)
}

fn cmd_decode(inputs: &[String], strip_comments: bool) -> Result<(), CliError> {
    let mut lines = Vec::new();
    for path in inputs {
        let content = read_list(path)?;
        lines.extend(
            decode(content.lines(), strip_comments).map(|entry| entry.into_pattern()),
        );
    }
    write_lines(None, &lines)
}

fn read_list(path: &str) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::ReadInput {
        path: path.to_string(),
        source,
    })
}

fn write_lines(output: Option<&str>, lines: &[String]) -> Result<(), CliError> {
    match output {
        Some(path) => {
            let mut text = lines.join("\n");
            if !text.is_empty() {
                text.push('\n');
            }
            fs::write(path, text).map_err(|source| CliError::WriteOutput {
                path: path.to_string(),
                source,
            })
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            for line in lines {
                // Broken pipes on stdout are not an error worth reporting.
                if writeln!(handle, "{line}").is_err() {
                    break;
                }
            }
            Ok(())
        }
    }
}

//! The `fmt` and `check` commands: format Go-like source files.
//!
//! Supports single files, stdin, and file lists. Multiple files are
//! formatted in parallel.

#![allow(
    clippy::struct_excessive_bools,
    reason = "FormatConfig has standard CLI config bool fields"
)]

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{read_file, read_stdin, write_file};
use crate::error::CliError;

/// Configuration for the format command.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FormatConfig {
    /// Check if files are formatted without modifying them.
    /// The command fails if any file would change.
    pub check: bool,
    /// Read from stdin and write to stdout.
    pub stdin: bool,
    /// Write the result here instead of back to the input file.
    pub output: Option<PathBuf>,
    /// Also report files that were already formatted.
    pub verbose: bool,
}

/// Result of formatting a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatResult {
    /// File was unchanged (already formatted).
    Unchanged,
    /// File was formatted and written.
    Formatted,
    /// File would be formatted (in check mode).
    WouldFormat,
}

/// Counts over a batch of files.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormatSummary {
    pub formatted: usize,
    pub unchanged: usize,
    pub errors: usize,
}

impl FormatSummary {
    /// `true` when nothing failed and, in check mode, nothing would change.
    pub fn is_clean(&self, config: &FormatConfig) -> bool {
        self.errors == 0 && !(config.check && self.formatted > 0)
    }
}

/// Lex and re-serialise `content` with canonical spacing.
pub fn format_source(content: &str) -> String {
    golex_fmt::format(&golex_lexer::tokenize_str(content))
}

/// Format a single file according to `config`.
pub fn format_file(path: &Path, config: &FormatConfig) -> Result<FormatResult, CliError> {
    let content = read_file(path)?;
    format_content(path, &content, config)
}

fn format_content(
    path: &Path,
    content: &str,
    config: &FormatConfig,
) -> Result<FormatResult, CliError> {
    let formatted = format_source(content);

    if let Some(output) = &config.output {
        if config.check {
            return Ok(changed_or(&formatted, content, FormatResult::WouldFormat));
        }
        write_file(output, &formatted)?;
        return Ok(FormatResult::Formatted);
    }

    if formatted == content {
        return Ok(FormatResult::Unchanged);
    }
    if config.check {
        return Ok(FormatResult::WouldFormat);
    }

    write_file(path, &formatted)?;
    Ok(FormatResult::Formatted)
}

fn changed_or(formatted: &str, content: &str, changed: FormatResult) -> FormatResult {
    if formatted == content {
        FormatResult::Unchanged
    } else {
        changed
    }
}

/// Format stdin to stdout.
///
/// In check mode nothing is printed; the result says whether the input was
/// already formatted.
pub fn format_stdin(config: &FormatConfig) -> Result<FormatResult, CliError> {
    let content = read_stdin()?;
    let formatted = format_source(&content);
    if config.check {
        return Ok(changed_or(&formatted, &content, FormatResult::WouldFormat));
    }
    print!("{formatted}");
    Ok(changed_or(&formatted, &content, FormatResult::Formatted))
}

/// Format many files in parallel, reporting each outcome as it happens.
pub fn format_files(paths: &[PathBuf], config: &FormatConfig) -> FormatSummary {
    let formatted_count = AtomicUsize::new(0);
    let unchanged_count = AtomicUsize::new(0);
    let error_count = AtomicUsize::new(0);

    paths.par_iter().for_each(|path| {
        let shown = path.display();
        match format_file(path, config) {
            Ok(FormatResult::Formatted) => {
                println!("Formatted: {shown}");
                formatted_count.fetch_add(1, Ordering::Relaxed);
            }
            Ok(FormatResult::WouldFormat) => {
                println!("Would format: {shown}");
                formatted_count.fetch_add(1, Ordering::Relaxed);
            }
            Ok(FormatResult::Unchanged) => {
                if config.verbose {
                    println!("Unchanged: {shown}");
                }
                unchanged_count.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                eprintln!("{e}");
                error_count.fetch_add(1, Ordering::Relaxed);
            }
        }
    });

    FormatSummary {
        formatted: formatted_count.load(Ordering::Relaxed),
        unchanged: unchanged_count.load(Ordering::Relaxed),
        errors: error_count.load(Ordering::Relaxed),
    }
}

/// Parse `fmt` arguments (everything after the command name).
pub fn parse_format_args(args: &[String]) -> Result<(FormatConfig, Vec<PathBuf>), CliError> {
    let mut config = FormatConfig::default();
    let mut paths = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--check" => config.check = true,
            "--stdin" => config.stdin = true,
            "--verbose" | "-v" => config.verbose = true,
            "-o" | "--output" => {
                let Some(output) = iter.next() else {
                    return Err(CliError::usage("error: -o requires a path"));
                };
                config.output = Some(PathBuf::from(output));
            }
            flag if flag.starts_with('-') => {
                return Err(CliError::usage(format!("error: unknown option '{flag}'")));
            }
            path => paths.push(PathBuf::from(path)),
        }
    }

    if config.stdin && !paths.is_empty() {
        return Err(CliError::usage("error: --stdin takes no file arguments"));
    }
    if !config.stdin && paths.is_empty() {
        return Err(CliError::usage("Usage: golex fmt <file.go>... [options]"));
    }
    if config.output.is_some() && paths.len() > 1 {
        return Err(CliError::usage("error: -o can only be used with a single file"));
    }

    Ok((config, paths))
}

/// Run the `fmt` command. `force_check` is set for `golex check`.
///
/// Returns `Ok(false)` when the command should exit unsuccessfully without
/// an error of its own (a check found unformatted files, or some files
/// failed).
pub fn run_format(args: &[String], force_check: bool) -> Result<bool, CliError> {
    let (mut config, paths) = parse_format_args(args)?;
    config.check |= force_check;

    if config.stdin {
        let result = format_stdin(&config)?;
        return Ok(!(config.check && result == FormatResult::WouldFormat));
    }

    let summary = format_files(&paths, &config);
    if config.check && summary.formatted > 0 {
        eprintln!(
            "{} file(s) would be reformatted, {} already formatted",
            summary.formatted, summary.unchanged
        );
    } else if config.verbose {
        println!(
            "{} file(s) formatted, {} unchanged",
            summary.formatted, summary.unchanged
        );
    }
    Ok(summary.is_clean(&config))
}

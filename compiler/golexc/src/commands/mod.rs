//! Command handlers for the golex CLI.
//!
//! Each submodule implements one command. Shared file helpers live here.

use std::io::Read;
use std::path::Path;

use crate::error::CliError;

mod fmt;
mod lex;

pub use fmt::{
    format_file, format_files, format_source, parse_format_args, run_format, FormatConfig,
    FormatResult, FormatSummary,
};
pub use lex::{lex_file, render_tokens};

/// Read a source file into a string.
pub fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_file(path: &Path, content: &str) -> Result<(), CliError> {
    std::fs::write(path, content).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Read all of stdin.
pub fn read_stdin() -> Result<String, CliError> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .map_err(CliError::Stdin)?;
    Ok(content)
}

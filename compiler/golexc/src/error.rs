//! CLI errors.
//!
//! The lexer and formatter never fail; everything here comes from the file
//! system or from the command line.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{}", read_message(.path, .source))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error reading from stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("{0}")]
    Usage(String),
}

impl CliError {
    pub fn usage(message: impl Into<String>) -> Self {
        CliError::Usage(message.into())
    }
}

fn read_message(path: &Path, source: &io::Error) -> String {
    let path = path.display();
    match source.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {source}"),
    }
}

//! The `lex` command: echo the token stream of a file.

use std::fmt::Write as _;
use std::path::Path;

use golex_ir::Token;
use golex_lexer::tokenize_str;

use super::read_file;
use crate::error::CliError;

/// One line per token, in their `Display` form.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        // Writing to a String cannot fail
        let _ = writeln!(out, "{token}");
    }
    out
}

/// Tokenize `path` and print every token to stdout.
pub fn lex_file(path: &Path) -> Result<(), CliError> {
    let source = read_file(path)?;
    let tokens = tokenize_str(&source);
    tracing::debug!(path = %path.display(), tokens = tokens.len(), "lexed");
    print!("{}", render_tokens(&tokens));
    Ok(())
}

//! Indentation synthesis.
//!
//! Source-level leading whitespace is never lexed. Instead the lexer keeps a
//! signed bracket depth and, when the first token of a line is committed,
//! splices `depth` INDENT tokens between the preceding NEWLINE and that
//! token.

use golex_ir::{Token, TokenCategory};
use tracing::trace;

/// Spaces per INDENT token unless configured otherwise.
pub const DEFAULT_INDENT_WIDTH: usize = 8;

/// Net count of open brackets among committed tokens.
///
/// May go negative on unbalanced input; synthesis then emits nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct BracketDepth(i64);

impl BracketDepth {
    /// Account for a committed bracket token.
    pub(crate) fn track(&mut self, lexeme: &str) {
        match lexeme {
            "{" | "(" | "[" => self.0 += 1,
            "}" | ")" | "]" => self.0 -= 1,
            _ => {}
        }
    }

    pub(crate) fn get(self) -> i64 {
        self.0
    }

    /// Number of INDENT tokens to synthesise: never negative.
    pub(crate) fn indent_units(self) -> usize {
        usize::try_from(self.0).unwrap_or(0)
    }
}

/// Whether `token`, committed right after a NEWLINE, starts an indented line.
///
/// Comments, comparison operators and raw (backtick) strings do not.
pub(crate) fn starts_indented_line(token: &Token) -> bool {
    match token.category() {
        TokenCategory::Operator | TokenCategory::Bracket => true,
        TokenCategory::String => token.lexeme().starts_with('"'),
        category => category.is_word(),
    }
}

/// Splice INDENT tokens before the last token if it opens a line.
///
/// Returns the number of tokens inserted. Only inserts; never removes or
/// reorders existing tokens.
pub(crate) fn splice_indents(tokens: &mut Vec<Token>, depth: BracketDepth, lexeme: &str) -> usize {
    let [.., before, last] = tokens.as_slice() else {
        return 0;
    };
    if before.category() != TokenCategory::Newline || !starts_indented_line(last) {
        return 0;
    }

    let units = depth.indent_units();
    if units > 0 {
        let at = tokens.len() - 1;
        tokens.splice(
            at..at,
            std::iter::repeat_with(|| Token::synthetic(TokenCategory::Indent, lexeme)).take(units),
        );
        trace!(units, "indentation spliced");
    }
    units
}

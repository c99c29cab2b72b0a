//! The token record.
//!
//! Tokens are created once by the lexer (or the formatter, for inserted
//! whitespace) and never modified afterwards, so fields are private and
//! exposed through accessors.

use std::fmt;

use crate::{Position, TokenCategory};

/// A lexed token.
///
/// `start` and `end` are the positions of the first and last consumed
/// characters, both inclusive. Synthesised tokens carry
/// [`Position::SYNTHETIC`] for both.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    category: TokenCategory,
    lexeme: String,
    start: Position,
    end: Position,
}

impl Token {
    /// Create a token for text read from the input.
    pub fn new(
        category: TokenCategory,
        lexeme: impl Into<String>,
        start: Position,
        end: Position,
    ) -> Self {
        Token {
            category,
            lexeme: lexeme.into(),
            start,
            end,
        }
    }

    /// Create a token that does not correspond to consumed input.
    pub fn synthetic(category: TokenCategory, lexeme: impl Into<String>) -> Self {
        Token::new(category, lexeme, Position::SYNTHETIC, Position::SYNTHETIC)
    }

    #[inline]
    pub fn category(&self) -> TokenCategory {
        self.category
    }

    #[inline]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Position {
        self.end
    }

    /// Returns `true` if this token was not read from the input.
    #[inline]
    pub fn is_synthetic(&self) -> bool {
        self.start.is_synthetic()
    }

    /// Returns `true` if this token's lexeme is exactly `text`.
    #[inline]
    pub fn is(&self, text: &str) -> bool {
        self.lexeme == text
    }
}

/// Renders as `{CATEGORY | lexeme} starts at : [line:L,column:C]`.
///
/// Control characters in the lexeme are escaped so a `NEWLINE` token stays
/// on one console line. Tokens with an empty lexeme omit the `| lexeme` part.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lexeme.is_empty() {
            write!(f, "{{{}}} starts at : {}", self.category, self.start)
        } else {
            write!(
                f,
                "{{{} | {}}} starts at : {}",
                self.category,
                self.lexeme.escape_debug(),
                self.start
            )
        }
    }
}

#[cfg(test)]
mod tests;

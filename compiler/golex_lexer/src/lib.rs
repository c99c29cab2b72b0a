//! Multi-automaton lexer for Go-like source.
//!
//! Characters are fed, one at a time, to one automaton per token pattern.
//! A string or comment, once opened, hides its body from every other
//! automaton. Leading whitespace is not lexed; INDENT tokens are instead
//! synthesised from the running bracket depth.
//!
//! # Usage
//!
//! ```
//! use golex_ir::TokenCategory;
//!
//! let tokens = golex_lexer::tokenize_str("x = 1");
//! let categories: Vec<_> = tokens.iter().map(|t| t.category()).collect();
//! assert_eq!(
//!     categories,
//!     [TokenCategory::Identifier, TokenCategory::Operator, TokenCategory::Number]
//! );
//! ```

mod arbiter;
pub mod context;
mod indent;
pub mod lexer;
pub mod source;

pub use context::ScanContext;
pub use indent::DEFAULT_INDENT_WIDTH;
pub use lexer::{Lexer, LexerConfig};
pub use source::split_lines;

use golex_ir::Token;

/// Tokenize a sequence of lines with the standard patterns.
pub fn tokenize<I, S>(lines: I) -> Vec<Token>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Lexer::new().tokenize(lines)
}

/// Tokenize a whole source text, split with [`split_lines`].
pub fn tokenize_str(text: &str) -> Vec<Token> {
    tokenize(split_lines(text))
}

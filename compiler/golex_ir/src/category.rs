//! Token categories.
//!
//! The category set is closed: every token the lexer emits or the formatter
//! inserts carries exactly one of these.

use std::fmt;

/// Category of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenCategory {
    /// Arithmetic, bitwise, assignment and punctuation: `+`, `<<=`, `:=`, `,`
    Operator,
    /// Comparison and logical operators: `<=`, `==`, `&&`
    ComparisonOperator,
    /// Quoted string, delimiters included: `"abc"`, `` `raw` ``
    String,
    /// Line or block comment, markers included
    Comment,
    /// Plain identifier
    Identifier,
    /// Reserved word: `func`, `return`
    Keyword,
    /// Built-in type name: `int`, `float64`
    DataType,
    /// Numeric literal: `42`, `1_000`
    Number,
    /// One of `[ ] { } ( )`
    Bracket,
    /// A single `\n`
    Newline,
    /// Synthesised indentation unit
    Indent,
    /// Inserted by the formatter between tokens
    Whitespace,
    /// Reserved for diagnostic extensions; the core never produces it
    Error,
}

impl TokenCategory {
    /// Every category, in declaration order.
    pub const ALL: [TokenCategory; 13] = [
        TokenCategory::Operator,
        TokenCategory::ComparisonOperator,
        TokenCategory::String,
        TokenCategory::Comment,
        TokenCategory::Identifier,
        TokenCategory::Keyword,
        TokenCategory::DataType,
        TokenCategory::Number,
        TokenCategory::Bracket,
        TokenCategory::Newline,
        TokenCategory::Indent,
        TokenCategory::Whitespace,
        TokenCategory::Error,
    ];

    /// Upper-case name used in token dumps.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenCategory::Operator => "OPERATOR",
            TokenCategory::ComparisonOperator => "COMPARISON_OPERATOR",
            TokenCategory::String => "STRING",
            TokenCategory::Comment => "COMMENT",
            TokenCategory::Identifier => "IDENTIFIER",
            TokenCategory::Keyword => "KEYWORD",
            TokenCategory::DataType => "DATA_TYPE",
            TokenCategory::Number => "NUMBER",
            TokenCategory::Bracket => "BRACKET",
            TokenCategory::Newline => "NEWLINE",
            TokenCategory::Indent => "INDENT",
            TokenCategory::Whitespace => "WHITESPACE",
            TokenCategory::Error => "ERROR",
        }
    }

    /// Categories produced by classifying an identifier-pattern match.
    pub const fn is_word(self) -> bool {
        matches!(
            self,
            TokenCategory::Identifier
                | TokenCategory::Keyword
                | TokenCategory::DataType
                | TokenCategory::Number
        )
    }

    /// Categories that never come from consumed input.
    pub const fn is_synthesized(self) -> bool {
        matches!(self, TokenCategory::Indent | TokenCategory::Whitespace)
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;

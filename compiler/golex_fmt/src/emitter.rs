//! Output Emitter
//!
//! Abstraction for output production during formatting. The formatter walks
//! the token stream once and writes tokens and inserted spaces to an emitter;
//! the emitter decides whether that becomes text or a new token sequence.

use golex_ir::{Token, TokenCategory};

/// Lexeme of every WHITESPACE token the formatter inserts.
pub const WHITESPACE_LEXEME: &str = " ";

/// Trait for emitting formatted output.
pub trait Emitter {
    /// Emit a token from the input stream.
    fn emit_token(&mut self, token: &Token);

    /// Emit one inserted space.
    fn emit_space(&mut self);
}

/// String-based emitter: concatenates lexemes.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    /// Create a new string emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Get the formatted output.
    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit_token(&mut self, token: &Token) {
        self.buffer.push_str(token.lexeme());
    }

    fn emit_space(&mut self) {
        self.buffer.push_str(WHITESPACE_LEXEME);
    }
}

/// Token-based emitter: rebuilds the sequence with WHITESPACE tokens
/// interleaved.
///
/// Inserted tokens are synthetic; input tokens are cloned unchanged.
#[derive(Default)]
pub struct TokenEmitter {
    tokens: Vec<Token>,
}

impl TokenEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tokens: Vec::with_capacity(capacity),
        }
    }

    pub fn output(self) -> Vec<Token> {
        self.tokens
    }
}

impl Emitter for TokenEmitter {
    fn emit_token(&mut self, token: &Token) {
        self.tokens.push(token.clone());
    }

    fn emit_space(&mut self) {
        self.tokens
            .push(Token::synthetic(TokenCategory::Whitespace, WHITESPACE_LEXEME));
    }
}

//! Formatter Core
//!
//! Walks adjacent token pairs once and asks the spacing rules whether a
//! WHITESPACE token belongs between them. Input tokens pass through
//! unchanged; only spaces are added.

use golex_ir::Token;
use tracing::trace;

use crate::emitter::{Emitter, StringEmitter, TokenEmitter};
use crate::spacing::{global_rules_map, RulesMap};

/// Spacing pass over a token stream, writing through an [`Emitter`].
pub struct Formatter<E: Emitter> {
    emitter: E,
    rules: &'static RulesMap,
    inserted: usize,
}

impl<E: Emitter> Formatter<E> {
    pub fn new(emitter: E) -> Self {
        Formatter {
            emitter,
            rules: global_rules_map(),
            inserted: 0,
        }
    }

    /// Emit `tokens` with spaces inserted between pairs that need one.
    pub fn format_tokens(&mut self, tokens: &[Token]) {
        let Some((first, rest)) = tokens.split_first() else {
            return;
        };

        self.emitter.emit_token(first);
        let mut left = first;
        for right in rest {
            if self.rules.lookup(left, right).needs_space() {
                trace!(left = left.lexeme(), right = right.lexeme(), "space inserted");
                self.emitter.emit_space();
                self.inserted += 1;
            }
            self.emitter.emit_token(right);
            left = right;
        }
    }

    /// Number of spaces inserted so far.
    pub fn inserted(&self) -> usize {
        self.inserted
    }

    pub fn finish(self) -> E {
        self.emitter
    }
}

/// Reconstruct source text from `tokens` with canonical spacing.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn format(tokens: &[Token]) -> String {
    let capacity = tokens.iter().map(|t| t.lexeme().len() + 1).sum();
    let mut formatter = Formatter::new(StringEmitter::with_capacity(capacity));
    formatter.format_tokens(tokens);
    tracing::debug!(spaces = formatter.inserted(), "formatted");
    formatter.finish().output()
}

/// `tokens` with WHITESPACE tokens interleaved where spacing is needed.
///
/// Concatenating the lexemes of the result gives [`format`]'s output.
pub fn with_whitespace(tokens: &[Token]) -> Vec<Token> {
    let mut formatter = Formatter::new(TokenEmitter::with_capacity(tokens.len() * 2));
    formatter.format_tokens(tokens);
    formatter.finish().output()
}

#[cfg(test)]
mod tests;

//! Live scanning state over a pattern's graph.
//!
//! An automaton owns the mutable half of a scan: current state, text
//! matched so far, and the span it covers. The graph itself is shared and
//! immutable.
//!
//! # Invariants
//!
//! - `text` is exactly the characters accepted since the last reset.
//! - `start` is `None` iff the automaton is idle (no character accepted since
//!   the last reset); it is set on the first accepted character and then
//!   stays fixed. `end` is the position of the latest accepted character.

use golex_ir::{Position, Token, TokenCategory};

use crate::graph::StateId;
use crate::patterns::Pattern;

/// One pattern's scanning position.
#[derive(Clone, Debug)]
pub struct Automaton<'p> {
    pattern: &'p Pattern,
    current: StateId,
    text: String,
    start: Option<Position>,
    end: Position,
}

impl<'p> Automaton<'p> {
    pub fn new(pattern: &'p Pattern) -> Self {
        Automaton {
            pattern,
            current: StateId::INITIAL,
            text: String::new(),
            start: None,
            end: Position::SYNTHETIC,
        }
    }

    pub fn pattern(&self) -> &'p Pattern {
        self.pattern
    }

    /// Base category of the underlying pattern.
    pub fn category(&self) -> TokenCategory {
        self.pattern.category()
    }

    /// Text accepted since the last reset.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Position of the first accepted character, if any.
    pub fn scan_start(&self) -> Option<Position> {
        self.start
    }

    /// `true` when nothing has been accepted since the last reset.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.start.is_none()
    }

    /// `true` when the current state is final, i.e. the text so far is a
    /// complete token. May hold mid-scan: `+` can stop, but `+=` may follow.
    #[inline]
    pub fn can_stop(&self) -> bool {
        self.pattern.graph().is_final(self.current)
    }

    /// Try to accept `c` at `at`. Returns `false`, leaving the automaton
    /// untouched, when no edge fires.
    pub fn advance(&mut self, c: char, at: Position) -> bool {
        let Some(next) = self.pattern.graph().try_advance(self.current, c) else {
            return false;
        };
        if self.start.is_none() {
            self.start = Some(at);
        }
        self.end = at;
        self.current = next;
        self.text.push(c);
        true
    }

    /// Return to the initial state, dropping any accepted text.
    pub fn reset(&mut self) {
        self.current = StateId::INITIAL;
        self.text.clear();
        self.start = None;
        self.end = Position::SYNTHETIC;
    }

    /// End the current scan.
    ///
    /// Returns a token if the automaton stopped in a final state; a partial
    /// match is discarded. The automaton is reset either way.
    pub fn finish(&mut self) -> Option<Token> {
        let token = match self.start {
            Some(start) if self.can_stop() => {
                let text = std::mem::take(&mut self.text);
                Some(Token::new(
                    self.pattern.category_of(&text),
                    text,
                    start,
                    self.end,
                ))
            }
            _ => None,
        };
        self.reset();
        token
    }
}

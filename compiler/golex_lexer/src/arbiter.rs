//! Overlap arbitration between automata.
//!
//! Every automaton sees the same characters, so their matches can overlap:
//! for `<=` the operator automaton finishes `<` and `=` while the comparison
//! automaton finishes `<=`. Finished matches are offered here as candidates
//! and released leftmost-longest, ties broken by pattern priority.
//!
//! A candidate is held while any automaton is still mid-scan from a position
//! at or before its start, since that scan may still produce a longer match.
//!
//! A candidate that starts inside a released token but runs past its end is
//! cut: it is set aside as a [`Cut`] so its tail can be scanned again. For
//! `&&=` the comparison `&&` is released and the operator `&=` is cut,
//! leaving `=` to be rescanned.

use golex_ir::{Position, Token};
use smallvec::SmallVec;
use tracing::trace;

#[derive(Debug)]
struct Candidate {
    token: Token,
    /// Index of the originating pattern; lower wins ties.
    priority: usize,
}

/// A match that overlapped a released token and extends past it.
#[derive(Debug)]
pub(crate) struct Cut {
    pub(crate) token: Token,
    pub(crate) priority: usize,
    /// End of the released token; only characters after it are unclaimed.
    pub(crate) after: Position,
}

#[derive(Debug, Default)]
pub(crate) struct Arbiter {
    pending: SmallVec<[Candidate; 4]>,
    cuts: SmallVec<[Cut; 2]>,
    /// End of the most recently released token.
    released_end: Option<Position>,
}

impl Arbiter {
    /// Offer a finished match.
    ///
    /// Matches that start inside an already released token are dropped, or
    /// cut if they run past its end.
    pub(crate) fn offer(&mut self, token: Token, priority: usize) {
        let candidate = Candidate { token, priority };
        match self.released_end {
            Some(end) if candidate.token.start() <= end => self.cut(candidate, end),
            _ => self.pending.push(candidate),
        }
    }

    fn cut(&mut self, candidate: Candidate, after: Position) {
        let Candidate { token, priority } = candidate;
        if token.end() > after {
            trace!(lexeme = token.lexeme(), "overlapped match cut");
            self.cuts.push(Cut {
                token,
                priority,
                after,
            });
        } else {
            trace!(lexeme = token.lexeme(), "overlapped match dropped");
        }
    }

    /// Take the next cut match whose tail still needs scanning.
    pub(crate) fn pop_cut(&mut self) -> Option<Cut> {
        self.cuts.pop()
    }

    /// Release the next token, if one is settled.
    ///
    /// `active_from` is the earliest start among automata still mid-scan.
    pub(crate) fn release(&mut self, active_from: Option<Position>) -> Option<Token> {
        let best = self
            .pending
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                a.token
                    .start()
                    .cmp(&b.token.start())
                    .then_with(|| b.token.end().cmp(&a.token.end()))
                    .then_with(|| a.priority.cmp(&b.priority))
            })
            .map(|(index, _)| index)?;

        if active_from.is_some_and(|active| active <= self.pending[best].token.start()) {
            return None;
        }

        let chosen = self.pending.swap_remove(best).token;
        let end = chosen.end();
        for other in std::mem::take(&mut self.pending) {
            if other.token.start() > end {
                self.pending.push(other);
            } else {
                self.cut(other, end);
            }
        }
        self.released_end = Some(end);
        Some(chosen)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.cuts.is_empty()
    }
}

#[cfg(test)]
mod tests;

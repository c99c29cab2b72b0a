//! String and comment context.
//!
//! While a string or comment is open, the other automata must not see its
//! body. The flags are recomputed from the string and comment automata after
//! each character they are fed.

use bitflags::bitflags;
use golex_automata::Automaton;

bitflags! {
    /// Which literal context the scan is currently inside.
    ///
    /// `STRING` and `COMMENT` are never set together: each is only updated
    /// while the other is clear.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ScanContext: u8 {
        const STRING = 1 << 0;
        const COMMENT = 1 << 1;
    }
}

/// The string automaton has read an opening delimiter but not the closing one.
pub(crate) fn string_is_open(automaton: &Automaton<'_>) -> bool {
    let text = automaton.text();
    (text.starts_with('"') || text.starts_with('`')) && !automaton.can_stop()
}

/// The comment automaton has read `//` or `/*`.
///
/// Stays set after a block comment's closing `*/` until the automaton
/// finishes on the following character.
pub(crate) fn comment_is_open(automaton: &Automaton<'_>) -> bool {
    let text = automaton.text();
    text.starts_with("//") || text.starts_with("/*")
}

#[cfg(test)]
mod tests;

//! Declarative spacing between adjacent tokens.
//!
//! Every decision is a [`SpaceRule`] in [`rules::SPACE_RULES`]. Lexeme rules
//! (suppressions around `& | ^ ! .`, forced spaces for `) {` and `import (`)
//! take precedence over the symmetric category-pair table.

mod lookup;
mod matcher;
mod rules;

pub use lookup::{global_rules_map, lookup_spacing, RulesMap};
pub use matcher::TokenMatcher;
pub use rules::{SpaceRule, SPACE_RULES};

/// What goes between two adjacent tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SpaceAction {
    /// Tokens are concatenated directly.
    #[default]
    None,
    /// One WHITESPACE token is inserted.
    Space,
}

impl SpaceAction {
    #[inline]
    pub fn needs_space(self) -> bool {
        matches!(self, SpaceAction::Space)
    }
}

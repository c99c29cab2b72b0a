//! Token matcher for spacing rules.

use golex_ir::{Token, TokenCategory};

/// One side of a spacing rule.
///
/// Lexeme matchers look at the token text; category matchers only at its
/// category. Rules built purely from category matchers are folded into the
/// O(1) pair table by [`RulesMap`](super::RulesMap).
#[derive(Clone, Copy, Debug)]
pub enum TokenMatcher {
    /// Matches any token.
    Any,

    /// Matches a token whose lexeme is exactly this text.
    Lexeme(&'static str),

    /// Matches a token whose lexeme is any of these.
    OneOfLexemes(&'static [&'static str]),

    /// Matches a specific category.
    Exact(TokenCategory),

    /// Matches any category in the slice.
    OneOf(&'static [TokenCategory]),
}

impl TokenMatcher {
    #[inline]
    pub fn matches(&self, token: &Token) -> bool {
        match self {
            TokenMatcher::Any => true,
            TokenMatcher::Lexeme(text) => token.is(text),
            TokenMatcher::OneOfLexemes(texts) => texts.iter().any(|text| token.is(text)),
            TokenMatcher::Exact(expected) => *expected == token.category(),
            TokenMatcher::OneOf(categories) => categories.contains(&token.category()),
        }
    }

    /// The categories this matcher accepts, if it only looks at categories.
    pub fn categories(&self) -> Option<&[TokenCategory]> {
        match self {
            TokenMatcher::Exact(category) => Some(std::slice::from_ref(category)),
            TokenMatcher::OneOf(categories) => Some(categories),
            TokenMatcher::Any | TokenMatcher::Lexeme(_) | TokenMatcher::OneOfLexemes(_) => None,
        }
    }
}

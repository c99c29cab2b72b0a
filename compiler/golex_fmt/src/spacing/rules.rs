//! Declarative spacing rules.
//!
//! All spacing decisions are defined here as static rules. Category-pair
//! rules are symmetric: `{left, right}` also covers `{right, left}`.

use golex_ir::{Token, TokenCategory};

use super::{SpaceAction, TokenMatcher};

/// A declarative spacing rule.
#[derive(Clone, Copy, Debug)]
pub struct SpaceRule {
    /// Human-readable name for debugging.
    pub name: &'static str,

    /// Matcher for the left (preceding) token.
    pub left: TokenMatcher,

    /// Matcher for the right (following) token.
    pub right: TokenMatcher,

    pub action: SpaceAction,

    /// Lower is checked first. Equal priorities keep definition order.
    pub priority: u8,

    /// Also applies with `left` and `right` swapped.
    pub symmetric: bool,
}

impl SpaceRule {
    #[inline]
    const fn new(
        name: &'static str,
        left: TokenMatcher,
        right: TokenMatcher,
        action: SpaceAction,
    ) -> Self {
        SpaceRule {
            name,
            left,
            right,
            action,
            priority: 50,
            symmetric: false,
        }
    }

    /// A symmetric "needs whitespace" category pair.
    #[inline]
    const fn pair(name: &'static str, left: TokenMatcher, right: TokenMatcher) -> Self {
        SpaceRule {
            symmetric: true,
            ..SpaceRule::new(name, left, right, SpaceAction::Space)
        }
    }

    #[inline]
    const fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    /// Check if this rule matches the given token pair.
    #[inline]
    pub fn matches(&self, left: &Token, right: &Token) -> bool {
        (self.left.matches(left) && self.right.matches(right))
            || (self.symmetric && self.left.matches(right) && self.right.matches(left))
    }
}

#[allow(
    clippy::enum_glob_use,
    reason = "the pair table is much more readable with short names"
)]
use TokenCategory::*;
use TokenMatcher::{Any, Exact, Lexeme, OneOf, OneOfLexemes};

static GLUE_LEXEMES: &[&str] = &["&", "|", "^", "!"];
static WORDS: &[TokenCategory] = &[Identifier, Keyword, DataType, Number];
static WORDS_AND_STRINGS: &[TokenCategory] = &[Identifier, Keyword, DataType, Number, String];
static NAMED: &[TokenCategory] = &[Identifier, Keyword, DataType];
static CODE: &[TokenCategory] = &[
    Identifier, Keyword, DataType, Number, String, Bracket, Operator,
];

/// All spacing rules.
///
/// # Rule Categories
///
/// - Priority 10: lexeme suppressions (no space around `& | ^ !` and `.`)
/// - Priority 20: lexeme forced spaces
/// - Priority 50: symmetric category pairs
pub static SPACE_RULES: &[SpaceRule] = &[
    // Priority 10: suppressions
    SpaceRule::new(
        "GlueBeforeBitwise",
        Any,
        OneOfLexemes(GLUE_LEXEMES),
        SpaceAction::None,
    )
    .with_priority(10),
    SpaceRule::new(
        "GlueAfterBitwise",
        OneOfLexemes(GLUE_LEXEMES),
        Any,
        SpaceAction::None,
    )
    .with_priority(10),
    SpaceRule::new("GlueBeforeDot", Any, Lexeme("."), SpaceAction::None).with_priority(10),
    SpaceRule::new("GlueAfterDot", Lexeme("."), Any, SpaceAction::None).with_priority(10),
    // Priority 20: forced spaces
    SpaceRule::new(
        "SpaceBeforeBlock",
        Lexeme(")"),
        Lexeme("{"),
        SpaceAction::Space,
    )
    .with_priority(20),
    SpaceRule::new(
        "SpaceAfterImport",
        Lexeme("import"),
        Lexeme("("),
        SpaceAction::Space,
    )
    .with_priority(20),
    // Priority 50: category pairs
    SpaceRule::pair("WordWord", OneOf(WORDS), OneOf(WORDS)),
    SpaceRule::pair("OperatorOperand", Exact(Operator), OneOf(WORDS_AND_STRINGS)),
    SpaceRule::pair(
        "ComparisonOperand",
        Exact(ComparisonOperator),
        OneOf(WORDS_AND_STRINGS),
    ),
    SpaceRule::pair("ComparisonBracket", Exact(ComparisonOperator), Exact(Bracket)),
    SpaceRule::pair("BracketName", Exact(Bracket), OneOf(NAMED)),
    SpaceRule::pair("KeywordString", Exact(Keyword), Exact(String)),
    SpaceRule::pair("TrailingComment", Exact(Comment), OneOf(CODE)),
];

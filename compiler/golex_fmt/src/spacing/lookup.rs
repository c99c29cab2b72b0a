//! O(1) spacing rule lookup.
//!
//! Pre-computes a table from category pairs to spacing actions. Rules that
//! look at lexemes cannot be tabulated and are scanned linearly, before the
//! table.

use rustc_hash::FxHashMap;
use std::sync::OnceLock;

use golex_ir::{Token, TokenCategory};

use super::rules::{SpaceRule, SPACE_RULES};
use super::SpaceAction;

/// Pre-computed lookup table for spacing rules.
pub struct RulesMap {
    /// Direct lookup for category pairs, both orders for symmetric rules.
    exact: FxHashMap<(TokenCategory, TokenCategory), SpaceAction>,

    /// Lexeme rules, in priority order.
    lexeme_rules: Vec<&'static SpaceRule>,
}

impl RulesMap {
    /// Create a new rules map from the static rules.
    pub fn new() -> Self {
        let mut exact = FxHashMap::default();
        let mut lexeme_rules = Vec::new();

        let mut sorted_rules: Vec<_> = SPACE_RULES.iter().collect();
        sorted_rules.sort_by_key(|r| r.priority);

        for rule in sorted_rules {
            match (rule.left.categories(), rule.right.categories()) {
                (Some(lefts), Some(rights)) => {
                    for &left in lefts {
                        for &right in rights {
                            // First (highest-priority) rule wins
                            exact.entry((left, right)).or_insert(rule.action);
                            if rule.symmetric {
                                exact.entry((right, left)).or_insert(rule.action);
                            }
                        }
                    }
                }
                _ => lexeme_rules.push(rule),
            }
        }

        RulesMap {
            exact,
            lexeme_rules,
        }
    }

    /// Look up the spacing action for a token pair.
    #[inline]
    pub fn lookup(&self, left: &Token, right: &Token) -> SpaceAction {
        if let Some(rule) = self.lexeme_rules.iter().find(|r| r.matches(left, right)) {
            return rule.action;
        }
        self.lookup_categories(left.category(), right.category())
    }

    /// Look up the pair table only, ignoring lexeme rules.
    #[inline]
    pub fn lookup_categories(&self, left: TokenCategory, right: TokenCategory) -> SpaceAction {
        self.exact
            .get(&(left, right))
            .copied()
            .unwrap_or(SpaceAction::None)
    }

    /// Get the number of exact entries in the lookup table.
    pub fn exact_entry_count(&self) -> usize {
        self.exact.len()
    }

    /// Get the number of lexeme rules.
    pub fn lexeme_rule_count(&self) -> usize {
        self.lexeme_rules.len()
    }
}

impl Default for RulesMap {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_RULES_MAP: OnceLock<RulesMap> = OnceLock::new();

/// Get the global rules map (lazily initialized).
pub fn global_rules_map() -> &'static RulesMap {
    GLOBAL_RULES_MAP.get_or_init(RulesMap::new)
}

/// Spacing between two adjacent tokens, using the global rules map.
///
/// This is the primary API for spacing decisions.
#[inline]
pub fn lookup_spacing(left: &Token, right: &Token) -> SpaceAction {
    global_rules_map().lookup(left, right)
}

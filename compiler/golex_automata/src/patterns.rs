//! Token patterns.
//!
//! One standalone graph literal per category. Patterns share no builder
//! helpers beyond [`GraphBuilder`] itself, so changing one category never
//! shifts another.
//!
//! Edge order inside each graph is significant: the first accepting edge
//! wins, so e.g. `<` must be followed by its `<` edge before any shorter
//! alternative is tried.

use std::sync::OnceLock;

use golex_ir::TokenCategory;

use crate::classify::classify_word;
use crate::graph::{GraphBuilder, StateGraph, StateId};

/// How a completed match picks its category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Classify {
    /// Always the pattern's own category.
    Fixed,
    /// Resolved from the matched text by [`classify_word`].
    Word,
}

/// A named state graph plus the category its matches report.
#[derive(Debug)]
pub struct Pattern {
    name: &'static str,
    category: TokenCategory,
    classify: Classify,
    graph: StateGraph,
}

impl Pattern {
    fn new(name: &'static str, category: TokenCategory, graph: StateGraph) -> Self {
        Pattern {
            name,
            category,
            classify: Classify::Fixed,
            graph,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Base category. For word patterns this is `Identifier`.
    pub fn category(&self) -> TokenCategory {
        self.category
    }

    pub fn graph(&self) -> &StateGraph {
        &self.graph
    }

    /// Category for a completed match with the given text.
    pub fn category_of(&self, text: &str) -> TokenCategory {
        match self.classify {
            Classify::Fixed => self.category,
            Classify::Word => classify_word(text),
        }
    }
}

/// Single-character operators that may take a trailing `=`.
///
/// `<` and `>` are handled separately because they also double up.
const SIMPLE_OPERATORS: [char; 15] = [
    '+', '-', '*', '/', '%', '&', '|', '^', '=', ':', '.', ',', ';', '!', '~',
];

/// Arithmetic, bitwise, assignment and punctuation operators.
///
/// Each symbol is final alone and may take one `=`. `<` and `>` may first
/// double to `<<`/`>>`, which again may take one `=`.
pub fn operator() -> Pattern {
    let mut b = GraphBuilder::new();
    let start = StateId::INITIAL;

    for symbol in SIMPLE_OPERATORS {
        let single = b.state(true);
        let assign = b.state(true);
        b.symbol(start, symbol, single).symbol(single, '=', assign);
    }

    for symbol in ['<', '>'] {
        let single = b.state(true);
        let double = b.state(true);
        let double_assign = b.state(true);
        let single_assign = b.state(true);
        b.symbol(start, symbol, single)
            .symbol(single, symbol, double)
            .symbol(double, '=', double_assign)
            .symbol(single, '=', single_assign);
    }

    Pattern::new("operator", TokenCategory::Operator, b.build())
}

/// Two-character comparison and logical operators.
///
/// Every first character is non-final: `<` alone is not a comparison token.
pub fn comparison() -> Pattern {
    let mut b = GraphBuilder::new();
    let start = StateId::INITIAL;

    for (first, second) in [
        ('<', '='),
        ('>', '='),
        ('=', '='),
        ('!', '='),
        ('&', '&'),
        ('|', '|'),
    ] {
        let half = b.state(false);
        let done = b.state(true);
        b.symbol(start, first, half).symbol(half, second, done);
    }

    Pattern::new("comparison", TokenCategory::ComparisonOperator, b.build())
}

fn is_quoted_body(c: char) -> bool {
    !matches!(c, '"' | '\n' | '\r')
}

fn is_raw_body(c: char) -> bool {
    c != '`'
}

/// Quoted strings, delimiters included.
///
/// `"..."` must close on the same line; `` `...` `` may span lines. Neither
/// form supports escapes.
pub fn string() -> Pattern {
    let mut b = GraphBuilder::new();
    let start = StateId::INITIAL;

    let quoted = b.state(false);
    let quoted_closed = b.state(true);
    b.symbol(start, '"', quoted)
        .symbol(quoted, '"', quoted_closed)
        .predicate(quoted, is_quoted_body, quoted);

    let raw = b.state(false);
    let raw_closed = b.state(true);
    b.symbol(start, '`', raw)
        .symbol(raw, '`', raw_closed)
        .predicate(raw, is_raw_body, raw);

    Pattern::new("string", TokenCategory::String, b.build())
}

fn is_line_comment_body(c: char) -> bool {
    !matches!(c, '\n' | '\r')
}

fn is_any(_: char) -> bool {
    true
}

/// Line and block comments, markers included.
///
/// `//` is final as soon as the second slash is read. `/* ... */` is final
/// only on the closing slash.
pub fn comment() -> Pattern {
    let mut b = GraphBuilder::new();
    let start = StateId::INITIAL;

    let slash = b.state(false);
    let line = b.state(true);
    let block = b.state(false);
    let block_star = b.state(false);
    let block_closed = b.state(true);

    b.symbol(start, '/', slash)
        .symbol(slash, '/', line)
        .predicate(line, is_line_comment_body, line)
        .symbol(slash, '*', block)
        .symbol(block, '*', block_star)
        .predicate(block, is_any, block)
        .symbol(block_star, '/', block_closed)
        .symbol(block_star, '*', block_star)
        .predicate(block_star, is_any, block);

    Pattern::new("comment", TokenCategory::Comment, b.build())
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Runs of `[0-9A-Za-z_]`, classified when the run ends.
pub fn identifier() -> Pattern {
    let mut b = GraphBuilder::new();
    let word = b.state(true);
    b.predicate(StateId::INITIAL, is_word_char, word)
        .predicate(word, is_word_char, word);

    let mut pattern = Pattern::new("identifier", TokenCategory::Identifier, b.build());
    pattern.classify = Classify::Word;
    pattern
}

fn is_bracket(c: char) -> bool {
    matches!(c, '[' | ']' | '{' | '}' | '(' | ')')
}

/// Exactly one bracket character.
pub fn bracket() -> Pattern {
    let mut b = GraphBuilder::new();
    let done = b.state(true);
    b.predicate(StateId::INITIAL, is_bracket, done);
    Pattern::new("bracket", TokenCategory::Bracket, b.build())
}

/// Exactly one `\n`.
pub fn newline() -> Pattern {
    let mut b = GraphBuilder::new();
    let done = b.state(true);
    b.symbol(StateId::INITIAL, '\n', done);
    Pattern::new("newline", TokenCategory::Newline, b.build())
}

static STANDARD_PATTERNS: OnceLock<[Pattern; 7]> = OnceLock::new();

/// The active pattern set, built once per process.
///
/// Order is priority: when two patterns finish identical spans the earlier
/// one wins, so `==` is a comparison rather than an operator.
pub fn standard_patterns() -> &'static [Pattern] {
    STANDARD_PATTERNS.get_or_init(|| {
        [
            string(),
            comment(),
            comparison(),
            operator(),
            identifier(),
            bracket(),
            newline(),
        ]
    })
}

//! The multi-automaton lexer.
//!
//! One [`Automaton`] runs per pattern and every character is offered to each
//! of them in lockstep. Per character, in order:
//!
//! 1. Outside a comment, the string automaton is fed and the `STRING` flag
//!    recomputed.
//! 2. Outside a string, the comment automaton is fed and the `COMMENT` flag
//!    recomputed.
//! 3. Inside a comment, the operator automaton is reset. No other automaton
//!    is reset here.
//! 4. Outside both, every remaining automaton is fed.
//!
//! An automaton that rejects a character from a final state finishes its
//! token, resets, and is offered the same character again, so one character
//! can both end a token and start the next.

use golex_automata::{standard_patterns, Automaton, Pattern};
use golex_ir::{Position, Token, TokenCategory};
use tracing::{debug, trace};

use crate::arbiter::Arbiter;
use crate::context::{comment_is_open, string_is_open, ScanContext};
use crate::indent::{splice_indents, BracketDepth, DEFAULT_INDENT_WIDTH};

/// Lexer configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexerConfig {
    /// Spaces carried by each synthesised INDENT token.
    pub indent_width: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

/// Pattern slots with a special role in the scan protocol.
#[derive(Clone, Copy, Debug, Default)]
struct Roles {
    string: Option<usize>,
    comment: Option<usize>,
    operator: Option<usize>,
}

impl Roles {
    fn of(patterns: &[Pattern]) -> Self {
        let find = |category| patterns.iter().position(|p| p.category() == category);
        Roles {
            string: find(TokenCategory::String),
            comment: find(TokenCategory::Comment),
            operator: find(TokenCategory::Operator),
        }
    }

    fn is_context(self, index: usize) -> bool {
        self.string == Some(index) || self.comment == Some(index)
    }
}

/// Drives every pattern's automaton over a sequence of lines.
///
/// Reusable: each [`tokenize`](Self::tokenize) call starts from a clean
/// context and zero bracket depth.
pub struct Lexer<'p> {
    automata: Vec<Automaton<'p>>,
    roles: Roles,
    context: ScanContext,
    depth: BracketDepth,
    arbiter: Arbiter,
    tokens: Vec<Token>,
    indent_lexeme: String,
}

impl Lexer<'static> {
    /// Lexer over the standard pattern set.
    pub fn new() -> Self {
        Lexer::with_config(LexerConfig::default())
    }

    pub fn with_config(config: LexerConfig) -> Self {
        Lexer::with_patterns(standard_patterns(), config)
    }
}

impl Default for Lexer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'p> Lexer<'p> {
    /// Lexer over an explicit pattern set, in priority order.
    ///
    /// The string, comment and operator roles are found by pattern category;
    /// a set without them simply skips the corresponding protocol step.
    pub fn with_patterns(patterns: &'p [Pattern], config: LexerConfig) -> Self {
        Lexer {
            automata: patterns.iter().map(Automaton::new).collect(),
            roles: Roles::of(patterns),
            context: ScanContext::empty(),
            depth: BracketDepth::default(),
            arbiter: Arbiter::default(),
            tokens: Vec::new(),
            indent_lexeme: " ".repeat(config.indent_width),
        }
    }

    /// Tokenize an ordered sequence of lines.
    ///
    /// Line terminators are whatever the lines contain; none are implied.
    /// Never fails: unterminated literals and unrecognised characters are
    /// dropped.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn tokenize<I, S>(&mut self, lines: I) -> Vec<Token>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.begin();

        let mut line_count = 0u32;
        for (line_no, line) in (1u32..).zip(lines) {
            for (column, c) in (0u32..).zip(line.as_ref().chars()) {
                self.scan_char(c, Position::new(line_no, column));
            }
            line_count = line_no;
        }
        self.end_of_input();

        debug!(
            lines = line_count,
            tokens = self.tokens.len(),
            depth = self.depth.get(),
            "tokenized"
        );
        std::mem::take(&mut self.tokens)
    }

    /// Bracket depth after the last [`tokenize`](Self::tokenize) call.
    pub fn depth(&self) -> i64 {
        self.depth.get()
    }

    /// Context flags after the last [`tokenize`](Self::tokenize) call.
    ///
    /// Non-empty when input ended inside an unterminated literal.
    pub fn context(&self) -> ScanContext {
        self.context
    }

    fn begin(&mut self) {
        for automaton in &mut self.automata {
            automaton.reset();
        }
        self.context = ScanContext::empty();
        self.depth = BracketDepth::default();
        self.arbiter = Arbiter::default();
        self.tokens.clear();
    }

    fn scan_char(&mut self, c: char, at: Position) {
        let before = self.context;

        if !self.context.contains(ScanContext::COMMENT) {
            if let Some(string) = self.roles.string {
                self.feed(string, c, at);
                let open = string_is_open(&self.automata[string]);
                self.context.set(ScanContext::STRING, open);
            }
        }

        if !self.context.contains(ScanContext::STRING) {
            if let Some(comment) = self.roles.comment {
                self.feed(comment, c, at);
                let open = comment_is_open(&self.automata[comment]);
                self.context.set(ScanContext::COMMENT, open);
            }
        }

        if self.context.contains(ScanContext::COMMENT) {
            if let Some(operator) = self.roles.operator {
                self.automata[operator].reset();
            }
        }

        let opened = self.context.difference(before);
        if opened.contains(ScanContext::STRING) {
            self.flush_others(self.roles.string);
        } else if opened.contains(ScanContext::COMMENT) {
            self.flush_others(self.roles.comment);
        }

        if self.context.is_empty() {
            for index in 0..self.automata.len() {
                if !self.roles.is_context(index) {
                    self.feed(index, c, at);
                }
            }
        }

        self.settle();
    }

    /// Feed one character, finishing and retrying as long as the automaton
    /// rejects it from a non-idle state.
    fn feed(&mut self, index: usize, c: char, at: Position) {
        loop {
            let automaton = &mut self.automata[index];
            if automaton.advance(c, at) || automaton.is_idle() {
                return;
            }
            self.finish(index);
        }
    }

    fn finish(&mut self, index: usize) {
        let automaton = &mut self.automata[index];
        let pattern = automaton.pattern().name();
        match automaton.finish() {
            Some(token) => {
                self.arbiter.offer(token, index);
                self.rescan_cuts();
            }
            None => trace!(pattern, "partial match discarded"),
        }
    }

    /// Scan the unclaimed tail of every cut match again, with a fresh
    /// automaton over the same pattern.
    fn rescan_cuts(&mut self) {
        while let Some(cut) = self.arbiter.pop_cut() {
            let mut automaton = Automaton::new(self.automata[cut.priority].pattern());
            for (c, at) in positioned_chars(&cut.token).filter(|&(_, at)| at > cut.after) {
                while !automaton.advance(c, at) && !automaton.is_idle() {
                    if let Some(token) = automaton.finish() {
                        self.arbiter.offer(token, cut.priority);
                    }
                }
            }
            if let Some(token) = automaton.finish() {
                self.arbiter.offer(token, cut.priority);
            }
        }
    }

    /// A literal context just opened: end every other scan so nothing
    /// spans the literal.
    fn flush_others(&mut self, owner: Option<usize>) {
        for index in 0..self.automata.len() {
            if Some(index) != owner && !self.automata[index].is_idle() {
                self.finish(index);
            }
        }
    }

    fn end_of_input(&mut self) {
        for index in 0..self.automata.len() {
            if !self.automata[index].is_idle() {
                self.finish(index);
            }
        }
        self.settle();
        debug_assert!(self.arbiter.is_empty());
    }

    /// Commit every candidate no active scan can still supersede.
    fn settle(&mut self) {
        let active_from = self
            .automata
            .iter()
            .filter_map(Automaton::scan_start)
            .min();
        while let Some(token) = self.arbiter.release(active_from) {
            self.commit(token);
            self.rescan_cuts();
        }
    }

    fn commit(&mut self, token: Token) {
        if token.category() == TokenCategory::Bracket {
            self.depth.track(token.lexeme());
        }
        trace!(%token, "token committed");
        self.tokens.push(token);
        splice_indents(&mut self.tokens, self.depth, &self.indent_lexeme);
    }
}

/// Characters of `token` paired with their source positions.
fn positioned_chars(token: &Token) -> impl Iterator<Item = (char, Position)> + '_ {
    token.lexeme().chars().scan(token.start(), |next, c| {
        let at = *next;
        *next = if c == '\n' {
            Position::new(at.line + 1, 0)
        } else {
            Position::new(at.line, at.column + 1)
        };
        Some((c, at))
    })
}

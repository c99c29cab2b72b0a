use super::*;
use golex_automata::patterns;
use golex_ir::Position;

fn fed<'p>(pattern: &'p golex_automata::Pattern, text: &str) -> Automaton<'p> {
    let mut automaton = Automaton::new(pattern);
    for (col, c) in (0u32..).zip(text.chars()) {
        automaton.advance(c, Position::new(1, col));
    }
    automaton
}

#[test]
fn string_open_until_closed() {
    let pattern = patterns::string();
    assert!(!string_is_open(&fed(&pattern, "")));
    assert!(string_is_open(&fed(&pattern, "\"")));
    assert!(string_is_open(&fed(&pattern, "\"abc")));
    assert!(!string_is_open(&fed(&pattern, "\"abc\"")));
    assert!(string_is_open(&fed(&pattern, "`multi\nline")));
    assert!(!string_is_open(&fed(&pattern, "`raw`")));
}

#[test]
fn comment_open_after_two_characters() {
    let pattern = patterns::comment();
    assert!(!comment_is_open(&fed(&pattern, "/")));
    assert!(comment_is_open(&fed(&pattern, "//")));
    assert!(comment_is_open(&fed(&pattern, "/* body")));
    assert!(comment_is_open(&fed(&pattern, "/* body */")));
}

#[test]
fn flags_are_distinct() {
    assert!(ScanContext::empty().is_empty());
    assert!(!ScanContext::STRING.intersects(ScanContext::COMMENT));
    let both = ScanContext::STRING | ScanContext::COMMENT;
    assert_eq!(both.difference(ScanContext::STRING), ScanContext::COMMENT);
}

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn accessors_return_constructor_values() {
    let tok = Token::new(
        TokenCategory::Identifier,
        "slice",
        Position::new(12, 8),
        Position::new(12, 12),
    );
    assert_eq!(tok.category(), TokenCategory::Identifier);
    assert_eq!(tok.lexeme(), "slice");
    assert_eq!(tok.start(), Position::new(12, 8));
    assert_eq!(tok.end(), Position::new(12, 12));
    assert!(!tok.is_synthetic());
    assert!(tok.is("slice"));
    assert!(!tok.is("slic"));
}

#[test]
fn synthetic_tokens_carry_sentinel_positions() {
    let tok = Token::synthetic(TokenCategory::Indent, "        ");
    assert!(tok.is_synthetic());
    assert_eq!(tok.start(), Position::SYNTHETIC);
    assert_eq!(tok.end(), Position::SYNTHETIC);
}

#[test]
fn display_with_lexeme() {
    let tok = Token::new(
        TokenCategory::Keyword,
        "func",
        Position::new(10, 0),
        Position::new(10, 3),
    );
    assert_eq!(
        tok.to_string(),
        "{KEYWORD | func} starts at : [line:10,column:0]"
    );
}

#[test]
fn display_escapes_newline() {
    let tok = Token::new(
        TokenCategory::Newline,
        "\n",
        Position::new(1, 5),
        Position::new(1, 5),
    );
    assert_eq!(
        tok.to_string(),
        "{NEWLINE | \\n} starts at : [line:1,column:5]"
    );
}

#[test]
fn display_without_lexeme() {
    let tok = Token::synthetic(TokenCategory::Error, "");
    assert_eq!(tok.to_string(), "{ERROR} starts at : [line:-1,column:-1]");
}

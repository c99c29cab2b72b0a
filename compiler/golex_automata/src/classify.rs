//! Word classification.
//!
//! The identifier pattern accepts any run of `[0-9A-Za-z_]`. Once a run is
//! complete its text is resolved here, in order: keyword, built-in type
//! name, numeric literal, plain identifier.

use golex_ir::TokenCategory;

/// Resolve the category of a completed identifier-pattern match.
///
/// Pure: the same text always yields the same category.
pub fn classify_word(text: &str) -> TokenCategory {
    if is_keyword(text) {
        TokenCategory::Keyword
    } else if is_data_type(text) {
        TokenCategory::DataType
    } else if is_number(text) {
        TokenCategory::Number
    } else {
        TokenCategory::Identifier
    }
}

/// Reserved words.
///
/// Bucketed by length; all keywords are 2-11 characters.
pub fn is_keyword(text: &str) -> bool {
    match text.len() {
        2 => matches!(text, "go" | "if"),
        3 => matches!(text, "for" | "map" | "var"),
        4 => matches!(text, "case" | "chan" | "else" | "func" | "goto" | "type"),
        5 => matches!(text, "break" | "const" | "defer" | "range"),
        6 => matches!(
            text,
            "import" | "return" | "select" | "struct" | "switch"
        ),
        7 => matches!(text, "default" | "package"),
        8 => matches!(text, "continue"),
        9 => matches!(text, "interface"),
        11 => matches!(text, "fallthrough"),
        _ => false,
    }
}

/// Built-in type names.
pub fn is_data_type(text: &str) -> bool {
    match text.len() {
        3 => matches!(text, "int"),
        4 => matches!(text, "int8" | "uint" | "byte" | "rune"),
        5 => matches!(text, "int16" | "int32" | "int64" | "uint8"),
        6 => matches!(text, "string" | "uint16" | "uint32" | "uint64"),
        7 => matches!(text, "uintptr" | "float32" | "float64"),
        9 => matches!(text, "complex64"),
        10 => matches!(text, "complex128"),
        _ => false,
    }
}

/// Numeric literal: `[+-]? ( [0-9_]+ ( '.' [0-9_]* )? | '.' [0-9_]+ )`.
///
/// Underscores count as digits, so a lone `_` is a number.
pub fn is_number(text: &str) -> bool {
    let body = text
        .strip_prefix('+')
        .or_else(|| text.strip_prefix('-'))
        .unwrap_or(text);

    let (whole, fraction) = match body.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (body, None),
    };

    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit() || b == b'_');

    match fraction {
        None => !whole.is_empty() && is_digits(whole),
        Some(fraction) if whole.is_empty() => !fraction.is_empty() && is_digits(fraction),
        Some(fraction) => is_digits(whole) && is_digits(fraction),
    }
}

//! Splitting source text into the line sequence the lexer consumes.

/// Split `text` into lines, keeping each `\n` terminator.
///
/// A final line without a terminator is kept as-is; an empty input yields
/// no lines. `\r` is left in place.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    for newline in memchr::memchr_iter(b'\n', text.as_bytes()) {
        lines.push(&text[start..=newline]);
        start = newline + 1;
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

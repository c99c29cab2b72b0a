use super::*;

#[test]
fn names_are_unique() {
    let mut names: Vec<_> = TokenCategory::ALL.iter().map(|c| c.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), TokenCategory::ALL.len());
}

#[test]
fn display_uses_upper_case_name() {
    assert_eq!(
        TokenCategory::ComparisonOperator.to_string(),
        "COMPARISON_OPERATOR"
    );
    assert_eq!(TokenCategory::DataType.to_string(), "DATA_TYPE");
}

#[test]
fn word_categories() {
    let words: Vec<_> = TokenCategory::ALL
        .into_iter()
        .filter(|c| c.is_word())
        .collect();
    assert_eq!(
        words,
        [
            TokenCategory::Identifier,
            TokenCategory::Keyword,
            TokenCategory::DataType,
            TokenCategory::Number,
        ]
    );
}

#[test]
fn synthesized_categories() {
    assert!(TokenCategory::Indent.is_synthesized());
    assert!(TokenCategory::Whitespace.is_synthesized());
    assert!(!TokenCategory::Newline.is_synthesized());
    assert!(!TokenCategory::Error.is_synthesized());
}

use super::*;

#[test]
fn display_matches_console_format() {
    assert_eq!(Position::new(3, 14).to_string(), "[line:3,column:14]");
}

#[test]
fn synthetic_displays_invalid_coordinates() {
    assert_eq!(Position::SYNTHETIC.to_string(), "[line:-1,column:-1]");
    assert!(Position::SYNTHETIC.is_synthetic());
    assert!(!Position::new(1, 0).is_synthetic());
}

#[test]
fn orders_by_line_then_column() {
    assert!(Position::new(1, 9) < Position::new(2, 0));
    assert!(Position::new(2, 1) < Position::new(2, 2));
    assert_eq!(Position::new(4, 4), Position::new(4, 4));
}

use super::*;
use golex_ir::TokenCategory;
use pretty_assertions::assert_eq;

fn tok(category: TokenCategory, lexeme: &str, start: u32, end: u32) -> Token {
    Token::new(
        category,
        lexeme,
        Position::new(1, start),
        Position::new(1, end),
    )
}

fn drain(arbiter: &mut Arbiter) -> Vec<String> {
    std::iter::from_fn(|| arbiter.release(None))
        .map(|t| t.lexeme().to_string())
        .collect()
}

#[test]
fn releases_in_start_order() {
    let mut arbiter = Arbiter::default();
    arbiter.offer(tok(TokenCategory::Identifier, "b", 2, 2), 4);
    arbiter.offer(tok(TokenCategory::Identifier, "a", 0, 0), 4);
    assert_eq!(drain(&mut arbiter), ["a", "b"]);
    assert!(arbiter.is_empty());
}

#[test]
fn longest_match_wins_at_same_start() {
    let mut arbiter = Arbiter::default();
    arbiter.offer(tok(TokenCategory::Operator, "&", 0, 0), 3);
    arbiter.offer(tok(TokenCategory::Operator, "&", 1, 1), 3);
    arbiter.offer(tok(TokenCategory::ComparisonOperator, "&&", 0, 1), 2);
    assert_eq!(drain(&mut arbiter), ["&&"]);
}

#[test]
fn priority_breaks_identical_spans() {
    let mut arbiter = Arbiter::default();
    arbiter.offer(tok(TokenCategory::Operator, "==", 0, 1), 3);
    arbiter.offer(tok(TokenCategory::ComparisonOperator, "==", 0, 1), 2);
    let released = arbiter.release(None);
    assert_eq!(
        released.map(|t| t.category()),
        Some(TokenCategory::ComparisonOperator)
    );
    assert!(arbiter.is_empty());
}

#[test]
fn earlier_start_beats_later_longer_match() {
    let mut arbiter = Arbiter::default();
    arbiter.offer(tok(TokenCategory::ComparisonOperator, "<=", 1, 2), 2);
    arbiter.offer(tok(TokenCategory::Operator, "<<=", 0, 2), 3);
    assert_eq!(drain(&mut arbiter), ["<<="]);
}

#[test]
fn holds_while_an_earlier_scan_is_active() {
    let mut arbiter = Arbiter::default();
    arbiter.offer(tok(TokenCategory::Operator, "<", 0, 0), 3);
    assert_eq!(arbiter.release(Some(Position::new(1, 0))), None);
    assert_eq!(
        arbiter
            .release(Some(Position::new(1, 1)))
            .map(|t| t.lexeme().to_string()),
        Some("<".to_string())
    );
}

#[test]
fn drops_offers_inside_released_token() {
    let mut arbiter = Arbiter::default();
    arbiter.offer(tok(TokenCategory::Operator, "<<=", 0, 2), 3);
    assert_eq!(drain(&mut arbiter), ["<<="]);
    arbiter.offer(tok(TokenCategory::ComparisonOperator, "<=", 1, 2), 2);
    assert!(arbiter.is_empty());
    arbiter.offer(tok(TokenCategory::Identifier, "x", 3, 3), 4);
    assert_eq!(drain(&mut arbiter), ["x"]);
}

#[test]
fn match_running_past_a_released_token_is_cut() {
    let mut arbiter = Arbiter::default();
    arbiter.offer(tok(TokenCategory::ComparisonOperator, "&&", 1, 2), 2);
    assert_eq!(drain(&mut arbiter), ["&&"]);

    arbiter.offer(tok(TokenCategory::Operator, "&=", 2, 3), 3);
    assert!(!arbiter.is_empty());
    let cut = arbiter.pop_cut();
    assert_eq!(
        cut.map(|cut| (cut.token.lexeme().to_string(), cut.priority, cut.after)),
        Some(("&=".to_string(), 3, Position::new(1, 2)))
    );
    assert!(arbiter.is_empty());
}

#[test]
fn release_cuts_pending_matches_that_run_past_it() {
    let mut arbiter = Arbiter::default();
    arbiter.offer(tok(TokenCategory::ComparisonOperator, "&&", 0, 1), 2);
    arbiter.offer(tok(TokenCategory::Operator, "&=", 1, 2), 3);
    arbiter.offer(tok(TokenCategory::Operator, "&", 0, 0), 3);
    assert_eq!(drain(&mut arbiter), ["&&"]);
    assert_eq!(
        arbiter.pop_cut().map(|cut| cut.token.lexeme().to_string()),
        Some("&=".to_string())
    );
    assert!(arbiter.pop_cut().is_none());
}

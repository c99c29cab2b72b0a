use super::*;

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[test]
fn builder_starts_with_non_final_initial_state() {
    let graph = GraphBuilder::new().build();
    assert_eq!(graph.len(), 1);
    assert!(!graph.is_empty());
    assert!(!graph.is_final(StateId::INITIAL));
}

#[test]
fn symbol_edge_fires_on_exact_match_only() {
    let mut b = GraphBuilder::new();
    let a = b.state(true);
    b.symbol(StateId::INITIAL, 'a', a);
    let graph = b.build();

    assert_eq!(graph.try_advance(StateId::INITIAL, 'a'), Some(a));
    assert_eq!(graph.try_advance(StateId::INITIAL, 'b'), None);
    assert!(graph.is_final(a));
}

#[test]
fn predicate_edge_fires_when_predicate_holds() {
    let mut b = GraphBuilder::new();
    let digits = b.state(true);
    b.predicate(StateId::INITIAL, is_digit, digits)
        .predicate(digits, is_digit, digits);
    let graph = b.build();

    let mut state = StateId::INITIAL;
    for c in "2024".chars() {
        state = graph.try_advance(state, c).unwrap_or(StateId::INITIAL);
    }
    assert_eq!(state, digits);
    assert_eq!(graph.try_advance(digits, 'x'), None);
}

#[test]
fn first_declared_edge_wins() {
    // Both edges accept '7'; the symbol edge is declared first.
    let mut b = GraphBuilder::new();
    let seven = b.state(true);
    let digit = b.state(true);
    b.symbol(StateId::INITIAL, '7', seven)
        .predicate(StateId::INITIAL, is_digit, digit);
    let graph = b.build();

    assert_eq!(graph.try_advance(StateId::INITIAL, '7'), Some(seven));
    assert_eq!(graph.try_advance(StateId::INITIAL, '8'), Some(digit));
}

#[test]
fn transition_matches() {
    assert!(Transition::Symbol('=').matches('='));
    assert!(!Transition::Symbol('=').matches('!'));
    assert!(Transition::Predicate(is_digit).matches('0'));
    assert!(!Transition::Predicate(is_digit).matches('a'));
}

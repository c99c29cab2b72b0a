//! State graphs.
//!
//! A graph is a flat list of states; state 0 is the initial state. Each
//! state holds an ordered list of outgoing edges and the first edge whose
//! transition accepts a character wins. There is no longest-match search
//! among siblings and no backtracking.
//!
//! Graphs are assembled once with [`GraphBuilder`] and never change after
//! [`GraphBuilder::build`].

use smallvec::SmallVec;

/// Index of a state within its graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StateId(u16);

impl StateId {
    /// The state every scan starts from.
    pub const INITIAL: StateId = StateId(0);

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Condition on an edge.
#[derive(Clone, Copy, Debug)]
pub enum Transition {
    /// Fires iff the character equals the symbol.
    Symbol(char),
    /// Fires iff the predicate holds.
    Predicate(fn(char) -> bool),
}

impl Transition {
    #[inline]
    pub fn matches(&self, c: char) -> bool {
        match self {
            Transition::Symbol(symbol) => *symbol == c,
            Transition::Predicate(pred) => pred(c),
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Edge {
    transition: Transition,
    target: StateId,
}

#[derive(Clone, Debug)]
struct State {
    is_final: bool,
    edges: SmallVec<[Edge; 4]>,
}

/// Immutable state graph for one token pattern.
#[derive(Clone, Debug)]
pub struct StateGraph {
    states: Vec<State>,
}

impl StateGraph {
    /// Successor of `from` on `c`, trying edges in declaration order.
    #[inline]
    pub fn try_advance(&self, from: StateId, c: char) -> Option<StateId> {
        self.states[from.index()]
            .edges
            .iter()
            .find(|edge| edge.transition.matches(c))
            .map(|edge| edge.target)
    }

    /// Whether text ending in `state` is a complete token.
    #[inline]
    pub fn is_final(&self, state: StateId) -> bool {
        self.states[state.index()].is_final
    }

    /// Number of states, including the initial one.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always `false`: every graph owns its initial state.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Incremental constructor for a [`StateGraph`].
///
/// Starts with a single non-final initial state.
pub struct GraphBuilder {
    states: Vec<State>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        GraphBuilder {
            states: vec![State {
                is_final: false,
                edges: SmallVec::new(),
            }],
        }
    }

    /// Add a state and return its id.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "pattern graphs hold a few dozen states"
    )]
    pub fn state(&mut self, is_final: bool) -> StateId {
        debug_assert!(self.states.len() < usize::from(u16::MAX));
        let id = StateId(self.states.len() as u16);
        self.states.push(State {
            is_final,
            edges: SmallVec::new(),
        });
        id
    }

    /// Append an exact-symbol edge `from --c--> to`.
    pub fn symbol(&mut self, from: StateId, c: char, to: StateId) -> &mut Self {
        self.edge(from, Transition::Symbol(c), to)
    }

    /// Append a predicate edge `from --pred--> to`.
    pub fn predicate(&mut self, from: StateId, pred: fn(char) -> bool, to: StateId) -> &mut Self {
        self.edge(from, Transition::Predicate(pred), to)
    }

    fn edge(&mut self, from: StateId, transition: Transition, target: StateId) -> &mut Self {
        self.states[from.index()]
            .edges
            .push(Edge { transition, target });
        self
    }

    pub fn build(self) -> StateGraph {
        StateGraph {
            states: self.states,
        }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;

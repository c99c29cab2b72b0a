//! Finite state machines for the golex lexer.
//!
//! Each token category is recognised by its own hand-built state graph. The
//! lexer runs one [`Automaton`] per [`Pattern`] and feeds every character to
//! all of them; this crate only knows how a single automaton moves.
//!
//! # Modules
//!
//! - [`graph`]: immutable states and first-match transitions
//! - [`automaton`]: live scanning position over a graph
//! - [`patterns`]: one graph literal per token category
//! - [`classify`]: keyword / type / number resolution for word matches
//!
//! This crate has no knowledge of string or comment context; that lives in
//! `golex_lexer`.

pub mod automaton;
pub mod classify;
pub mod graph;
pub mod patterns;

pub use automaton::Automaton;
pub use classify::{classify_word, is_data_type, is_keyword, is_number};
pub use graph::{GraphBuilder, StateGraph, StateId, Transition};
pub use patterns::{standard_patterns, Pattern};

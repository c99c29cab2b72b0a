//! Golex IR
//!
//! Types shared across the golex crates: source positions, token
//! categories, and the immutable [`Token`] record produced by the lexer
//! and consumed by the formatter.
//!
//! # Modules
//!
//! - [`position`]: `(line, column)` source coordinates
//! - [`category`]: the closed set of token categories
//! - [`token`]: the token record and its console rendering

pub mod category;
pub mod position;
pub mod token;

pub use category::TokenCategory;
pub use position::Position;
pub use token::Token;

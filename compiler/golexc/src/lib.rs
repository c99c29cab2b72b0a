//! golex command-line driver.
//!
//! ```text
//! lines ──► golex_lexer::tokenize ──► Vec<Token> ──► golex_fmt::format ──► String
//! ```
//!
//! The binary in `main.rs` only parses arguments; every command lives in
//! [`commands`] so it can be tested without spawning a process.

pub mod commands;
pub mod error;
pub mod tracing_setup;

pub use error::CliError;
pub use tracing_setup::init_tracing;

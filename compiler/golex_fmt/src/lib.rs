//! golex Formatter
//!
//! Re-serialises a token stream with canonical whitespace. The formatter
//! never reorders, drops or edits tokens; it only decides, for each adjacent
//! pair, whether a single space goes between them.
//!
//! # Modules
//!
//! - [`spacing`]: declarative spacing rules and their lookup table
//! - [`emitter`]: output abstraction for text and token sequences
//! - [`formatter`]: the pairwise spacing pass
//!
//! ```
//! use golex_ir::{Token, TokenCategory};
//!
//! let tokens = [
//!     Token::synthetic(TokenCategory::Identifier, "foo"),
//!     Token::synthetic(TokenCategory::Operator, "."),
//!     Token::synthetic(TokenCategory::Identifier, "bar"),
//! ];
//! assert_eq!(golex_fmt::format(&tokens), "foo.bar");
//! ```

pub mod emitter;
pub mod formatter;
pub mod spacing;

pub use emitter::{Emitter, StringEmitter, TokenEmitter, WHITESPACE_LEXEME};
pub use formatter::{format, with_whitespace, Formatter};
pub use spacing::{lookup_spacing, SpaceAction};

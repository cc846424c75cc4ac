//! Lexer module for the markdown dialect
//!
//! Turns raw source text into an ordered sequence of positioned tokens.
//!
//! Structure:
//!     - [tokens]: the logos token kinds and the [`Token`] struct
//!     - [position]: byte offset to line/column conversion
//!     - [lexer_impl]: the tokenization passes
//!
//! Two entry points are offered. [`tokenize`] reports what logos saw and is only
//! useful for inspection. [`lex`] is what the parser consumes: heading marker
//! whitespace removed and the end-of-input sentinel appended.

pub mod lexer_impl;
pub mod position;
pub mod tokens;

pub use lexer_impl::{lex, sentinel, tokenize, tokenize_with_spans};
pub use position::{Position, SourceLocation};
pub use tokens::{Token, TokenKind};

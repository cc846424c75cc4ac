//! Error types for parsing

use crate::lexer::{Position, Token};
use std::fmt;

/// What the parser found where it expected a delimiter.
///
/// Special-character tokens are echoed back; anything else is reported only as
/// "text" so diagnostics never repeat arbitrary document content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    Special(String),
    Text,
}

impl Found {
    pub fn classify(token: &Token) -> Self {
        if token.is_special() {
            Found::Special(token.text.clone())
        } else {
            Found::Text
        }
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Special(text) => write!(f, "`{}`", text),
            Found::Text => f.write_str("text"),
        }
    }
}

/// Errors that abort a parse. There is no recovery: the first one wins.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A required delimiter was not the next token
    #[error("{position} expected `{expected}`, got {found}")]
    MissingDelimiter {
        position: Position,
        expected: &'static str,
        found: Found,
    },

    /// Inline formatting opened more levels than the configured limit
    #[error("{position} formatting nested more than {limit} levels deep")]
    TooDeeplyNested { position: Position, limit: usize },
}

impl ParseError {
    pub fn position(&self) -> Position {
        match self {
            ParseError::MissingDelimiter { position, .. }
            | ParseError::TooDeeplyNested { position, .. } => *position,
        }
    }
}

//! Token definitions for the markdown dialect
//!
//! Characters fall into two classes. The special characters are `_`, `*`, the
//! backtick, `#`, `[`, `]`, `(`, `)` and `!`; everything else is ordinary. A
//! token is a maximal run of one class, except that `#`, `[`, `(`, `!` and line
//! breaks always stand alone.
//! That way a fence like "```" is one token while "##" is two.
//!
//! The classification is done entirely by logos; the [`Token`] struct carries the
//! text and position the parser works with.

use super::position::Position;
use logos::Logos;
use serde::Serialize;
use std::fmt;

/// Lexical classes produced by the logos lexer
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    #[token("#")]
    Hash,
    #[token("[")]
    OpenBracket,
    #[token("(")]
    OpenParen,
    #[token("!")]
    Bang,

    // Runs of the special characters that do not force a boundary
    #[regex(r"[_*`\])]+")]
    Delimiter,

    #[regex(r"\r?\n")]
    Newline,

    // A carriage return that is not part of a CRLF pair
    #[token("\r")]
    CarriageReturn,

    #[regex(r"[^_*`#\[\]()!\r\n]+")]
    Text,
}

impl TokenKind {
    /// Check if this kind is built from special characters
    pub fn is_special(&self) -> bool {
        matches!(
            self,
            TokenKind::Hash
                | TokenKind::OpenBracket
                | TokenKind::OpenParen
                | TokenKind::Bang
                | TokenKind::Delimiter
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Hash => "Hash",
            TokenKind::OpenBracket => "OpenBracket",
            TokenKind::OpenParen => "OpenParen",
            TokenKind::Bang => "Bang",
            TokenKind::Delimiter => "Delimiter",
            TokenKind::Newline => "Newline",
            TokenKind::CarriageReturn => "CarriageReturn",
            TokenKind::Text => "Text",
        };
        f.write_str(name)
    }
}

/// A positioned fragment of source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact text the parser matches literals against. Line breaks are always "\n".
    pub text: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    pub fn is_special(&self) -> bool {
        self.kind.is_special()
    }

    pub fn is_newline(&self) -> bool {
        self.kind == TokenKind::Newline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        TokenKind::lexer(source)
            .map(|result| result.expect("every character is covered"))
            .collect()
    }

    #[test]
    fn test_forcing_characters_stand_alone() {
        assert_eq!(
            kinds("##[(!"),
            vec![
                TokenKind::Hash,
                TokenKind::Hash,
                TokenKind::OpenBracket,
                TokenKind::OpenParen,
                TokenKind::Bang,
            ]
        );
    }

    #[test]
    fn test_fence_is_one_token() {
        let mut lexer = TokenKind::lexer("```");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Delimiter)));
        assert_eq!(lexer.slice(), "```");
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_delimiter_runs_merge() {
        let mut lexer = TokenKind::lexer("**b**)");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Delimiter)));
        assert_eq!(lexer.slice(), "**");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Text)));
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Delimiter)));
        assert_eq!(lexer.slice(), "**)");
    }

    #[test]
    fn test_text_keeps_whitespace() {
        let mut lexer = TokenKind::lexer("two words");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Text)));
        assert_eq!(lexer.slice(), "two words");
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_line_endings() {
        assert_eq!(
            kinds("a\r\nb\nc\rd"),
            vec![
                TokenKind::Text,
                TokenKind::Newline,
                TokenKind::Text,
                TokenKind::Newline,
                TokenKind::Text,
                TokenKind::CarriageReturn,
                TokenKind::Text,
            ]
        );
    }

    #[test]
    fn test_special_predicate() {
        assert!(TokenKind::Hash.is_special());
        assert!(TokenKind::Delimiter.is_special());
        assert!(!TokenKind::Text.is_special());
        assert!(!TokenKind::Newline.is_special());
        assert!(!TokenKind::CarriageReturn.is_special());
    }
}

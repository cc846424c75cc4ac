//! Implementation of the markdown lexer
//!
//! Classification is handled by logos. This module attaches text and positions
//! to the raw kinds and applies the two rewrites the parser relies on: dropping
//! the whitespace after a heading marker and appending the end-of-input sentinel.

use super::position::{Position, SourceLocation};
use super::tokens::{Token, TokenKind};
use logos::Logos;
use std::ops::Range;

/// Tokenize a string, keeping every token exactly as logos classified it
pub fn tokenize(source: &str) -> Vec<Token> {
    let location = SourceLocation::new(source);
    tokenize_with_spans(source)
        .into_iter()
        .map(|(kind, span)| to_token(source, &location, kind, span))
        .collect()
}

/// Tokenize a string and collect the kinds with their byte spans
pub fn tokenize_with_spans(source: &str) -> Vec<(TokenKind, Range<usize>)> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        // The patterns cover every character, so an error can only be an
        // unexpected gap. Treat it as ordinary text rather than losing input.
        let kind = result.unwrap_or(TokenKind::Text);
        tokens.push((kind, lexer.span()));
    }

    tokens
}

/// Produce the token sequence the parser consumes.
///
/// Whitespace directly after a `#` is dropped, so `"# Title"` becomes `#`,
/// `Title`. A lone carriage return counts as whitespace here. The sequence always ends with a synthetic newline positioned just
/// past the last character, which gives every parsing loop a bound to stop at.
pub fn lex(source: &str) -> Vec<Token> {
    let location = SourceLocation::new(source);
    let mut tokens: Vec<Token> = Vec::new();
    let mut after_hash = false;

    for (kind, span) in tokenize_with_spans(source) {
        let follows_hash = after_hash;
        after_hash = kind == TokenKind::Hash;

        if follows_hash {
            match kind {
                // Dropped pieces keep the run going: "# \r x" still trims " x"
                TokenKind::CarriageReturn => {
                    after_hash = true;
                    continue;
                }
                TokenKind::Text => {
                    let slice = &source[span.clone()];
                    let kept = slice.trim_start_matches(|c: char| c.is_whitespace());
                    if kept.is_empty() {
                        after_hash = true;
                        continue;
                    }
                    let start = span.end - kept.len();
                    tokens.push(to_token(source, &location, kind, start..span.end));
                    continue;
                }
                _ => {}
            }
        }

        tokens.push(to_token(source, &location, kind, span));
    }

    tokens.push(sentinel(location.end()));

    tracing::debug!(count = tokens.len(), "lexed source");
    tokens
}

/// The end-of-input newline appended by [`lex`]
pub fn sentinel(position: Position) -> Token {
    Token::new(TokenKind::Newline, "\n", position)
}

fn to_token(
    source: &str,
    location: &SourceLocation<'_>,
    kind: TokenKind,
    span: Range<usize>,
) -> Token {
    let text = match kind {
        TokenKind::Newline => "\n",
        _ => &source[span.clone()],
    };
    Token::new(kind, text, location.byte_to_position(span.start))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_heading_whitespace_is_dropped() {
        let tokens = lex("# Title");
        assert_eq!(texts(&tokens), vec!["#", "Title", "\n"]);
        assert_eq!(tokens[1].position, Position::new(1, 3));
    }

    #[test]
    fn test_whole_whitespace_run_is_dropped() {
        let tokens = lex("##  \tSub\n");
        assert_eq!(texts(&tokens), vec!["#", "#", "Sub", "\n", "\n"]);
        assert_eq!(tokens[2].position, Position::new(1, 6));
    }

    #[test]
    fn test_whitespace_only_after_hash_disappears() {
        let tokens = lex("#   \nnext");
        assert_eq!(texts(&tokens), vec!["#", "\n", "next", "\n"]);
    }

    #[test]
    fn test_lone_carriage_return_after_hash_is_dropped() {
        assert_eq!(texts(&lex("#\r")), vec!["#", "\n"]);

        let tokens = lex("# \r x");
        assert_eq!(texts(&tokens), vec!["#", "x", "\n"]);
        assert_eq!(tokens[1].position, Position::new(1, 5));
    }

    #[test]
    fn test_carriage_return_elsewhere_is_kept() {
        let tokens = lex("a\rb");
        assert_eq!(texts(&tokens), vec!["a", "\r", "b", "\n"]);
        assert_eq!(tokens[1].kind, TokenKind::CarriageReturn);
    }

    #[test]
    fn test_raw_tokenize_keeps_heading_whitespace() {
        let tokens = tokenize("# Title");
        assert_eq!(texts(&tokens), vec!["#", " Title"]);
    }

    #[test]
    fn test_whitespace_elsewhere_is_kept() {
        let tokens = lex("a *b* c");
        assert_eq!(texts(&tokens), vec!["a ", "*", "b", "*", " c", "\n"]);
    }

    #[test]
    fn test_image_tokens() {
        let tokens = lex("![alt text](http://x.y/z.png)");
        assert_eq!(
            texts(&tokens),
            vec!["!", "[", "alt text", "]", "(", "http://x.y/z.png", ")", "\n"]
        );
    }

    #[test]
    fn test_positions_track_lines() {
        let tokens = lex("ab\n*c*");
        assert_eq!(tokens[0].position, Position::new(1, 1));
        assert_eq!(tokens[1].position, Position::new(1, 3));
        assert_eq!(tokens[2].position, Position::new(2, 1));
        assert_eq!(tokens[3].position, Position::new(2, 2));
        assert_eq!(tokens[4].position, Position::new(2, 3));
    }

    #[test]
    fn test_sentinel_position() {
        let tokens = lex("*unterminated");
        let last = tokens.last().unwrap();
        assert!(last.is_newline());
        assert_eq!(last.position, Position::new(1, 14));
    }

    #[test]
    fn test_sentinel_follows_trailing_newline() {
        let tokens = lex("x\n");
        assert_eq!(texts(&tokens), vec!["x", "\n", "\n"]);
        assert_eq!(tokens[2].position, Position::new(2, 1));
    }

    #[test]
    fn test_empty_source_is_just_the_sentinel() {
        let tokens = lex("");
        assert_eq!(tokens, vec![sentinel(Position::new(1, 1))]);
    }

    #[test]
    fn test_crlf_is_a_single_newline() {
        let tokens = lex("a\r\nb");
        assert_eq!(texts(&tokens), vec!["a", "\n", "b", "\n"]);
        assert_eq!(tokens[2].position, Position::new(2, 1));
    }
}

//! Recursive-descent parser
//!
//! Grammar, one method per production:
//!
//! ```text
//! document      := node*
//! node          := '#' header | '```' codeBlock | '!' image | '\n' | paragraph
//! header        := '#'* formattedText({'\n'})
//! paragraph     := formattedText({'\n'})
//! codeBlock     := rawTextUntil('```')
//! image         := '[' raw ']' '(' raw ')'
//! link          := raw ']' '(' raw ')'
//! formattedText := (italic | bold | code | link | raw)* up to a bound
//! italic        := formattedText(bounds + {'*', '_'}) ('*' | '_')
//! bold          := formattedText(bounds + {'**', '__'}) ('**' | '__')
//! code          := rawTextUntil('`')
//! ```
//!
//! Dispatch looks only at the literal text of the next token and never
//! backtracks. Closers need not match their opener: `_x*` is an italic.

use super::bounds::Bounds;
use super::error::{Found, ParseError};
use crate::ast::{Document, Node};
use crate::lexer::Token;
use serde::Deserialize;

pub const DEFAULT_MAX_NESTING_DEPTH: usize = 64;

pub type ParseResult<T> = Result<T, ParseError>;

/// Knobs for a single parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// How many italic/bold spans may be open at once
    pub max_nesting_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

/// Parser state: the borrowed token sequence and a cursor that only moves forward.
///
/// The token slice must end with the sentinel newline produced by
/// [`crate::lexer::lex`]. The cursor never moves past it.
pub struct Parser<'t> {
    tokens: &'t [Token],
    cursor: usize,
    options: ParserOptions,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self::with_options(tokens, ParserOptions::default())
    }

    pub fn with_options(tokens: &'t [Token], options: ParserOptions) -> Self {
        debug_assert!(
            tokens.last().is_some_and(Token::is_newline),
            "token sequence must end with the lexer's sentinel"
        );
        Self {
            tokens,
            cursor: 0,
            options,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True once only the sentinel is left
    pub fn is_at_end(&self) -> bool {
        self.cursor + 1 >= self.tokens.len()
    }

    pub fn peek(&self) -> &'t Token {
        &self.tokens[self.cursor]
    }

    pub fn pop(&mut self) -> &'t Token {
        let token = self.peek();
        if !self.is_at_end() {
            self.cursor += 1;
        }
        token
    }

    pub fn accept(&mut self, literal: &str) -> Option<&'t Token> {
        if self.peek().text == literal {
            Some(self.pop())
        } else {
            None
        }
    }

    pub fn expect(&mut self, literal: &'static str) -> ParseResult<&'t Token> {
        match self.accept(literal) {
            Some(token) => Ok(token),
            None => Err(self.missing(literal)),
        }
    }

    fn missing(&self, expected: &'static str) -> ParseError {
        let token = self.peek();
        ParseError::MissingDelimiter {
            position: token.position,
            expected,
            found: Found::classify(token),
        }
    }

    pub fn parse_document(&mut self) -> ParseResult<Document> {
        let mut nodes = Vec::new();
        while !self.is_at_end() {
            if let Some(node) = self.parse_node()? {
                nodes.push(node);
            }
        }
        tracing::debug!(nodes = nodes.len(), "parsed document");
        Ok(Document::new(nodes))
    }

    /// Parse one top-level block. Blank lines produce nothing.
    pub fn parse_node(&mut self) -> ParseResult<Option<Node>> {
        let start = self.peek().position;
        let node = if self.accept("#").is_some() {
            self.parse_header()?
        } else if self.accept("```").is_some() {
            self.parse_code_block()?
        } else if self.accept("!").is_some() {
            self.parse_image()?
        } else if self.accept("\n").is_some() {
            return Ok(None);
        } else {
            self.parse_paragraph()?
        };
        tracing::trace!(kind = node.kind_name(), %start, "parsed block");
        Ok(Some(node))
    }

    fn parse_header(&mut self) -> ParseResult<Node> {
        let mut level = 1;
        while self.accept("#").is_some() {
            level += 1;
        }
        let children = self.parse_formatted_text(Bounds::line(), 0)?;
        Ok(Node::Header { level, children })
    }

    fn parse_paragraph(&mut self) -> ParseResult<Node> {
        let children = self.parse_formatted_text(Bounds::line(), 0)?;
        Ok(Node::Paragraph { children })
    }

    fn parse_code_block(&mut self) -> ParseResult<Node> {
        let text = self.raw_text_until("```")?;
        Ok(Node::CodeBlock { text })
    }

    fn parse_image(&mut self) -> ParseResult<Node> {
        self.expect("[")?;
        let alt = self.raw_token("]")?;
        self.expect("]")?;
        self.expect("(")?;
        let url = self.raw_token(")")?;
        self.expect(")")?;
        Ok(Node::Image { alt, url })
    }

    /// Inline content up to (not including) the first token in `bounds`
    fn parse_formatted_text(&mut self, bounds: Bounds, depth: usize) -> ParseResult<Vec<Node>> {
        let mut nodes = Vec::new();
        while !bounds.contains(&self.peek().text) {
            let node = if let Some(opener) = self.accept_any(&["_", "*"]) {
                self.parse_italic(opener, bounds, depth)?
            } else if let Some(opener) = self.accept_any(&["__", "**"]) {
                self.parse_bold(opener, bounds, depth)?
            } else if self.accept("`").is_some() {
                self.parse_code()?
            } else if self.accept("[").is_some() {
                self.parse_link()?
            } else {
                Node::text(self.pop().text.as_str())
            };
            nodes.push(node);
        }
        Ok(nodes)
    }

    fn parse_italic(&mut self, opener: &Token, bounds: Bounds, depth: usize) -> ParseResult<Node> {
        let depth = self.descend(opener, depth)?;
        let children = self.parse_formatted_text(bounds.italic(), depth)?;
        if self.accept("*").is_none() {
            self.expect("_")?;
        }
        Ok(Node::Italic { children })
    }

    fn parse_bold(&mut self, opener: &Token, bounds: Bounds, depth: usize) -> ParseResult<Node> {
        let depth = self.descend(opener, depth)?;
        let children = self.parse_formatted_text(bounds.bold(), depth)?;
        if self.accept("**").is_none() {
            self.expect("__")?;
        }
        Ok(Node::Bold { children })
    }

    fn parse_code(&mut self) -> ParseResult<Node> {
        let text = self.raw_text_until("`")?;
        Ok(Node::Code { text })
    }

    fn parse_link(&mut self) -> ParseResult<Node> {
        let text = self.raw_token("]")?;
        self.expect("]")?;
        self.expect("(")?;
        let url = self.raw_token(")")?;
        self.expect(")")?;
        Ok(Node::Link { text, url })
    }

    fn accept_any(&mut self, literals: &[&str]) -> Option<&'t Token> {
        literals.iter().find_map(|literal| self.accept(literal))
    }

    fn descend(&self, opener: &Token, depth: usize) -> ParseResult<usize> {
        let limit = self.options.max_nesting_depth;
        if depth >= limit {
            return Err(ParseError::TooDeeplyNested {
                position: opener.position,
                limit,
            });
        }
        Ok(depth + 1)
    }

    /// Concatenate raw token text until `closer` is consumed
    fn raw_text_until(&mut self, closer: &'static str) -> ParseResult<String> {
        let mut text = String::new();
        while self.accept(closer).is_none() {
            if self.is_at_end() {
                return Err(self.missing(closer));
            }
            text.push_str(&self.pop().text);
        }
        Ok(text)
    }

    /// Take exactly one token verbatim. `next` is the literal that must follow it,
    /// reported if the input ends first.
    fn raw_token(&mut self, next: &'static str) -> ParseResult<String> {
        if self.is_at_end() {
            return Err(self.missing(next));
        }
        Ok(self.pop().text.clone())
    }
}

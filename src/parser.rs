//! Parser module
//!
//! Consumes the token sequence produced by [crate::lexer::lex] and builds the
//! [Document] tree. Parsing is all-or-nothing: the first missing delimiter aborts
//! the whole document with a [ParseError] carrying its position.
//!
//! Inline formatting is parsed with a bound set threaded through the recursion
//! (see [bounds]); that is what keeps `*a **b** c*` from closing the italic on
//! the inner `**`.

pub mod bounds;
pub mod error;
#[allow(clippy::module_inception)]
pub mod parser;


pub use bounds::{Bound, Bounds};
pub use error::{Found, ParseError};
pub use parser::{ParseResult, Parser, ParserOptions, DEFAULT_MAX_NESTING_DEPTH};

use crate::ast::Document;
use crate::lexer::{lex, Token};

/// Lex and parse a source string with default options
pub fn parse(source: &str) -> ParseResult<Document> {
    parse_with_options(source, ParserOptions::default())
}

pub fn parse_with_options(source: &str, options: ParserOptions) -> ParseResult<Document> {
    let tokens = lex(source);
    parse_tokens(&tokens, options)
}

/// Parse an already lexed token sequence. It must end with the lexer's sentinel.
pub fn parse_tokens(tokens: &[Token], options: ParserOptions) -> ParseResult<Document> {
    Parser::with_options(tokens, options).parse_document()
}

//! # mdhtml
//!
//! Converts a constrained Markdown dialect into HTML: headers, paragraphs,
//! fenced code blocks, images, italics, bold, inline code and links, with
//! inline styles nested freely.
//!
//! The pipeline runs one way, text → tokens → AST → HTML:
//!
//! - [lexer]: classifies characters into positioned tokens
//! - [parser]: recursive descent over the tokens, producing an [ast::Document]
//! - [formats]: renders the tree to HTML (or dumps it for inspection)
//! - [processor]: ties the stages together for strings and files
//! - [settings]: layered configuration for the command-line tool
//!
//! ## Testing
//!
//! Parser tests describe expected trees with the fluent API in [testing].

pub mod ast;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod settings;
pub mod testing;

pub use ast::{Document, Node};
pub use parser::{ParseError, ParserOptions};
pub use processor::{convert, OutputFormat, ProcessingError};

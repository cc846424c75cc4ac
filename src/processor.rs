//! File processing API
//!
//! Runs the lexer, parser and a formatter over a source and returns the output
//! text. The binary is a thin wrapper around [`process_file`]; library callers
//! that only want HTML can use [`convert`].
//!
//! Formats are named after the stage they expose:
//!
//! - `html`: the converted document
//! - `ast-tag`, `ast-json`: the parsed tree
//! - `token-simple`, `token-json`: the token sequence the parser sees

use crate::ast::Document;
use crate::formats::{html, tag};
use crate::lexer::{lex, Token};
use crate::parser::{parse_tokens, ParseError, ParserOptions};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// What to produce from a source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum OutputFormat {
    Html,
    AstTag,
    AstJson,
    TokenSimple,
    TokenJson,
}

impl OutputFormat {
    pub fn all() -> &'static [OutputFormat] {
        &[
            OutputFormat::Html,
            OutputFormat::AstTag,
            OutputFormat::AstJson,
            OutputFormat::TokenSimple,
            OutputFormat::TokenJson,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::AstTag => "ast-tag",
            OutputFormat::AstJson => "ast-json",
            OutputFormat::TokenSimple => "token-simple",
            OutputFormat::TokenJson => "token-json",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Html => "HTML, one fragment per top-level block",
            OutputFormat::AstTag => "XML-like dump of the parsed tree",
            OutputFormat::AstJson => "JSON dump of the parsed tree",
            OutputFormat::TokenSimple => "one token per line with its position",
            OutputFormat::TokenJson => "JSON dump of the token sequence",
        }
    }

    fn needs_parse(&self) -> bool {
        matches!(
            self,
            OutputFormat::Html | OutputFormat::AstTag | OutputFormat::AstJson
        )
    }
}

impl FromStr for OutputFormat {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::all()
            .iter()
            .copied()
            .find(|format| format.name() == s)
            .ok_or_else(|| ProcessingError::InvalidFormat(s.to_string()))
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = ProcessingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur during processing
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("cannot read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("invalid format `{0}` (expected one of: html, ast-tag, ast-json, token-simple, token-json)")]
    InvalidFormat(String),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convert a source string to HTML
pub fn convert(source: &str, options: &ParserOptions) -> Result<String, ParseError> {
    let tokens = lex(source);
    let doc = parse_tokens(&tokens, *options)?;
    Ok(html::render_document(&doc))
}

/// Produce `format` from a source string
pub fn process_source(
    source: &str,
    format: OutputFormat,
    options: &ParserOptions,
) -> Result<String, ProcessingError> {
    let tokens = lex(source);

    if !format.needs_parse() {
        return format_tokens(&tokens, format);
    }

    let doc = parse_tokens(&tokens, *options)?;
    tracing::debug!(nodes = doc.len(), %format, "formatting document");
    format_document(&doc, format)
}

/// Read a file and produce `format` from it. An unreadable file is an error,
/// never an empty document.
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    format: OutputFormat,
    options: &ParserOptions,
) -> Result<String, ProcessingError> {
    let file_path = file_path.as_ref();
    let content = fs::read_to_string(file_path).map_err(|source| ProcessingError::Io {
        path: file_path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %file_path.display(), bytes = content.len(), %format, "processing file");
    process_source(&content, format, options)
}

fn format_document(doc: &Document, format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Html => Ok(html::render_document(doc)),
        OutputFormat::AstTag => Ok(tag::serialize_document(doc)),
        OutputFormat::AstJson => Ok(serde_json::to_string_pretty(doc)?),
        OutputFormat::TokenSimple | OutputFormat::TokenJson => Err(
            ProcessingError::InvalidFormat(format!("{} is a token format", format)),
        ),
    }
}

fn format_tokens(tokens: &[Token], format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::TokenSimple => {
            let mut result = String::new();
            for token in tokens {
                result.push_str(&format!(
                    "{} {} {:?}\n",
                    token.position, token.kind, token.text
                ));
            }
            Ok(result)
        }
        OutputFormat::TokenJson => Ok(serde_json::to_string_pretty(tokens)?),
        OutputFormat::Html | OutputFormat::AstTag | OutputFormat::AstJson => Err(
            ProcessingError::InvalidFormat(format!("{} is a document format", format)),
        ),
    }
}

//! Output formats
//!
//! - [html]: the conversion target
//! - [tag]: an XML-like dump of the AST for inspection

pub mod html;
pub mod tag;

pub use html::{render_document, render_node};
pub use tag::serialize_document as serialize_ast_tag;

//! XML-like AST tag serialization
//!
//! Serializes a document to an indented, XML-like dump that mirrors the tree
//! exactly. Meant for inspecting what the parser built, not for publishing.
//!
//! ## Format
//!
//! - Node kind → tag name
//! - Leaf text → text content
//! - Header level, link and image urls → attributes
//! - Children → nested one level deeper
//!
//! ## Example
//!
//! ```text
//! <document>
//!   <header level="1">
//!     <text>Intro</text>
//!   </header>
//!   <paragraph>
//!     <text>see </text>
//!     <link url="http://x.y">docs</link>
//!   </paragraph>
//! </document>
//! ```

use crate::ast::{Document, Node};

pub fn serialize_document(doc: &Document) -> String {
    let mut result = String::new();
    result.push_str("<document>\n");
    for node in &doc.nodes {
        serialize_node(node, 1, &mut result);
    }
    result.push_str("</document>");
    result
}

fn serialize_node(node: &Node, indent_level: usize, output: &mut String) {
    let indent = "  ".repeat(indent_level);
    let tag = node.kind_name();

    match node {
        Node::CodeBlock { text } | Node::Text { text } | Node::Code { text } => {
            output.push_str(&format!("{}<{}>{}</{}>\n", indent, tag, escape_xml(text), tag));
        }
        Node::Link { text, url } => {
            output.push_str(&format!(
                "{}<link url=\"{}\">{}</link>\n",
                indent,
                escape_xml(url),
                escape_xml(text)
            ));
        }
        Node::Image { alt, url } => {
            output.push_str(&format!(
                "{}<image url=\"{}\">{}</image>\n",
                indent,
                escape_xml(url),
                escape_xml(alt)
            ));
        }
        Node::Header { level, .. } => {
            let open = format!("header level=\"{}\"", level);
            serialize_container(&open, tag, node.children(), indent_level, output);
        }
        Node::Paragraph { .. } | Node::Italic { .. } | Node::Bold { .. } => {
            serialize_container(tag, tag, node.children(), indent_level, output);
        }
    }
}

fn serialize_container(
    open: &str,
    close: &str,
    children: &[Node],
    indent_level: usize,
    output: &mut String,
) {
    let indent = "  ".repeat(indent_level);
    if children.is_empty() {
        output.push_str(&format!("{}<{}></{}>\n", indent, open, close));
        return;
    }

    output.push_str(&format!("{}<{}>\n", indent, open));
    for child in children {
        serialize_node(child, indent_level + 1, output);
    }
    output.push_str(&format!("{}</{}>\n", indent, close));
}

/// Escape XML special characters. Line breaks become character references so
/// every node stays on one line.
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
        .replace('\n', "&#10;")
}

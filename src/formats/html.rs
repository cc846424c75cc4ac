//! HTML rendering
//!
//! One template per node variant. Containers wrap their children's rendering
//! in open/close tags; leaves interpolate their text verbatim. Nothing is
//! escaped: `<` and `&` in the source reach the output unchanged.

use crate::ast::{Document, Node};

/// Render a single node (and its subtree) to HTML
pub fn render_node(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

/// Render a whole document, one fragment per top-level node.
///
/// Each fragment is followed by a block separator: a single newline after a
/// header and a blank line after every other block.
pub fn render_document(doc: &Document) -> String {
    let mut out = String::new();
    for node in &doc.nodes {
        write_node(node, &mut out);
        out.push_str(block_separator(node));
    }
    out
}

fn block_separator(node: &Node) -> &'static str {
    match node {
        Node::Header { .. } => "\n",
        _ => "\n\n",
    }
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Header { level, children } => {
            out.push_str(&format!("<h{}>", level));
            write_children(children, out);
            out.push_str(&format!("</h{}>", level));
        }
        Node::Paragraph { children } => wrap("p", children, out),
        Node::CodeBlock { text } => {
            out.push_str("<pre><code>");
            out.push_str(text);
            out.push_str("</code></pre>");
        }
        Node::Image { alt, url } => {
            out.push_str(&format!("<img src=\"{}\" alt=\"{}\" />", url, alt));
        }
        Node::Text { text } => out.push_str(text),
        Node::Italic { children } => wrap("em", children, out),
        Node::Bold { children } => wrap("strong", children, out),
        Node::Code { text } => {
            out.push_str("<code>");
            out.push_str(text);
            out.push_str("</code>");
        }
        Node::Link { text, url } => {
            out.push_str(&format!("<a href=\"{}\">{}</a>", url, text));
        }
    }
}

fn wrap(tag: &str, children: &[Node], out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    write_children(children, out);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_children(children: &[Node], out: &mut String) {
    for child in children {
        write_node(child, out);
    }
}

//! Abstract syntax tree
//!
//! A closed set of node variants built bottom-up by the parser. Containers
//! (headers, paragraphs, italics, bolds) own their children in document order;
//! leaves own text copied verbatim from source tokens. Nothing is escaped or
//! normalized here, and nodes are never mutated after construction.
//!
//! Renderers live in [crate::formats] and dispatch over [`Node`] with a single
//! exhaustive match, so a new variant fails to compile until every format
//! handles it.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Header { level: usize, children: Vec<Node> },
    Paragraph { children: Vec<Node> },
    CodeBlock { text: String },
    Image { alt: String, url: String },
    Text { text: String },
    Italic { children: Vec<Node> },
    Bold { children: Vec<Node> },
    Code { text: String },
    Link { text: String, url: String },
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    /// Child nodes of a container, or an empty slice for leaves
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Header { children, .. }
            | Node::Paragraph { children }
            | Node::Italic { children }
            | Node::Bold { children } => children,
            Node::CodeBlock { .. }
            | Node::Image { .. }
            | Node::Text { .. }
            | Node::Code { .. }
            | Node::Link { .. } => &[],
        }
    }

    /// Lowercase name of the variant, as used in the tag format
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Header { .. } => "header",
            Node::Paragraph { .. } => "paragraph",
            Node::CodeBlock { .. } => "code_block",
            Node::Image { .. } => "image",
            Node::Text { .. } => "text",
            Node::Italic { .. } => "italic",
            Node::Bold { .. } => "bold",
            Node::Code { .. } => "code",
            Node::Link { .. } => "link",
        }
    }

    /// Concatenated leaf text of this subtree, without any markup
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::CodeBlock { text } | Node::Text { text } | Node::Code { text } => {
                out.push_str(text)
            }
            Node::Link { text, .. } => out.push_str(text),
            Node::Image { alt, .. } => out.push_str(alt),
            Node::Header { children, .. }
            | Node::Paragraph { children }
            | Node::Italic { children }
            | Node::Bold { children } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }
}

/// The ordered top-level nodes of a parsed source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_of_leaves_are_empty() {
        assert!(Node::text("x").children().is_empty());
        assert!(Node::Link {
            text: "t".to_string(),
            url: "u".to_string()
        }
        .children()
        .is_empty());
    }

    #[test]
    fn test_plain_text_flattens_nesting() {
        let node = Node::Paragraph {
            children: vec![
                Node::text("a "),
                Node::Bold {
                    children: vec![Node::Italic {
                        children: vec![Node::text("b")],
                    }],
                },
                Node::text(" c"),
            ],
        };
        assert_eq!(node.plain_text(), "a b c");
    }

    #[test]
    fn test_json_shape() {
        let node = Node::Header {
            level: 1,
            children: vec![Node::text("T")],
        };
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "header");
        assert_eq!(json["level"], 1);
        assert_eq!(json["children"][0]["type"], "text");
        assert_eq!(json["children"][0]["text"], "T");
    }
}

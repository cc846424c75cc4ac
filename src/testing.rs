//! Fluent assertion API for parsed documents
//!
//! Keeps parser tests readable by describing the expected tree shape instead of
//! building full expected values.
//!
//! ```rust
//! use mdhtml::testing::assert_ast;
//!
//! let doc = mdhtml::parser::parse("*a **b** c*").unwrap();
//!
//! assert_ast(&doc).node_count(1).node(0, |node| {
//!     node.assert_paragraph().child(0, |em| {
//!         em.assert_italic()
//!             .child_count(3)
//!             .child(1, |strong| {
//!                 strong.assert_bold().text("b");
//!             });
//!     });
//! });
//! ```

use crate::ast::{Document, Node};

// ============================================================================
// Entry Point
// ============================================================================

pub fn assert_ast(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

// ============================================================================
// Document Assertions
// ============================================================================

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the number of top-level nodes
    pub fn node_count(self, expected: usize) -> Self {
        let actual = self.doc.nodes.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} nodes, found {}: [{}]",
            expected,
            actual,
            summarize(&self.doc.nodes)
        );
        self
    }

    /// Assert on a top-level node by index
    pub fn node<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assert!(
            index < self.doc.nodes.len(),
            "Node index {} out of bounds (document has {} nodes)",
            index,
            self.doc.nodes.len()
        );
        assertion(NodeAssertion {
            node: &self.doc.nodes[index],
            context: format!("nodes[{}]", index),
        });
        self
    }
}

// ============================================================================
// Node Assertions
// ============================================================================

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    pub fn assert_header(self, level: usize) -> ContainerAssertion<'a> {
        match self.node {
            Node::Header {
                level: actual,
                children,
            } => {
                assert_eq!(
                    *actual, level,
                    "{}: Expected header level {}, found {}",
                    self.context, level, actual
                );
                ContainerAssertion {
                    children,
                    context: self.context,
                }
            }
            other => self.wrong_kind("header", other),
        }
    }

    pub fn assert_paragraph(self) -> ContainerAssertion<'a> {
        match self.node {
            Node::Paragraph { children } => ContainerAssertion {
                children,
                context: self.context,
            },
            other => self.wrong_kind("paragraph", other),
        }
    }

    pub fn assert_italic(self) -> ContainerAssertion<'a> {
        match self.node {
            Node::Italic { children } => ContainerAssertion {
                children,
                context: self.context,
            },
            other => self.wrong_kind("italic", other),
        }
    }

    pub fn assert_bold(self) -> ContainerAssertion<'a> {
        match self.node {
            Node::Bold { children } => ContainerAssertion {
                children,
                context: self.context,
            },
            other => self.wrong_kind("bold", other),
        }
    }

    pub fn assert_text(self, expected: &str) {
        match self.node {
            Node::Text { text } => assert_eq!(text, expected, "{}: text mismatch", self.context),
            other => self.wrong_kind("text", other),
        }
    }

    pub fn assert_code(self, expected: &str) {
        match self.node {
            Node::Code { text } => assert_eq!(text, expected, "{}: code mismatch", self.context),
            other => self.wrong_kind("code", other),
        }
    }

    pub fn assert_code_block(self, expected: &str) {
        match self.node {
            Node::CodeBlock { text } => {
                assert_eq!(text, expected, "{}: code block mismatch", self.context)
            }
            other => self.wrong_kind("code_block", other),
        }
    }

    pub fn assert_link(self, expected_text: &str, expected_url: &str) {
        match self.node {
            Node::Link { text, url } => {
                assert_eq!(text, expected_text, "{}: link text mismatch", self.context);
                assert_eq!(url, expected_url, "{}: link url mismatch", self.context);
            }
            other => self.wrong_kind("link", other),
        }
    }

    pub fn assert_image(self, expected_alt: &str, expected_url: &str) {
        match self.node {
            Node::Image { alt, url } => {
                assert_eq!(alt, expected_alt, "{}: image alt mismatch", self.context);
                assert_eq!(url, expected_url, "{}: image url mismatch", self.context);
            }
            other => self.wrong_kind("image", other),
        }
    }

    fn wrong_kind(&self, expected: &str, found: &Node) -> ! {
        panic!(
            "{}: Expected {}, found {} ({:?})",
            self.context,
            expected,
            found.kind_name(),
            found.plain_text()
        )
    }
}

// ============================================================================
// Container Assertions
// ============================================================================

pub struct ContainerAssertion<'a> {
    children: &'a [Node],
    context: String,
}

impl<'a> ContainerAssertion<'a> {
    pub fn child_count(self, expected: usize) -> Self {
        assert_eq!(
            self.children.len(),
            expected,
            "{}: Expected {} children, found {}: [{}]",
            self.context,
            expected,
            self.children.len(),
            summarize(self.children)
        );
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assert!(
            index < self.children.len(),
            "{}: Child index {} out of bounds ({} children)",
            self.context,
            index,
            self.children.len()
        );
        assertion(NodeAssertion {
            node: &self.children[index],
            context: format!("{}.children[{}]", self.context, index),
        });
        self
    }

    /// Assert the concatenated leaf text of all children
    pub fn text(self, expected: &str) -> Self {
        let actual: String = self.children.iter().map(Node::plain_text).collect();
        assert_eq!(actual, expected, "{}: text mismatch", self.context);
        self
    }
}

fn summarize(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(|node| node.kind_name())
        .collect::<Vec<_>>()
        .join(", ")
}

//! In-memory markup tree produced by views
//!
//! Views map state to nested markup instead of drawing anything
//! themselves. Renderers walk the tree (the terminal frontend flattens it
//! into display lines); tests assert against the same lines, so the view
//! path exercised in tests is the one shown on screen.

use serde::{Deserialize, Serialize};

/// A node in the view markup tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Markup {
    /// A named container holding child nodes. The name identifies the
    /// block to renderers and tests; it is not itself displayed.
    Block {
        /// Block name, e.g. `"container"` or `"posts"`.
        name: String,
        /// Child nodes in display order.
        children: Vec<Markup>,
    },
    /// A leaf line of display text.
    Text(String),
}

/// Build a named block node.
pub fn block(name: impl Into<String>, children: Vec<Markup>) -> Markup {
    Markup::Block {
        name: name.into(),
        children,
    }
}

/// Build a text leaf node.
pub fn text(content: impl Into<String>) -> Markup {
    Markup::Text(content.into())
}

impl Markup {
    /// Flatten the tree into display lines, depth-first.
    ///
    /// Block names do not render; text leaves do, in tree order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_lines(&mut out);
        out
    }

    /// Find the first block with the given name, including this node.
    #[must_use]
    pub fn find_block(&self, name: &str) -> Option<&Markup> {
        match self {
            Markup::Block {
                name: own,
                children,
            } => {
                if own == name {
                    return Some(self);
                }
                children.iter().find_map(|child| child.find_block(name))
            }
            Markup::Text(_) => None,
        }
    }

    fn collect_lines(&self, out: &mut Vec<String>) {
        match self {
            Markup::Text(content) => out.push(content.clone()),
            Markup::Block { children, .. } => {
                for child in children {
                    child.collect_lines(out);
                }
            }
        }
    }
}

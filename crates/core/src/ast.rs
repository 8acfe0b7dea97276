//! tree-sitter parsing for UI5 controller sources.
//!
//! Wraps a JavaScript source file as a [`SourceDocument`]: the raw text plus
//! its parse tree, with byte spans connecting every node back to the text so
//! untouched regions survive mutation verbatim.

use tree_sitter::{Language, Node, Parser, Point, Tree};

use crate::error::{Error, Result};

/// A parsed JavaScript source file.
///
/// The text is the single source of truth; the tree only carries structure
/// and byte spans. Serializing an unmutated document is the identity.
#[derive(Debug)]
pub struct SourceDocument {
    text: String,
    tree: Tree,
}

impl SourceDocument {
    /// Parse `text` with the JavaScript grammar.
    ///
    /// A tree containing ERROR or missing nodes is rejected with
    /// [`Error::Syntax`] — the pipeline must never mutate a file it cannot
    /// fully account for.
    pub fn parse(text: String) -> Result<Self> {
        let tree = parse_js(&text)?;
        if tree.root_node().has_error() {
            let at = first_error(tree.root_node())
                .map(|p| format!(" at line {}, column {}", p.row + 1, p.column + 1))
                .unwrap_or_default();
            return Err(Error::Syntax(format!("invalid JavaScript{at}")));
        }
        Ok(SourceDocument { text, tree })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Regenerate source text from the (unmutated) tree.
    ///
    /// Because the tree is a lossless view over `text`, this reproduces the
    /// original byte-for-byte — no statement or comment can be dropped or
    /// reordered.
    pub fn serialize(&self) -> String {
        self.text.clone()
    }
}

/// Run the JavaScript grammar over `text`, without judging the result.
pub(crate) fn parse_js(text: &str) -> Result<Tree> {
    let language: Language = tree_sitter_javascript::LANGUAGE.into();
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| Error::Syntax(format!("failed to load JavaScript grammar: {e}")))?;
    parser
        .parse(text, None)
        .ok_or_else(|| Error::Syntax("parser produced no tree".to_string()))
}

/// Position of the first ERROR or missing node, in document order.
fn first_error(node: Node) -> Option<Point> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_position());
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(p) = first_error(child) {
            return Some(p);
        }
    }
    None
}

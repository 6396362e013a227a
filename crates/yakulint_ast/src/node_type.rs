//! Node type definitions for TxtAST.
//!
//! Only the subset of textlint's node types that localized strings are lifted
//! into. See: https://textlint.github.io/docs/txtnode

use serde::{Deserialize, Serialize};

/// Node types for TxtAST.
///
/// These correspond to textlint's node types as defined in
/// `@textlint/ast-node-types`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum NodeType {
    /// Root document node.
    Document,
    /// Container for one extracted literal.
    Paragraph,
    /// Plain text string.
    Str,
}

impl NodeType {
    /// Returns true if this node type can have children.
    #[inline]
    pub const fn is_parent(&self) -> bool {
        matches!(self, NodeType::Document | NodeType::Paragraph)
    }

    /// Returns true if this node type is a text node (has value).
    #[inline]
    pub const fn is_text(&self) -> bool {
        matches!(self, NodeType::Str)
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Use the same casing as serde serialization
        let name = match self {
            NodeType::Document => "Document",
            NodeType::Paragraph => "Paragraph",
            NodeType::Str => "Str",
        };
        write!(f, "{}", name)
    }
}

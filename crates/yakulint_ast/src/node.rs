//! TxtNode definition.
//!
//! The core AST node type used throughout YakuLint.

use serde::Serialize;

use crate::{Location, NodeType, Span};

/// A node in the TxtAST.
///
/// TxtNode represents a node in the abstract syntax tree handed to lint
/// rules. It is designed to be allocated in an arena for efficiency.
///
/// `span` and `loc` always describe the same region of the *original* file
/// text, and `raw` is exactly that region.
///
/// # Lifetime
///
/// The `'a` lifetime parameter ties this node to its arena allocator,
/// ensuring that all child references remain valid.
///
/// # Example
///
/// ```rust
/// use yakulint_ast::{AstArena, Location, NodeType, Position, Span, TxtNode};
///
/// let arena = AstArena::new();
/// let loc = Location::new(Position::new(1, 0), Position::new(1, 7));
///
/// let text_node = arena.alloc(TxtNode::new_text(
///     NodeType::Str,
///     "\"Hello\"",
///     Span::new(0, 7),
///     loc,
///     "Hello",
/// ));
///
/// let paragraph = TxtNode::new_parent(
///     NodeType::Paragraph,
///     "\"Hello\"",
///     Span::new(0, 7),
///     loc,
///     arena.alloc_slice_copy(&[*text_node]),
/// );
/// assert_eq!(paragraph.children[0].value, Some("Hello"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TxtNode<'a> {
    /// The type of this node.
    pub node_type: NodeType,

    /// Raw source text covered by this node.
    pub raw: &'a str,

    /// Byte span in the source text.
    pub span: Span,

    /// Line/column location in the source text.
    pub loc: Location,

    /// Child nodes (for parent nodes).
    pub children: &'a [TxtNode<'a>],

    /// Text value (for Str nodes).
    pub value: Option<&'a str>,
}

impl<'a> Serialize for TxtNode<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut len = 4; // type, raw, range, loc
        if self.node_type.is_parent() || !self.children.is_empty() {
            len += 1;
        }
        if self.value.is_some() {
            len += 1;
        }

        let mut state = serializer.serialize_struct("TxtNode", len)?;

        state.serialize_field("type", &self.node_type)?;
        state.serialize_field("raw", self.raw)?;
        state.serialize_field("range", &[self.span.start, self.span.end])?;
        state.serialize_field("loc", &self.loc)?;

        if self.node_type.is_parent() || !self.children.is_empty() {
            state.serialize_field("children", &self.children)?;
        }

        if let Some(value) = &self.value {
            state.serialize_field("value", value)?;
        }

        state.end()
    }
}

impl<'a> TxtNode<'a> {
    /// Creates a new parent node with children.
    #[inline]
    pub const fn new_parent(
        node_type: NodeType,
        raw: &'a str,
        span: Span,
        loc: Location,
        children: &'a [TxtNode<'a>],
    ) -> Self {
        Self {
            node_type,
            raw,
            span,
            loc,
            children,
            value: None,
        }
    }

    /// Creates a new text node with a value.
    #[inline]
    pub const fn new_text(
        node_type: NodeType,
        raw: &'a str,
        span: Span,
        loc: Location,
        value: &'a str,
    ) -> Self {
        Self {
            node_type,
            raw,
            span,
            loc,
            children: &[],
            value: Some(value),
        }
    }

    /// Returns true if this node has children.
    #[inline]
    pub const fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns true if this node is a text node.
    #[inline]
    pub const fn is_text(&self) -> bool {
        self.value.is_some()
    }

    /// Returns the text value of this node.
    ///
    /// For parent nodes, this returns None (use a visitor to collect text).
    #[inline]
    pub const fn text(&self) -> Option<&'a str> {
        self.value
    }
}

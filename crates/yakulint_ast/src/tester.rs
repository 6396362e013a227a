//! Structural checks for produced TxtAST trees.
//!
//! Mirrors what `@textlint/ast-tester` asserts before a tree is handed to
//! lint rules: a `Document` root, well-ordered ranges and locations, and
//! children that stay inside their parent in source order.

use std::ops::ControlFlow;

use thiserror::Error;

use crate::visitor::{VisitResult, Visitor, walk_node};
use crate::{Location, NodeType, Span, TxtNode};

/// A violation of the TxtAST shape contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AstShapeError {
    /// The root of the tree is not a Document.
    #[error("root node must be a Document, found {0}")]
    RootNotDocument(NodeType),

    /// `range[0]` is greater than `range[1]`.
    #[error("{node_type} has an inverted range {span:?}")]
    InvertedRange { node_type: NodeType, span: Span },

    /// `loc.start` comes after `loc.end`.
    #[error("{node_type} has an inverted location {loc:?}")]
    InvertedLocation { node_type: NodeType, loc: Location },

    /// `raw` does not have the length described by `range`.
    #[error("{node_type} raw length {raw_len} does not match range {span:?}")]
    RawLengthMismatch {
        node_type: NodeType,
        raw_len: usize,
        span: Span,
    },

    /// A text node without a value, or a value on a parent node.
    #[error("{0} has an invalid value field")]
    InvalidValue(NodeType),

    /// A leaf node type with children.
    #[error("{0} must not have children")]
    UnexpectedChildren(NodeType),

    /// A child that is not enclosed by its parent's range.
    #[error("{child:?} escapes parent range {parent:?}")]
    ChildOutOfParent { parent: Span, child: Span },

    /// Children that are not in source order.
    #[error("child {current:?} starts before previous sibling {previous:?}")]
    ChildrenOutOfOrder { previous: Span, current: Span },
}

/// Validates the shape of a tree rooted at `root`.
///
/// Returns the first violation found in depth-first order.
pub fn validate_ast(root: &TxtNode<'_>) -> Result<(), AstShapeError> {
    if root.node_type != NodeType::Document {
        return Err(AstShapeError::RootNotDocument(root.node_type));
    }

    let mut checker = ShapeChecker { error: None };
    let _ = walk_node(&mut checker, root);

    match checker.error {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

/// Returns true if `root` is a well-formed TxtAST document.
pub fn is_txt_ast(root: &TxtNode<'_>) -> bool {
    validate_ast(root).is_ok()
}

struct ShapeChecker {
    error: Option<AstShapeError>,
}

impl ShapeChecker {
    fn check(node: &TxtNode<'_>) -> Result<(), AstShapeError> {
        let node_type = node.node_type;

        if node.span.start > node.span.end {
            return Err(AstShapeError::InvertedRange {
                node_type,
                span: node.span,
            });
        }

        if node.loc.start > node.loc.end {
            return Err(AstShapeError::InvertedLocation {
                node_type,
                loc: node.loc,
            });
        }

        if node.raw.len() != node.span.len() as usize {
            return Err(AstShapeError::RawLengthMismatch {
                node_type,
                raw_len: node.raw.len(),
                span: node.span,
            });
        }

        if node_type.is_text() != node.value.is_some() {
            return Err(AstShapeError::InvalidValue(node_type));
        }

        if !node_type.is_parent() && node.has_children() {
            return Err(AstShapeError::UnexpectedChildren(node_type));
        }

        let mut previous: Option<Span> = None;
        for child in node.children {
            if !node.span.encloses(&child.span) {
                return Err(AstShapeError::ChildOutOfParent {
                    parent: node.span,
                    child: child.span,
                });
            }
            if let Some(prev) = previous
                && child.span.start < prev.start
            {
                return Err(AstShapeError::ChildrenOutOfOrder {
                    previous: prev,
                    current: child.span,
                });
            }
            previous = Some(child.span);
        }

        Ok(())
    }
}

impl<'a> Visitor<'a> for ShapeChecker {
    fn enter_node(&mut self, node: &TxtNode<'a>) -> VisitResult {
        match Self::check(node) {
            Ok(()) => ControlFlow::Continue(()),
            Err(error) => {
                self.error = Some(error);
                ControlFlow::Break(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AstArena, Position};
    use pretty_assertions::assert_eq;

    fn one_line(start: u32, end: u32) -> Location {
        Location::new(Position::new(1, start), Position::new(1, end))
    }

    fn literal<'a>(arena: &'a AstArena, source: &'a str, start: u32, end: u32) -> TxtNode<'a> {
        let raw = &source[start as usize..end as usize];
        let span = Span::new(start, end);
        let loc = one_line(start, end);
        let text = TxtNode::new_text(NodeType::Str, raw, span, loc, raw.trim_matches('"'));
        TxtNode::new_parent(
            NodeType::Paragraph,
            raw,
            span,
            loc,
            arena.alloc_slice_copy(&[text]),
        )
    }

    fn document<'a>(source: &'a str, children: &'a [TxtNode<'a>]) -> TxtNode<'a> {
        TxtNode::new_parent(
            NodeType::Document,
            source,
            Span::new(0, source.len() as u32),
            one_line(0, source.len() as u32),
            children,
        )
    }

    #[test]
    fn accepts_well_formed_document() {
        let arena = AstArena::new();
        let source = r#"{"a":"x","b":"y"}"#;
        let children = arena.alloc_slice_copy(&[
            literal(&arena, source, 5, 8),
            literal(&arena, source, 13, 16),
        ]);
        let doc = document(source, children);

        assert_eq!(validate_ast(&doc), Ok(()));
        assert!(is_txt_ast(&doc));
    }

    #[test]
    fn accepts_empty_document() {
        let doc = TxtNode::new_parent(
            NodeType::Document,
            "",
            Span::new(0, 0),
            Location::point(Position::START),
            &[],
        );
        assert!(is_txt_ast(&doc));
    }

    #[test]
    fn rejects_non_document_root() {
        let arena = AstArena::new();
        let source = r#"{"a":"x"}"#;
        let para = literal(&arena, source, 5, 8);

        assert_eq!(
            validate_ast(&para),
            Err(AstShapeError::RootNotDocument(NodeType::Paragraph))
        );
    }

    #[test]
    fn rejects_raw_length_mismatch() {
        let doc = TxtNode::new_parent(
            NodeType::Document,
            "abc",
            Span::new(0, 5),
            one_line(0, 5),
            &[],
        );

        assert!(matches!(
            validate_ast(&doc),
            Err(AstShapeError::RawLengthMismatch { raw_len: 3, .. })
        ));
    }

    #[test]
    fn rejects_children_out_of_order() {
        let arena = AstArena::new();
        let source = r#"{"a":"x","b":"y"}"#;
        let children = arena.alloc_slice_copy(&[
            literal(&arena, source, 13, 16),
            literal(&arena, source, 5, 8),
        ]);
        let doc = document(source, children);

        assert!(matches!(
            validate_ast(&doc),
            Err(AstShapeError::ChildrenOutOfOrder { .. })
        ));
    }

    #[test]
    fn rejects_child_outside_parent() {
        let arena = AstArena::new();
        let source = r#"{"a":"x"}"#;
        let children = arena.alloc_slice_copy(&[literal(&arena, source, 5, 8)]);
        let doc = TxtNode::new_parent(
            NodeType::Document,
            &source[..4],
            Span::new(0, 4),
            one_line(0, 4),
            children,
        );

        assert!(matches!(
            validate_ast(&doc),
            Err(AstShapeError::ChildOutOfParent { .. })
        ));
    }

    #[test]
    fn rejects_inverted_location() {
        let doc = TxtNode::new_parent(
            NodeType::Document,
            "",
            Span::new(0, 0),
            Location::new(Position::new(2, 0), Position::new(1, 0)),
            &[],
        );

        assert!(matches!(
            validate_ast(&doc),
            Err(AstShapeError::InvertedLocation { .. })
        ));
    }
}

//! Visitor trait for traversing TxtAST nodes.
//!
//! Each `visit_*` method has a default implementation that walks children,
//! allowing you to override only the node types you care about.

use std::ops::ControlFlow;

use crate::TxtNode;

use super::walk::walk_children;

/// Result type for visitor methods to control traversal.
///
/// - `ControlFlow::Continue(())` - continue visiting children
/// - `ControlFlow::Break(())` - stop traversal early
pub type VisitResult = ControlFlow<()>;

/// Visitor trait for traversing TxtAST nodes without modification.
///
/// Return `ControlFlow::Continue(())` to continue traversal, or
/// `ControlFlow::Break(())` to stop early. Use the `?` operator
/// for convenient propagation.
pub trait Visitor<'a>: Sized {
    /// Called before visiting any node.
    #[inline]
    fn enter_node(&mut self, _node: &TxtNode<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called after visiting a node and all its children.
    #[inline]
    fn exit_node(&mut self, _node: &TxtNode<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Visit a Document node.
    fn visit_document(&mut self, node: &TxtNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    /// Visit a Paragraph node.
    fn visit_paragraph(&mut self, node: &TxtNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    /// Visit a Str (text) node.
    fn visit_str(&mut self, _node: &TxtNode<'a>) -> VisitResult {
        ControlFlow::Continue(()) // Text leaf
    }
}

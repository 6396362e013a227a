//! Walk functions for AST traversal.
//!
//! These functions provide the traversal logic for the Visitor pattern.

use std::ops::ControlFlow;

use crate::{NodeType, TxtNode};

use super::visit::{VisitResult, Visitor};

/// Walks a node by dispatching to the appropriate type-specific visitor method.
///
/// Calls `enter_node`, then the `visit_*` method for the node type, then
/// `exit_node`.
pub fn walk_node<'a, V>(visitor: &mut V, node: &TxtNode<'a>) -> VisitResult
where
    V: Visitor<'a>,
{
    visitor.enter_node(node)?;

    let result = match node.node_type {
        NodeType::Document => visitor.visit_document(node),
        NodeType::Paragraph => visitor.visit_paragraph(node),
        NodeType::Str => visitor.visit_str(node),
    };

    result?;

    visitor.exit_node(node)
}

/// Walks all children of a node.
///
/// Supports early termination via `ControlFlow::Break`.
#[inline]
pub fn walk_children<'a, V>(visitor: &mut V, node: &TxtNode<'a>) -> VisitResult
where
    V: Visitor<'a>,
{
    for child in node.children {
        walk_node(visitor, child)?;
    }
    ControlFlow::Continue(())
}

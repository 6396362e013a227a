//! Visitor pattern for TxtAST traversal.
//!
//! - [`Visitor`] - Read-only traversal trait
//! - [`walk_node`] - Dispatch function for type-specific visitors
//! - [`walk_children`] - Traverse all children of a node
//!
//! # Example
//!
//! ```rust
//! use yakulint_ast::{AstArena, Location, NodeType, Span, TxtNode};
//! use yakulint_ast::visitor::{Visitor, VisitResult, walk_node};
//! use std::ops::ControlFlow;
//!
//! struct ValueCollector<'a> {
//!     values: Vec<&'a str>,
//! }
//!
//! impl<'a> Visitor<'a> for ValueCollector<'a> {
//!     fn visit_str(&mut self, node: &TxtNode<'a>) -> VisitResult {
//!         if let Some(text) = node.value {
//!             self.values.push(text);
//!         }
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let arena = AstArena::new();
//! let loc = Location::default();
//! let text = arena.alloc(TxtNode::new_text(NodeType::Str, "\"hi\"", Span::new(0, 4), loc, "hi"));
//! let doc = TxtNode::new_parent(
//!     NodeType::Document,
//!     "\"hi\"",
//!     Span::new(0, 4),
//!     loc,
//!     arena.alloc_slice_copy(&[*text]),
//! );
//!
//! let mut collector = ValueCollector { values: Vec::new() };
//! let _ = walk_node(&mut collector, &doc);
//! assert_eq!(collector.values, vec!["hi"]);
//! ```

mod visit;
mod walk;

pub use visit::{VisitResult, Visitor};
pub use walk::{walk_children, walk_node};

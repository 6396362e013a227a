//! # yakulint_ast
//!
//! TxtAST definitions for YakuLint.
//!
//! This crate provides the Abstract Syntax Tree (AST) types that localized
//! strings are lifted into. The shape follows textlint's TxtAST specification
//! (`type`, `raw`, `range`, `loc`, `children`, `value`) so that prose-linting
//! rules can run over translator-facing strings unchanged.
//!
//! ## Architecture
//!
//! - Uses `bumpalo` for Arena allocation
//! - All AST nodes for one parse invocation live in a single arena
//! - Nodes are `Copy` values and are never mutated after construction
//!
//! ## Example
//!
//! ```rust
//! use yakulint_ast::{AstArena, Location, NodeType, Position, Span, TxtNode};
//!
//! let arena = AstArena::new();
//! let loc = Location::new(Position::new(1, 0), Position::new(1, 7));
//!
//! let text = arena.alloc(TxtNode::new_text(
//!     NodeType::Str,
//!     "\"Hello\"",
//!     Span::new(0, 7),
//!     loc,
//!     "Hello",
//! ));
//! let doc = TxtNode::new_parent(
//!     NodeType::Document,
//!     "\"Hello\"",
//!     Span::new(0, 7),
//!     loc,
//!     arena.alloc_slice_copy(&[*text]),
//! );
//! assert_eq!(doc.children.len(), 1);
//! ```

mod arena;
mod node;
mod node_type;
mod span;
pub mod tester;
pub mod visitor;

pub use arena::AstArena;
pub use node::TxtNode;
pub use node_type::NodeType;
pub use span::{Location, Position, Span};
pub use tester::{AstShapeError, is_txt_ast, validate_ast};

// Re-export commonly used visitor items for convenience
pub use visitor::{VisitResult, Visitor};

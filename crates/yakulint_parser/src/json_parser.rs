//! JSON locale file parser.

use yakulint_ast::{AstArena, TxtNode};

use crate::document::{SourceKind, assemble_document};
use crate::{ParseError, Parser};

/// Parser for standalone JSON locale files.
///
/// Every top-level member is treated as a locale; no filter is applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonParser;

impl JsonParser {
    /// Creates a new JSON locale parser.
    pub fn new() -> Self {
        Self
    }
}

impl Parser for JsonParser {
    fn name(&self) -> &str {
        "json"
    }

    fn extensions(&self) -> &[&str] {
        &["json"]
    }

    fn parse<'a>(&self, arena: &'a AstArena, source: &str) -> Result<TxtNode<'a>, ParseError> {
        let source = arena.alloc_str(source);
        assemble_document(arena, source, &SourceKind::PlainResource, None)
    }
}

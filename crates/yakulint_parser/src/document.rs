//! Assembling the `Document` root out of lifted literals.

use yakulint_ast::{AstArena, Location, NodeType, Position, Span, TxtNode};

use crate::ParseError;
use crate::json::{LocaleFilter, flatten_string_leaves, pick_locales};
use crate::lift::{Anchor, lift_literal};
use crate::location::range_to_line_column;
use crate::sfc::SfcBlock;

/// Where the JSON to extract lives inside a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind<'s> {
    /// The whole file is a JSON locale resource.
    PlainResource,
    /// The JSON is the content of a component's `<i18n>` block.
    ComponentBlock(SfcBlock<'s>),
}

impl<'s> SourceKind<'s> {
    /// Returns the parsed region and where it starts in `source`.
    fn region(&self, source: &'s str) -> (&'s str, Anchor) {
        match self {
            SourceKind::PlainResource => (source, Anchor::ORIGIN),
            SourceKind::ComponentBlock(block) => (block.content, Anchor::at(source, block.start)),
        }
    }
}

/// Builds the `Document` for `source`, extracting the strings of `kind`.
///
/// The document always covers the whole of `source`; its children are one
/// `Paragraph > Str` per string literal of the selected locales, in source
/// order.
///
/// # Errors
///
/// Returns the [`ParseError`] of the first failure in the extracted JSON,
/// positioned in `source`.
pub fn assemble_document<'a>(
    arena: &'a AstArena,
    source: &'a str,
    kind: &SourceKind<'a>,
    locales: Option<&LocaleFilter>,
) -> Result<TxtNode<'a>, ParseError> {
    let (region, anchor) = kind.region(source);

    let entries = pick_locales(region, locales).map_err(|e| e.anchored(&anchor))?;
    let paragraphs: Vec<TxtNode<'a>> = entries
        .iter()
        .flat_map(|entry| flatten_string_leaves(&entry.value, region))
        .map(|leaf| lift_literal(arena, &leaf, &anchor, region))
        .collect();

    let span = Span::new(0, source.len() as u32);
    Ok(TxtNode::new_parent(
        NodeType::Document,
        source,
        span,
        range_to_line_column(source, span),
        arena.alloc_slice_fill_iter(paragraphs),
    ))
}

/// Returns the document of a file with nothing to extract.
pub const fn empty_document() -> TxtNode<'static> {
    TxtNode::new_parent(
        NodeType::Document,
        "",
        Span::new(0, 0),
        Location::point(Position::START),
        &[],
    )
}

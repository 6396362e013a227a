//! Lifting JSON string literals into `Paragraph > Str` fragments.
//!
//! A literal's span and position are first known relative to the region that
//! was parsed. The region's [`Anchor`] says where that region starts in the
//! original file; the absolute coordinates are `anchor ⊕ relative`, composed
//! once per literal.

use yakulint_ast::{AstArena, Location, NodeType, Position, Span, TxtNode};

use crate::json::LeafLiteral;
use crate::location::{position_to_line_column, range_to_line_column};

/// Start of a parsed region inside the original file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    /// Absolute byte offset of the region start.
    pub offset: u32,
    /// Absolute position of the region start.
    pub position: Position,
}

impl Anchor {
    /// Anchor of a region that starts at the beginning of the file.
    pub const ORIGIN: Anchor = Anchor {
        offset: 0,
        position: Position::START,
    };

    /// Creates an anchor at byte `offset` of `full_text`.
    pub fn at(full_text: &str, offset: usize) -> Self {
        Self {
            offset: offset as u32,
            position: position_to_line_column(full_text, offset),
        }
    }

    /// Maps a position relative to the region onto the original file.
    ///
    /// Only the region's first line shares the anchor's column; every later
    /// line of the region is a whole line of the original file.
    #[inline]
    pub const fn compose(&self, relative: Position) -> Position {
        if relative.line == 1 {
            Position::new(self.position.line, self.position.column + relative.column)
        } else {
            Position::new(self.position.line + relative.line - 1, relative.column)
        }
    }

    /// Maps a span relative to the region onto the original file.
    #[inline]
    pub const fn compose_span(&self, relative: Span) -> Span {
        relative.shifted(self.offset)
    }
}

/// Lifts `leaf` by composing its position in `region` with `anchor`.
///
/// `region` must be the text the leaf was parsed from.
pub fn lift_literal<'a>(
    arena: &'a AstArena,
    leaf: &LeafLiteral<'a>,
    anchor: &Anchor,
    region: &str,
) -> TxtNode<'a> {
    let relative = range_to_line_column(region, leaf.span);
    let loc = Location::new(anchor.compose(relative.start), anchor.compose(relative.end));
    literal_fragment(arena, leaf, anchor.compose_span(leaf.span), loc)
}

/// Lifts `leaf` by locating its absolute span directly in `full_text`.
///
/// Produces the same fragment as [`lift_literal`]; it trades the composition
/// for a scan of the full text.
pub fn lift_literal_absolute<'a>(
    arena: &'a AstArena,
    leaf: &LeafLiteral<'a>,
    anchor: &Anchor,
    full_text: &str,
) -> TxtNode<'a> {
    let span = anchor.compose_span(leaf.span);
    literal_fragment(arena, leaf, span, range_to_line_column(full_text, span))
}

fn literal_fragment<'a>(
    arena: &'a AstArena,
    leaf: &LeafLiteral<'a>,
    span: Span,
    loc: Location,
) -> TxtNode<'a> {
    let value = arena.alloc_str(&leaf.value);
    let text = TxtNode::new_text(NodeType::Str, leaf.raw, span, loc, value);
    TxtNode::new_parent(
        NodeType::Paragraph,
        leaf.raw,
        span,
        loc,
        arena.alloc_slice_copy(&[text]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{flatten_string_leaves, pick_locales};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Position::new(1, 0), Position::new(3, 6))]
    #[case(Position::new(1, 4), Position::new(3, 10))]
    #[case(Position::new(2, 0), Position::new(4, 0))]
    #[case(Position::new(5, 7), Position::new(7, 7))]
    fn composes_positions(#[case] relative: Position, #[case] expected: Position) {
        let anchor = Anchor {
            offset: 40,
            position: Position::new(3, 6),
        };
        assert_eq!(anchor.compose(relative), expected);
    }

    #[test]
    fn origin_anchor_is_identity() {
        let relative = Position::new(4, 2);
        assert_eq!(Anchor::ORIGIN.compose(relative), relative);
        assert_eq!(Anchor::ORIGIN.compose_span(Span::new(3, 9)), Span::new(3, 9));
    }

    #[test]
    fn anchor_at_counts_characters_before_region() {
        let full = "<p>朝</p>\n  <i18n>{}</i18n>";
        let offset = full.find('{').unwrap();
        let anchor = Anchor::at(full, offset);

        assert_eq!(anchor.offset, offset as u32);
        assert_eq!(anchor.position, Position::new(2, 8));
    }

    fn lift_all<'a>(
        arena: &'a AstArena,
        full: &'a str,
        region_start: usize,
        region_end: usize,
    ) -> Vec<(TxtNode<'a>, TxtNode<'a>)> {
        let region = &full[region_start..region_end];
        let anchor = Anchor::at(full, region_start);
        pick_locales(region, None)
            .unwrap()
            .iter()
            .flat_map(|entry| flatten_string_leaves(&entry.value, region))
            .map(|leaf| {
                (
                    lift_literal(arena, &leaf, &anchor, region),
                    lift_literal_absolute(arena, &leaf, &anchor, full),
                )
            })
            .collect()
    }

    #[test]
    fn composed_and_absolute_lifts_agree_on_multiline_region() {
        let full = concat!(
            "<template>\n",
            "  <p>{{ $t('hello') }}</p>\n",
            "</template>\n",
            "\n",
            "  <i18n>{\"en\": {\"hello\": \"Hello\"},\n",
            "    \"ja\": {\n",
            "      \"hello\": \"こんにちは\", \"bye\": \"さようなら\"\n",
            "    }}\n",
            "</i18n>\n",
        );
        let start = full.find("{\"en\"").unwrap();
        let end = full.find("\n</i18n>").unwrap();

        let arena = AstArena::new();
        let lifted = lift_all(&arena, full, start, end);

        assert_eq!(lifted.len(), 3);
        for (composed, absolute) in &lifted {
            assert_eq!(composed.span, absolute.span);
            assert_eq!(composed.loc, absolute.loc);
            assert_eq!(composed.span.slice(full), Some(composed.raw));
        }

        // First-line literal inherits the anchor column
        let (hello_en, _) = &lifted[0];
        assert_eq!(hello_en.loc.start, Position::new(5, 25));
        // Later-line literal keeps its own column
        let (hello_ja, _) = &lifted[1];
        assert_eq!(hello_ja.loc.start, Position::new(7, 15));
        assert_eq!(hello_ja.loc.end, Position::new(7, 22));
    }

    #[test]
    fn lifted_fragment_is_paragraph_wrapping_str() {
        let full = "xx{\"en\": \"a\\tb\"}";
        let arena = AstArena::new();
        let lifted = lift_all(&arena, full, 2, full.len());
        let (paragraph, _) = &lifted[0];

        assert_eq!(paragraph.node_type, NodeType::Paragraph);
        assert_eq!(paragraph.raw, "\"a\\tb\"");
        assert_eq!(paragraph.children.len(), 1);

        let text = &paragraph.children[0];
        assert_eq!(text.node_type, NodeType::Str);
        assert_eq!(text.raw, paragraph.raw);
        assert_eq!(text.value, Some("a\tb"));
        assert_eq!(text.span, paragraph.span);
        assert_eq!(text.loc, paragraph.loc);
        assert_eq!(text.span, Span::new(9, 15));
        assert_eq!(
            text.loc,
            Location::new(Position::new(1, 9), Position::new(1, 15))
        );
    }
}

//! Span and position types for source locations.
//!
//! These types represent positions within source text, compatible with
//! textlint's TxtAST specification.

use serde::{Deserialize, Serialize};

/// A position in source text.
///
/// Uses 1-indexed lines and 0-indexed columns for compatibility with
/// textlint and JavaScript AST conventions. Columns count characters,
/// not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (0-indexed).
    pub column: u32,
}

impl Position {
    /// The first position of any text.
    pub const START: Position = Position { line: 1, column: 0 };

    /// Creates a new position.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

/// A span representing a range in source text.
///
/// Uses byte offsets (0-indexed) for efficient slicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (0-indexed, inclusive).
    pub start: u32,
    /// End byte offset (0-indexed, exclusive).
    pub end: u32,
}

impl Span {
    /// Creates a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Returns the length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns true if the span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if `other` lies entirely within this span.
    #[inline]
    pub const fn encloses(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns this span moved forward by `offset` bytes.
    #[inline]
    pub const fn shifted(&self, offset: u32) -> Span {
        Span {
            start: self.start + offset,
            end: self.end + offset,
        }
    }

    /// Returns the slice of `text` covered by this span, if it is in bounds.
    #[inline]
    pub fn slice<'t>(&self, text: &'t str) -> Option<&'t str> {
        text.get(self.start as usize..self.end as usize)
    }
}

/// Location information combining start and end positions.
///
/// This is used for serialization to match textlint's `loc` format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Location {
    /// Start position.
    pub start: Position,
    /// End position.
    pub end: Position,
}

impl Location {
    /// Creates a new location.
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Creates a zero-width location at `position`.
    #[inline]
    pub const fn point(position: Position) -> Self {
        Self {
            start: position,
            end: position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position() {
        let pos = Position::new(1, 0);
        assert_eq!(pos, Position::START);
        assert_eq!(Position::default(), Position::START);
    }

    #[test]
    fn test_span() {
        let span = Span::new(10, 20);
        assert_eq!(span.len(), 10);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_empty_span() {
        let span = Span::new(5, 5);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn test_span_shifted() {
        let span = Span::new(3, 8).shifted(100);
        assert_eq!(span, Span::new(103, 108));
    }

    #[test]
    fn test_span_encloses() {
        let outer = Span::new(0, 100);
        assert!(outer.encloses(&Span::new(20, 30)));
        assert!(outer.encloses(&Span::new(0, 100)));
        assert!(!outer.encloses(&Span::new(90, 101)));
    }

    #[test]
    fn test_span_slice() {
        let text = "{\"ja\":\"朝\"}";
        assert_eq!(Span::new(6, 11).slice(text), Some("\"朝\""));
        // Not a char boundary
        assert_eq!(Span::new(7, 8).slice(text), None);
        // Out of bounds
        assert_eq!(Span::new(0, 100).slice(text), None);
    }

    #[test]
    fn test_location_point() {
        let loc = Location::point(Position::START);
        assert_eq!(loc.start, loc.end);
        assert_eq!(loc, Location::default());
    }

    #[test]
    fn test_location_serialization() {
        let loc = Location::new(Position::new(1, 0), Position::new(2, 3));
        let json = serde_json::to_value(loc).unwrap();
        assert_eq!(json["start"]["line"], 1);
        assert_eq!(json["start"]["column"], 0);
        assert_eq!(json["end"]["line"], 2);
        assert_eq!(json["end"]["column"], 3);
    }

    #[test]
    fn test_span_deserialization() {
        let json = r#"{"start": 5, "end": 15}"#;
        let span: Span = serde_json::from_str(json).unwrap();
        assert_eq!(span, Span::new(5, 15));
    }
}

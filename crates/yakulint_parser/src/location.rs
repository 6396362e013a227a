//! Conversions between byte offsets and line/column positions.
//!
//! Lines are 1-indexed and separated by `\n`. Columns are 0-indexed and count
//! characters, so a column never lands inside a multi-byte sequence.

use yakulint_ast::{Location, Position, Span};

/// Converts a byte offset in `text` into a line/column position.
///
/// `offset == text.len()` yields the end-of-file position. Offsets past the
/// end, or inside a multi-byte character, are clamped back to the nearest
/// character boundary.
pub fn position_to_line_column(text: &str, offset: usize) -> Position {
    let prefix = &text[..clamp_to_boundary(text, offset)];
    let line = prefix.bytes().filter(|&b| b == b'\n').count() + 1;
    let line_start = prefix.rfind('\n').map_or(0, |idx| idx + 1);
    let column = prefix[line_start..].chars().count();

    Position::new(line as u32, column as u32)
}

/// Converts both ends of `span` into a [`Location`] over `text`.
pub fn range_to_line_column(text: &str, span: Span) -> Location {
    Location::new(
        position_to_line_column(text, span.start as usize),
        position_to_line_column(text, span.end as usize),
    )
}

/// Converts a line/column position back into a byte offset in `text`.
///
/// Returns `None` if `position.line` does not exist in `text`. A column past
/// the end of its line is clamped to the line end.
pub fn line_column_to_offset(text: &str, position: Position) -> Option<usize> {
    if position.line == 0 {
        return None;
    }

    let mut line_start = 0;
    for _ in 1..position.line {
        let newline = text[line_start..].find('\n')?;
        line_start += newline + 1;
    }

    let line = &text[line_start..];
    let line_len = line.find('\n').unwrap_or(line.len());
    let column_offset = line[..line_len]
        .char_indices()
        .nth(position.column as usize)
        .map_or(line_len, |(idx, _)| idx);

    Some(line_start + column_offset)
}

fn clamp_to_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

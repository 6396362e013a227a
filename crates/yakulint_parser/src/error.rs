//! Parse error types.

use thiserror::Error;
use yakulint_ast::Position;

use crate::lift::Anchor;

/// Errors that can occur during parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The JSON text is malformed.
    #[error("Invalid JSON at line {line}, column {column}: {message}")]
    InvalidJson {
        /// Error message, without location.
        message: String,
        /// Line of the error (1-indexed).
        line: u32,
        /// Column of the error in characters (0-indexed).
        column: u32,
    },

    /// The top-level JSON value is not an object keyed by locale.
    #[error("JSON must be an object, found {found}")]
    NotAnObject {
        /// Kind of value found at the top level.
        found: &'static str,
    },

    /// An internal parser error occurred.
    #[error("Internal parser error: {0}")]
    Internal(String),
}

impl ParseError {
    /// Creates a new invalid JSON error at `position`.
    pub fn invalid_json(message: impl Into<String>, position: Position) -> Self {
        Self::InvalidJson {
            message: message.into(),
            line: position.line,
            column: position.column,
        }
    }

    /// Creates a new not-an-object error.
    pub fn not_an_object(found: &'static str) -> Self {
        Self::NotAnObject { found }
    }

    /// Moves a position relative to a parsed region onto the original file.
    pub(crate) fn anchored(self, anchor: &Anchor) -> Self {
        match self {
            Self::InvalidJson {
                message,
                line,
                column,
            } => Self::invalid_json(message, anchor.compose(Position::new(line, column))),
            other => other,
        }
    }
}

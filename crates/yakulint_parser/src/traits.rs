//! Parser trait definition.

use yakulint_ast::{AstArena, TxtNode};

use crate::ParseError;

/// Trait for lifting the localized strings of a source file into TxtAST.
///
/// Every implementation returns a `Document` whose ranges and locations refer
/// to the full `source` passed in, whatever region of it was actually parsed.
///
/// # Example
///
/// ```rust
/// use yakulint_ast::{AstArena, TxtNode};
/// use yakulint_parser::{ParseError, Parser, empty_document};
///
/// /// Claims `.po` files but extracts nothing yet.
/// struct GettextParser;
///
/// impl Parser for GettextParser {
///     fn name(&self) -> &str {
///         "gettext"
///     }
///
///     fn extensions(&self) -> &[&str] {
///         &["po", "pot"]
///     }
///
///     fn parse<'a>(&self, _arena: &'a AstArena, _source: &str) -> Result<TxtNode<'a>, ParseError> {
///         Ok(empty_document())
///     }
/// }
///
/// assert!(GettextParser.can_parse("PO"));
/// assert!(!GettextParser.can_parse("json"));
/// ```
pub trait Parser {
    /// Returns the name of this parser.
    fn name(&self) -> &str;

    /// Returns the file extensions this parser handles.
    ///
    /// Extensions should not include the leading dot (e.g., `["json"]`).
    fn extensions(&self) -> &[&str];

    /// Parses the full text of a file into a TxtAST document.
    ///
    /// Malformed input fails fast; there is no partial result.
    fn parse<'a>(&self, arena: &'a AstArena, source: &str) -> Result<TxtNode<'a>, ParseError>;

    /// Returns true if this parser can handle the given file extension.
    fn can_parse(&self, extension: &str) -> bool {
        self.extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
